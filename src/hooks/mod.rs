pub mod session_context;
pub mod use_fetch;
pub mod use_shell;
pub mod use_theme;
pub mod use_toast;

pub use session_context::{use_session, SessionHandle, SessionProvider};
pub use use_fetch::{use_fetch, UseFetchHandle};
pub use use_shell::{use_shell, Shell};
pub use use_theme::{use_theme, UseThemeHandle};
pub use use_toast::{use_toast, UseToastHandle};
