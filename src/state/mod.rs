// ============================================================================
// STATE MODULE - shared session state, per-view fetch state, UI flags
// ============================================================================

pub mod auth_state;
pub mod fetch_state;
pub mod lifecycle;
pub mod reactivity;
pub mod theme;
pub mod toast;

pub use auth_state::AuthState;
pub use fetch_state::FetchState;
pub use lifecycle::{CancellationToken, RequestScope};
pub use reactivity::{Observable, SubscriptionId};
pub use theme::ThemeMode;
pub use toast::{Severity, Toast};
