// ============================================================================
// SHELL CONTEXT - navigation, toasts and the sign-in dialog
// ============================================================================

use yew::prelude::*;

use crate::router::Route;
use crate::state::Toast;

/// App-wide actions any page can trigger.
#[derive(Clone, PartialEq)]
pub struct Shell {
    pub route: Route,
    pub navigate: Callback<Route>,
    pub notify: Callback<Toast>,
    pub request_login: Callback<()>,
}

impl Shell {
    fn detached() -> Self {
        Self {
            route: Route::Home,
            navigate: Callback::from(|route: Route| log::warn!("⚠️ no shell to navigate to {}", route.to_path())),
            notify: Callback::from(|toast: Toast| log::info!("{}", toast.message)),
            request_login: Callback::noop(),
        }
    }
}

#[hook]
pub fn use_shell() -> Shell {
    use_context::<Shell>().unwrap_or_else(Shell::detached)
}
