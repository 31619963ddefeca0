use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::state::Toast;

#[derive(Clone, PartialEq)]
pub struct UseToastHandle {
    pub current: Option<Toast>,
    pub show: Callback<Toast>,
    pub dismiss: Callback<()>,
}

/// One toast at a time; a new one replaces the old and restarts the timer.
#[hook]
pub fn use_toast() -> UseToastHandle {
    let current = use_state(|| None::<Toast>);
    let timer = use_mut_ref(|| None::<Timeout>);

    let dismiss = {
        let current = current.clone();
        let timer = timer.clone();
        Callback::from(move |_| {
            timer.borrow_mut().take();
            current.set(None);
        })
    };

    let show = {
        let current = current.clone();
        Callback::from(move |toast: Toast| {
            current.set(Some(toast));
            let current = current.clone();
            // Dropping the previous Timeout cancels it.
            *timer.borrow_mut() = Some(Timeout::new(CONFIG.toast_duration_ms, move || current.set(None)));
        })
    };

    UseToastHandle { current: (*current).clone(), show, dismiss }
}
