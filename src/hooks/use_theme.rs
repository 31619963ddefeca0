use yew::prelude::*;

use crate::state::ThemeMode;
use crate::utils::LocalStore;

#[derive(Clone, PartialEq)]
pub struct UseThemeHandle {
    pub mode: ThemeMode,
    pub toggle: Callback<()>,
}

#[hook]
pub fn use_theme() -> UseThemeHandle {
    let mode = use_state(|| ThemeMode::load(&LocalStore));

    let toggle = {
        let mode = mode.clone();
        Callback::from(move |_| {
            let next = mode.toggled();
            next.save(&LocalStore);
            mode.set(next);
        })
    };

    UseThemeHandle { mode: *mode, toggle }
}
