use yew::prelude::*;

use crate::hooks::{use_session, use_shell};
use crate::router::Route;
use crate::state::{ThemeMode, Toast};

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub theme: ThemeMode,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let session = use_session();
    let shell = use_shell();
    let menu_open = use_state(|| false);

    let go = |route: Route| {
        let navigate = shell.navigate.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            navigate.emit(route.clone());
        })
    };

    let on_logout = {
        let session = session.clone();
        let notify = shell.notify.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            session.service().logout();
            menu_open.set(false);
            notify.emit(Toast::info("You have been signed out"));
        })
    };

    let on_login = {
        let request_login = shell.request_login.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            request_login.emit(());
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let theme_icon = match props.theme {
        ThemeMode::Dark => "☀️",
        ThemeMode::Light => "🌙",
    };
    let menu_class = if *menu_open { "nav-links open" } else { "nav-links" };

    html! {
        <nav class="navbar">
            <a class="brand" href="/" onclick={go(Route::Home)}>{"📚 Campus Materials"}</a>
            <button class="menu-toggle" aria-label="Menu" onclick={toggle_menu}>{"☰"}</button>
            <div class={menu_class}>
                <a href="/" onclick={go(Route::Home)}>{"Home"}</a>
                <a href="/suggestions" onclick={go(Route::Suggestions)}>{"Suggestions"}</a>
                if let Some(user) = session.current() {
                    <a href="/playlists" onclick={go(Route::Playlists)}>{"My Playlists"}</a>
                    <span class="nav-user">{user.email}</span>
                    <button class="btn-link" onclick={on_logout}>{"Logout"}</button>
                } else {
                    <button class="btn-primary" onclick={on_login}>{"Login / Register"}</button>
                }
                <button
                    class="theme-toggle"
                    aria-label="Toggle theme"
                    onclick={props.on_toggle_theme.reform(|_| ())}
                >
                    {theme_icon}
                </button>
            </div>
        </nav>
    }
}
