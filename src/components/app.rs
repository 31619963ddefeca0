// ============================================================================
// APP - providers, History API routing and page layout
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::{
    AuthModal, CourseDetails, HomePage, MajorDetails, Navbar, PlaylistDetails, Playlists, ProfessorMaterials,
    SuggestionsForm, ToastView,
};
use crate::hooks::{use_theme, use_toast, SessionProvider, Shell};
use crate::router::{current_route, push_route, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <AppShell />
        </SessionProvider>
    }
}

fn render_page(route: &Route) -> Html {
    match route.clone() {
        Route::Home => html! { <HomePage /> },
        Route::Major { title } => html! { <MajorDetails {title} /> },
        Route::Course { id } => html! { <CourseDetails {id} /> },
        Route::Materials { major, course, professor, kind, professor_id, course_id } => html! {
            <ProfessorMaterials {major} {course} {professor} {kind} {professor_id} {course_id} />
        },
        Route::Suggestions => html! { <SuggestionsForm /> },
        Route::Playlists => html! { <Playlists /> },
        Route::Playlist { id } => html! { <PlaylistDetails {id} /> },
        Route::NotFound => html! {
            <div class="page not-found">
                <h1>{"Page not found"}</h1>
                <p>{"The page you are looking for does not exist."}</p>
            </div>
        },
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    let route = use_state(current_route);
    let theme = use_theme();
    let toast = use_toast();
    let auth_open = use_state(|| false);

    // Back/forward buttons
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn Fn(web_sys::Event)>::new(move |_: web_sys::Event| {
                route.set(current_route());
            });
            let window = web_sys::window();
            if let Some(w) = &window {
                if let Err(e) = w.add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref()) {
                    log::error!("❌ popstate listener not registered: {:?}", e);
                }
            }
            move || {
                if let Some(w) = window {
                    let _ = w.remove_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref());
                }
            }
        });
    }

    let navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            log::debug!("🧭 {}", next.to_path());
            push_route(&next);
            if let Some(w) = web_sys::window() {
                w.scroll_to_with_x_and_y(0.0, 0.0);
            }
            route.set(next);
        })
    };

    let request_login = {
        let auth_open = auth_open.clone();
        Callback::from(move |_| auth_open.set(true))
    };

    let shell = Shell {
        route: (*route).clone(),
        navigate,
        notify: toast.show.clone(),
        request_login,
    };

    let close_auth = {
        let auth_open = auth_open.clone();
        Callback::from(move |_| auth_open.set(false))
    };

    html! {
        <ContextProvider<Shell> context={shell}>
            <div class={classes!("app-container", theme.mode.css_class())}>
                <Navbar theme={theme.mode} on_toggle_theme={theme.toggle.clone()} />
                <main class="content-container">
                    { render_page(&route) }
                </main>
                <AuthModal open={*auth_open} on_close={close_auth} />
                <ToastView toast={toast.current.clone()} on_close={toast.dismiss.clone()} />
            </div>
        </ContextProvider<Shell>>
    }
}
