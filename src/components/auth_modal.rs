// ============================================================================
// AUTH MODAL - login and registration tabs
// ============================================================================

use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::alert::InlineAlert;
use crate::hooks::{use_session, use_shell};
use crate::state::{Severity, Toast};

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthTab {
    Login,
    Register,
}

#[derive(Properties, PartialEq)]
pub struct AuthModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

fn input_value(e: &InputEvent) -> Option<String> {
    e.target_dyn_into::<HtmlInputElement>().map(|input| input.value())
}

#[function_component(AuthModal)]
pub fn auth_modal(props: &AuthModalProps) -> Html {
    let session = use_session();
    let shell = use_shell();

    let tab = use_state(|| AuthTab::Login);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let full_name = use_state(String::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);

    let bind = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                field.set(value);
            }
        })
    };

    let switch_tab = |target: AuthTab| {
        let tab = tab.clone();
        let error = error.clone();
        let success = success.clone();
        Callback::from(move |_: MouseEvent| {
            tab.set(target);
            error.set(None);
            success.set(None);
        })
    };

    let on_submit = {
        let session = session.clone();
        let notify = shell.notify.clone();
        let on_close = props.on_close.clone();
        let (tab, email, password, full_name) = (tab.clone(), email.clone(), password.clone(), full_name.clone());
        let (loading, error, success) = (loading.clone(), error.clone(), success.clone());

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);
            success.set(None);
            loading.set(true);

            let session = session.clone();
            let notify = notify.clone();
            let on_close = on_close.clone();
            let current_tab = *tab;
            let (tab, password) = (tab.clone(), password.clone());
            let (loading, error, success) = (loading.clone(), error.clone(), success.clone());
            let (email_value, password_value, name_value) = ((*email).clone(), (*password).clone(), (*full_name).clone());

            wasm_bindgen_futures::spawn_local(async move {
                match current_tab {
                    AuthTab::Login => match session.service().login(&email_value, &password_value).await {
                        Ok(user) => {
                            success.set(Some("Login successful!".into()));
                            notify.emit(Toast::success(format!("Welcome back, {}", user.email)));
                            Timeout::new(1_000, move || on_close.emit(())).forget();
                        }
                        Err(e) => error.set(Some(e.user_message())),
                    },
                    AuthTab::Register => {
                        match session.service().register(&email_value, &name_value, &password_value).await {
                            Ok(()) => {
                                success.set(Some("Registration successful! You can now login.".into()));
                                Timeout::new(1_500, move || {
                                    tab.set(AuthTab::Login);
                                    password.set(String::new());
                                })
                                .forget();
                            }
                            Err(e) => error.set(Some(e.user_message())),
                        }
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    if !props.open {
        return html! {};
    }

    let is_register = *tab == AuthTab::Register;
    let tab_class = |t: AuthTab| if *tab == t { "tab active" } else { "tab" };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div class="modal" onclick={stop}>
                <div class="tabs">
                    <button class={tab_class(AuthTab::Login)} onclick={switch_tab(AuthTab::Login)}>{"Login"}</button>
                    <button class={tab_class(AuthTab::Register)} onclick={switch_tab(AuthTab::Register)}>{"Register"}</button>
                </div>

                if let Some(message) = (*error).clone() {
                    <InlineAlert message={message} />
                }
                if let Some(message) = (*success).clone() {
                    <InlineAlert message={message} severity={Severity::Success} />
                }

                <form class="auth-form" onsubmit={on_submit}>
                    if is_register {
                        <div class="form-group">
                            <label for="full-name">{"Full Name"}</label>
                            <input id="full-name" type="text" value={(*full_name).clone()} oninput={bind(&full_name)} />
                        </div>
                    }
                    <div class="form-group">
                        <label for="email">{"Email Address"}</label>
                        <input id="email" type="email" autocomplete="email" value={(*email).clone()} oninput={bind(&email)} />
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input id="password" type="password" value={(*password).clone()} oninput={bind(&password)} />
                    </div>
                    <button type="submit" class="btn-primary" disabled={*loading}>
                        { match (*loading, is_register) {
                            (true, _) => "Please wait...",
                            (false, true) => "Register",
                            (false, false) => "Login",
                        } }
                    </button>
                </form>
            </div>
        </div>
    }
}
