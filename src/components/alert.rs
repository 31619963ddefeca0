use yew::prelude::*;

use crate::state::{Severity, Toast};

#[derive(Properties, PartialEq)]
pub struct InlineAlertProps {
    pub message: AttrValue,
    #[prop_or(Severity::Error)]
    pub severity: Severity,
    #[prop_or_default]
    pub on_dismiss: Option<Callback<()>>,
}

/// Message rendered in place of (or above) a view's content.
#[function_component(InlineAlert)]
pub fn inline_alert(props: &InlineAlertProps) -> Html {
    let class = classes!("alert", props.severity.css_class());
    html! {
        <div class={class} role="alert">
            <span class="alert-message">{props.message.clone()}</span>
            if let Some(on_dismiss) = &props.on_dismiss {
                <button class="alert-close" aria-label="Dismiss" onclick={on_dismiss.reform(|_| ())}>{"✕"}</button>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastViewProps {
    pub toast: Option<Toast>,
    pub on_close: Callback<()>,
}

#[function_component(ToastView)]
pub fn toast_view(props: &ToastViewProps) -> Html {
    match &props.toast {
        Some(toast) => html! {
            <div class="toast-container">
                <InlineAlert
                    message={toast.message.clone()}
                    severity={toast.severity}
                    on_dismiss={Some(props.on_close.clone())}
                />
            </div>
        },
        None => html! {},
    }
}

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <div class="spinner-container">
            <div class="spinner"></div>
        </div>
    }
}
