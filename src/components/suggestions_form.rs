use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::use_shell;
use crate::services::{ApiClient, SuggestionService};
use crate::state::Toast;

#[function_component(SuggestionsForm)]
pub fn suggestions_form() -> Html {
    let shell = use_shell();
    let suggestion = use_state(String::new);
    let description = use_state(String::new);
    let sending = use_state(|| false);

    let on_suggestion = {
        let suggestion = suggestion.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                suggestion.set(input.value());
            }
        })
    };

    let on_description = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                description.set(area.value());
            }
        })
    };

    let on_submit = {
        let notify = shell.notify.clone();
        let (suggestion, description, sending) = (suggestion.clone(), description.clone(), sending.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let notify = notify.clone();
            let (suggestion, description, sending) = (suggestion.clone(), description.clone(), sending.clone());
            let (text, details) = ((*suggestion).clone(), (*description).clone());
            sending.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match SuggestionService::new(ApiClient::new()).submit(&text, &details).await {
                    Ok(()) => {
                        suggestion.set(String::new());
                        description.set(String::new());
                        notify.emit(Toast::success("Thank you! Your suggestion has been submitted."));
                    }
                    Err(e) => notify.emit(Toast::error(e.user_message())),
                }
                sending.set(false);
            });
        })
    };

    html! {
        <div class="page suggestions">
            <h1>{"Suggestions"}</h1>
            <p class="subtitle">{"Missing a course, a professor or a feature? Let us know."}</p>
            <form class="suggestion-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="suggestion">{"Suggestion"}</label>
                    <input id="suggestion" type="text" value={(*suggestion).clone()} oninput={on_suggestion} />
                </div>
                <div class="form-group">
                    <label for="description">{"Description"}</label>
                    <textarea id="description" rows="4" value={(*description).clone()} oninput={on_description} />
                </div>
                <button type="submit" class="btn-primary" disabled={*sending}>
                    { if *sending { "Sending..." } else { "Submit" } }
                </button>
            </form>
        </div>
    }
}
