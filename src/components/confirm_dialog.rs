use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmDeleteProps {
    pub playlist_name: AttrValue,
    /// The delete request is running.
    #[prop_or_default]
    pub busy: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

fn delete_prompt(playlist_name: &str) -> String {
    format!(
        "Are you sure you want to delete \"{}\"? This action cannot be undone.",
        playlist_name
    )
}

/// Asks before a playlist is deleted.
#[function_component(ConfirmDeleteDialog)]
pub fn confirm_delete_dialog(props: &ConfirmDeleteProps) -> Html {
    html! {
        <div class="modal-backdrop">
            <div class="modal" role="alertdialog" aria-labelledby="delete-dialog-title">
                <h2 id="delete-dialog-title">{"Delete Playlist"}</h2>
                <p>{delete_prompt(&props.playlist_name)}</p>
                <div class="modal-actions">
                    <button class="btn-secondary" onclick={props.on_cancel.reform(|_: MouseEvent| ())}>
                        {"Cancel"}
                    </button>
                    <button
                        class="btn-danger"
                        onclick={props.on_confirm.reform(|_: MouseEvent| ())}
                        disabled={props.busy}
                    >
                        { if props.busy { "Deleting…" } else { "Delete" } }
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_the_playlist() {
        assert_eq!(
            delete_prompt("Finals"),
            "Are you sure you want to delete \"Finals\"? This action cannot be undone."
        );
    }
}
