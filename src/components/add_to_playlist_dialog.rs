use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::alert::{InlineAlert, Spinner};
use crate::error::AppError;
use crate::hooks::{use_fetch, use_session, use_shell};
use crate::models::Material;
use crate::state::{FetchState, Toast};
use crate::viewmodels::PlaylistPickerViewModel;

#[derive(Properties, PartialEq)]
pub struct AddToPlaylistDialogProps {
    pub material: Material,
    pub on_close: Callback<()>,
}

#[function_component(AddToPlaylistDialog)]
pub fn add_to_playlist_dialog(props: &AddToPlaylistDialogProps) -> Html {
    let session = use_session();
    let shell = use_shell();
    let playlists = {
        let service = session.playlists();
        use_fetch((), move |_| async move { service.list().await })
    };
    let selected = use_state(|| None::<String>);
    let new_name = use_state(String::new);
    let busy = use_state(|| false);

    let picker = PlaylistPickerViewModel {
        playlists: playlists.state.data().cloned().unwrap_or_default(),
        selected: (*selected).clone(),
    };

    let on_select = {
        let selected = selected.clone();
        let picker = picker.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                selected.set(picker.select(&select.value()).selected);
            }
        })
    };

    let on_name = {
        let new_name = new_name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                new_name.set(input.value());
            }
        })
    };

    let on_create = {
        let service = session.playlists();
        let notify = shell.notify.clone();
        let (playlists, selected, new_name, busy) = (playlists.clone(), selected.clone(), new_name.clone(), busy.clone());
        let picker = picker.clone();
        Callback::from(move |_: MouseEvent| {
            let service = service.clone();
            let notify = notify.clone();
            let (playlists, selected, new_name, busy) = (playlists.clone(), selected.clone(), new_name.clone(), busy.clone());
            let picker = picker.clone();
            let name = (*new_name).clone();
            busy.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match service.create(&name).await {
                    Ok(created) => {
                        notify.emit(Toast::success(format!("Playlist \"{}\" created", created.name)));
                        let next = picker.with_created(created);
                        playlists.set_data(next.playlists);
                        selected.set(next.selected);
                        new_name.set(String::new());
                    }
                    Err(AppError::Validation(message)) => notify.emit(Toast::warning(message)),
                    Err(e) => {
                        log::error!("❌ create playlist: {}", e);
                        notify.emit(Toast::error("Failed to create playlist"));
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_add = {
        let service = session.playlists();
        let notify = shell.notify.clone();
        let on_close = props.on_close.clone();
        let material = props.material.clone();
        let (selected, busy) = (selected.clone(), busy.clone());
        Callback::from(move |_: MouseEvent| {
            let Some(playlist_id) = (*selected).clone() else {
                return;
            };
            let (service, notify, on_close, material, busy) =
                (service.clone(), notify.clone(), on_close.clone(), material.clone(), busy.clone());
            busy.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match service.add_material(&playlist_id, &material).await {
                    Ok(()) => {
                        notify.emit(Toast::success("Material added to playlist successfully"));
                        on_close.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ add to playlist: {}", e);
                        notify.emit(Toast::error("Failed to add material to playlist"));
                    }
                }
                busy.set(false);
            });
        })
    };

    let list = match &*playlists.state {
        FetchState::Idle | FetchState::Loading => html! { <Spinner /> },
        FetchState::Failed(message) => html! {
            <InlineAlert message={message.clone()} on_dismiss={Some(playlists.dismiss.clone())} />
        },
        FetchState::Dismissed => html! {},
        FetchState::Loaded(_) if picker.playlists.is_empty() => html! {
            <p class="empty-state">{"You have no playlists yet. Create one below."}</p>
        },
        FetchState::Loaded(_) => html! {
            <select class="playlist-select" onchange={on_select}>
                <option value="" selected={picker.selected.is_none()}>{"Choose a playlist"}</option>
                { for picker.playlists.iter().map(|p| html! {
                    <option value={p.id.clone()} selected={picker.selected.as_deref() == Some(p.id.as_str())}>
                        {p.name.clone()}
                    </option>
                }) }
            </select>
        },
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <h2>{"Add to Playlist"}</h2>
                <p class="subtitle">{props.material.display_title()}</p>
                {list}
                <div class="form-row">
                    <input type="text" placeholder="New playlist name" value={(*new_name).clone()} oninput={on_name} />
                    <button class="btn-secondary" onclick={on_create} disabled={*busy}>{"Create"}</button>
                </div>
                <div class="modal-actions">
                    <button class="btn-secondary" onclick={props.on_close.reform(|_: MouseEvent| ())}>{"Cancel"}</button>
                    <button class="btn-primary" onclick={on_add} disabled={*busy || picker.selected_playlist().is_none()}>
                        {"Add"}
                    </button>
                </div>
            </div>
        </div>
    }
}
