use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::alert::{InlineAlert, Spinner};
use crate::components::confirm_dialog::ConfirmDeleteDialog;
use crate::error::AppError;
use crate::hooks::{use_fetch, use_session, use_shell};
use crate::models::Playlist;
use crate::router::Route;
use crate::services::PLAYLISTS_LOGIN_REQUIRED;
use crate::state::{FetchState, Severity, Toast};
use crate::viewmodels::PlaylistListViewModel;

#[function_component(Playlists)]
pub fn playlists() -> Html {
    let session = use_session();
    let shell = use_shell();
    let signed_in = session.current().map(|s| s.id);
    let list = {
        let service = session.playlists();
        use_fetch(signed_in.clone(), move |user| async move {
            match user {
                Some(_) => service.list().await,
                None => Ok(Vec::new()),
            }
        })
    };
    let new_name = use_state(String::new);
    let creating = use_state(|| false);
    let pending_delete = use_state(|| None::<Playlist>);
    let deleting = use_state(|| false);

    if signed_in.is_none() {
        return html! {
            <div class="page playlists">
                <h1>{"My Playlists"}</h1>
                <InlineAlert message={PLAYLISTS_LOGIN_REQUIRED} severity={Severity::Warning} />
            </div>
        };
    }

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
        let reload = list.reload.clone();
        let (new_name, creating) = (new_name.clone(), creating.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (service, notify, reload) = (service.clone(), notify.clone(), reload.clone());
            let (new_name, creating) = (new_name.clone(), creating.clone());
            let name = (*new_name).clone();
            creating.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match service.create(&name).await {
                    Ok(created) => {
                        notify.emit(Toast::success(format!("Playlist \"{}\" created", created.name)));
                        new_name.set(String::new());
                        reload.emit(());
                    }
                    Err(AppError::Validation(message)) => notify.emit(Toast::warning(message)),
                    Err(e) => notify.emit(Toast::error(e.user_message())),
                }
                creating.set(false);
            });
        })
    };

    let ask_delete = |playlist: Playlist| {
        let pending_delete = pending_delete.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            pending_delete.set(Some(playlist.clone()));
        })
    };

    let close_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_: ()| pending_delete.set(None))
    };

    let confirm_delete = {
        let service = session.playlists();
        let notify = shell.notify.clone();
        let list = list.clone();
        let (pending_delete, deleting) = (pending_delete.clone(), deleting.clone());
        Callback::from(move |_: ()| {
            let Some(playlist_id) = (*pending_delete).as_ref().map(|p| p.id.clone()) else {
                return;
            };
            let (service, notify, list) = (service.clone(), notify.clone(), list.clone());
            let (pending_delete, deleting) = (pending_delete.clone(), deleting.clone());
            deleting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match service.delete(&playlist_id).await {
                    Ok(()) => {
                        list.update_data(|items| {
                            PlaylistListViewModel::new(items.clone()).removed(&playlist_id).playlists().to_vec()
                        });
                        notify.emit(Toast::success("Playlist deleted"));
                    }
                    Err(e) => notify.emit(Toast::error(e.user_message())),
                }
                deleting.set(false);
                pending_delete.set(None);
            });
        })
    };

    let body = match &*list.state {
        FetchState::Idle | FetchState::Loading => html! { <Spinner /> },
        FetchState::Failed(message) => html! {
            <InlineAlert message={message.clone()} on_dismiss={Some(list.dismiss.clone())} />
        },
        FetchState::Dismissed => html! {},
        FetchState::Loaded(items) if items.is_empty() => html! {
            <p class="empty-state">{"You have no playlists yet."}</p>
        },
        FetchState::Loaded(items) => html! {
            <ul class="playlist-list">
                { for items.iter().map(|playlist| {
                    let navigate = shell.navigate.clone();
                    let route = Route::Playlist { id: playlist.id.clone() };
                    html! {
                        <li key={playlist.id.clone()} class="list-item"
                            onclick={Callback::from(move |_: MouseEvent| navigate.emit(route.clone()))}>
                            <span class="playlist-name">{playlist.name.clone()}</span>
                            <span class="playlist-count">{format!("{} materials", playlist.materials.len())}</span>
                            <button class="btn-danger" aria-label="Delete playlist" onclick={ask_delete(playlist.clone())}>
                                {"🗑"}
                            </button>
                        </li>
                    }
                }) }
            </ul>
        },
    };

    html! {
        <div class="page playlists">
            <h1>{"My Playlists"}</h1>
            <form class="form-row" onsubmit={on_create}>
                <input type="text" placeholder="New playlist name" value={(*new_name).clone()} oninput={on_name} />
                <button type="submit" class="btn-primary" disabled={*creating}>{"Create"}</button>
            </form>
            {body}
            if let Some(playlist) = &*pending_delete {
                <ConfirmDeleteDialog
                    playlist_name={playlist.name.clone()}
                    busy={*deleting}
                    on_confirm={confirm_delete}
                    on_cancel={close_delete}
                />
            }
        </div>
    }
}
