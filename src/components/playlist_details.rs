use yew::prelude::*;

use crate::components::alert::{InlineAlert, Spinner};
use crate::components::confirm_dialog::ConfirmDeleteDialog;
use crate::components::material_preview::MaterialPreview;
use crate::hooks::{use_fetch, use_session, use_shell};
use crate::router::Route;
use crate::services::PLAYLISTS_LOGIN_REQUIRED;
use crate::state::{FetchState, Severity, Toast};

#[derive(Properties, PartialEq)]
pub struct PlaylistDetailsProps {
    pub id: String,
}

#[function_component(PlaylistDetails)]
pub fn playlist_details(props: &PlaylistDetailsProps) -> Html {
    let session = use_session();
    let shell = use_shell();
    let signed_in = session.is_authenticated();
    let playlist = {
        let service = session.playlists();
        use_fetch((props.id.clone(), signed_in), move |(id, signed_in)| async move {
            if signed_in {
                service.get(&id).await.map(Some)
            } else {
                Ok(None)
            }
        })
    };

    let confirming = use_state(|| false);
    let deleting = use_state(|| false);

    let back = {
        let navigate = shell.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::Playlists))
    };

    if !signed_in {
        return html! {
            <div class="page playlist-details">
                <InlineAlert message={PLAYLISTS_LOGIN_REQUIRED} severity={Severity::Warning} />
            </div>
        };
    }

    let ask_delete = {
        let confirming = confirming.clone();
        Callback::from(move |_: MouseEvent| confirming.set(true))
    };

    let close_delete = {
        let confirming = confirming.clone();
        Callback::from(move |_: ()| confirming.set(false))
    };

    let confirm_delete = {
        let service = session.playlists();
        let navigate = shell.navigate.clone();
        let notify = shell.notify.clone();
        let id = props.id.clone();
        let (confirming, deleting) = (confirming.clone(), deleting.clone());
        Callback::from(move |_: ()| {
            let (service, navigate, notify, id) = (service.clone(), navigate.clone(), notify.clone(), id.clone());
            let (confirming, deleting) = (confirming.clone(), deleting.clone());
            deleting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match service.delete(&id).await {
                    Ok(()) => {
                        notify.emit(Toast::success("Playlist deleted"));
                        navigate.emit(Route::Playlists);
                    }
                    Err(e) => notify.emit(Toast::error(e.user_message())),
                }
                deleting.set(false);
                confirming.set(false);
            });
        })
    };

    let body = match &*playlist.state {
        FetchState::Idle | FetchState::Loading | FetchState::Loaded(None) => html! { <Spinner /> },
        FetchState::Failed(message) => html! {
            <InlineAlert message={message.clone()} on_dismiss={Some(playlist.dismiss.clone())} />
        },
        FetchState::Dismissed => html! {},
        FetchState::Loaded(Some(playlist)) => html! {
            <>
                if *confirming {
                    <ConfirmDeleteDialog
                        playlist_name={playlist.name.clone()}
                        busy={*deleting}
                        on_confirm={confirm_delete.clone()}
                        on_cancel={close_delete.clone()}
                    />
                }
                <div class="page-header">
                    <button class="icon-button" aria-label="Back" onclick={back.clone()}>{"←"}</button>
                    <h1>{playlist.name.clone()}</h1>
                    <button class="btn-danger" onclick={ask_delete.clone()}>{"Delete Playlist"}</button>
                </div>
                if playlist.materials.is_empty() {
                    <p class="empty-state">{"This playlist is empty. Add materials from a professor's page."}</p>
                }
                <div class="material-grid">
                    { for playlist.materials.iter().map(|material| html! {
                        <article class="material-card" key={material.data.clone()}>
                            <header><h3>{material.title.clone()}</h3></header>
                            <MaterialPreview title={material.title.clone()} url={material.data.clone()} />
                        </article>
                    }) }
                </div>
            </>
        },
    };

    html! {
        <div class="page playlist-details">
            <nav class="breadcrumbs">
                <a href="/playlists" onclick={back}>{"My Playlists"}</a>
            </nav>
            {body}
        </div>
    }
}
