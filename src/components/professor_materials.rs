// ============================================================================
// PROFESSOR MATERIALS - materials of one professor for one course
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::add_to_playlist_dialog::AddToPlaylistDialog;
use crate::components::alert::{InlineAlert, Spinner};
use crate::components::material_preview::MaterialPreview;
use crate::components::upload_modal::UploadModal;
use crate::hooks::{use_fetch, use_session, use_shell};
use crate::models::{Material, MaterialKind};
use crate::router::Route;
use crate::services::CatalogService;
use crate::state::{FetchState, Toast};
use crate::utils::UPLOAD_UNDER_REVIEW_MESSAGE;
use crate::viewmodels::MaterialsViewModel;

#[derive(Properties, PartialEq)]
pub struct ProfessorMaterialsProps {
    pub major: String,
    pub course: String,
    pub professor: String,
    #[prop_or_default]
    pub kind: Option<MaterialKind>,
    #[prop_or_default]
    pub professor_id: Option<String>,
    #[prop_or_default]
    pub course_id: Option<String>,
}

#[function_component(ProfessorMaterials)]
pub fn professor_materials(props: &ProfessorMaterialsProps) -> Html {
    let session = use_session();
    let shell = use_shell();
    let kind = props.kind.unwrap_or_default();

    let materials = use_fetch(
        (props.major.clone(), props.course.clone(), props.professor.clone(), kind),
        |(major, course, professor, kind)| async move {
            CatalogService::new().materials(&major, &course, &professor, kind).await
        },
    );
    let search = use_state(String::new);
    let upload_open = use_state(|| false);
    let playlist_target = use_state(|| None::<Material>);

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                search.set(input.value());
            }
        })
    };

    let select_kind = |target: MaterialKind| {
        let navigate = shell.navigate.clone();
        let route = shell.route.with_kind(target);
        Callback::from(move |_: MouseEvent| navigate.emit(route.clone()))
    };

    let on_upload_click = {
        let session = session.clone();
        let notify = shell.notify.clone();
        let request_login = shell.request_login.clone();
        let upload_open = upload_open.clone();
        Callback::from(move |_: MouseEvent| {
            if session.is_authenticated() {
                upload_open.set(true);
            } else {
                notify.emit(Toast::warning("Please sign in to upload materials"));
                request_login.emit(());
            }
        })
    };

    let on_uploaded = {
        let notify = shell.notify.clone();
        let reload = materials.reload.clone();
        Callback::from(move |_| {
            notify.emit(Toast::info(UPLOAD_UNDER_REVIEW_MESSAGE));
            reload.emit(());
        })
    };

    let open_playlist_dialog = |material: Material| {
        let session = session.clone();
        let notify = shell.notify.clone();
        let request_login = shell.request_login.clone();
        let playlist_target = playlist_target.clone();
        Callback::from(move |_: MouseEvent| {
            if session.is_authenticated() {
                playlist_target.set(Some(material.clone()));
            } else {
                notify.emit(Toast::warning("Please sign in to add to playlist"));
                request_login.emit(());
            }
        })
    };

    let body = match &*materials.state {
        FetchState::Idle | FetchState::Loading => html! { <Spinner /> },
        FetchState::Failed(message) => html! {
            <InlineAlert message={message.clone()} on_dismiss={Some(materials.dismiss.clone())} />
        },
        FetchState::Dismissed => html! {},
        FetchState::Loaded(data) => {
            let vm = MaterialsViewModel::new(kind, data.clone()).with_search((*search).clone());
            match vm.empty_message() {
                Some(message) => html! { <p class="empty-state">{message}</p> },
                None => html! {
                    <div class="material-grid">
                        { for vm.visible().into_iter().map(|material| {
                            let title = material.display_title();
                            html! {
                                <article class="material-card" key={material.data.clone()}>
                                    <header>
                                        <h3>{title.clone()}</h3>
                                        <button class="btn-link" onclick={open_playlist_dialog(material.clone())}>
                                            {"➕ Playlist"}
                                        </button>
                                    </header>
                                    <MaterialPreview title={title} url={material.data.clone()} />
                                </article>
                            }
                        }) }
                    </div>
                },
            }
        }
    };

    let back_to_course = props.course_id.clone().map(|id| {
        let navigate = shell.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::Course { id: id.clone() }))
    });

    html! {
        <div class="page professor-materials">
            <nav class="breadcrumbs">
                <span>{props.major.clone()}</span>
                <span>{" / "}</span>
                <span>{props.course.clone()}</span>
                <span>{" / "}</span>
                <span>{props.professor.clone()}</span>
            </nav>
            <div class="page-header">
                if let Some(onclick) = back_to_course {
                    <button class="icon-button" aria-label="Back" {onclick}>{"←"}</button>
                }
                <h1>{props.professor.clone()}</h1>
                <button class="btn-primary" onclick={on_upload_click}>{"⬆ Upload"}</button>
            </div>

            <div class="kind-tabs">
                { for MaterialKind::ALL.iter().map(|k| html! {
                    <button
                        class={if *k == kind { "tab active" } else { "tab" }}
                        onclick={select_kind(*k)}
                    >
                        {k.label()}
                    </button>
                }) }
            </div>

            <input
                class="search-input"
                type="search"
                placeholder="Search materials by title"
                value={(*search).clone()}
                oninput={on_search}
            />

            {body}

            <UploadModal
                open={*upload_open}
                professor_id={props.professor_id.clone().unwrap_or_default()}
                course_id={props.course_id.clone().unwrap_or_default()}
                on_close={{
                    let upload_open = upload_open.clone();
                    Callback::from(move |_| upload_open.set(false))
                }}
                {on_uploaded}
            />

            if let Some(material) = (*playlist_target).clone() {
                <AddToPlaylistDialog
                    {material}
                    on_close={{
                        let playlist_target = playlist_target.clone();
                        Callback::from(move |_| playlist_target.set(None))
                    }}
                />
            }
        </div>
    }
}
