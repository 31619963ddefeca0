// ============================================================================
// UPLOAD MODAL - send a file to the moderation queue
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::alert::InlineAlert;
use crate::error::AppError;
use crate::hooks::use_session;
use crate::models::MaterialKind;
use crate::services::{UploadErrors, UploadFile, UploadForm};

#[derive(Properties, PartialEq)]
pub struct UploadModalProps {
    pub open: bool,
    pub professor_id: String,
    pub course_id: String,
    pub on_close: Callback<()>,
    pub on_uploaded: Callback<()>,
}

async fn read_file(file: web_sys::File) -> Result<UploadFile, AppError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| AppError::Validation(format!("Could not read the selected file ({:?})", e)))?;
    Ok(UploadFile {
        name: file.name(),
        mime: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

#[function_component(UploadModal)]
pub fn upload_modal(props: &UploadModalProps) -> Html {
    let session = use_session();
    let file = use_state(|| None::<UploadFile>);
    let kind = use_state(|| None::<MaterialKind>);
    let field_errors = use_state(UploadErrors::default);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_file = {
        let file = file.clone();
        let field_errors = field_errors.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            let Some(picked) = e
                .target_dyn_into::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                return;
            };
            let file = file.clone();
            let field_errors = field_errors.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match read_file(picked).await {
                    Ok(read) => {
                        file.set(Some(read));
                        field_errors.set(UploadErrors { file: None, ..(*field_errors).clone() });
                    }
                    Err(e) => error.set(Some(e.user_message())),
                }
            });
        })
    };

    let on_kind = {
        let kind = kind.clone();
        let field_errors = field_errors.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                kind.set(select.value().parse().ok());
                field_errors.set(UploadErrors { kind: None, ..(*field_errors).clone() });
            }
        })
    };

    let on_submit = {
        let session = session.clone();
        let (file, kind, field_errors, error, loading) =
            (file.clone(), kind.clone(), field_errors.clone(), error.clone(), loading.clone());
        let (professor_id, course_id) = (props.professor_id.clone(), props.course_id.clone());
        let (on_close, on_uploaded) = (props.on_close.clone(), props.on_uploaded.clone());

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);

            let form = UploadForm {
                file: (*file).clone(),
                kind: *kind,
                professor_id: professor_id.clone(),
                course_id: course_id.clone(),
            };
            if let Err(errors) = form.validate() {
                field_errors.set(errors);
                return;
            }

            loading.set(true);
            let uploads = session.uploads();
            let (file, kind, error, loading) = (file.clone(), kind.clone(), error.clone(), loading.clone());
            let (on_close, on_uploaded) = (on_close.clone(), on_uploaded.clone());
            wasm_bindgen_futures::spawn_local(async move {
                match uploads.submit(&form).await {
                    Ok(()) => {
                        file.set(None);
                        kind.set(None);
                        on_uploaded.emit(());
                        on_close.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ upload failed: {}", e);
                        error.set(Some(e.user_message()));
                    }
                }
                loading.set(false);
            });
        })
    };

    if !props.open {
        return html! {};
    }

    let on_cancel = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <h2>{"Upload Material"}</h2>
                if let Some(message) = (*error).clone() {
                    <InlineAlert message={message} />
                }
                <form class="upload-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="upload-file">{"File"}</label>
                        <input id="upload-file" type="file" onchange={on_file} />
                        if let Some(picked) = &*file {
                            <span class="file-name">{picked.name.clone()}</span>
                        }
                        if let Some(message) = &field_errors.file {
                            <span class="field-error">{message.clone()}</span>
                        }
                    </div>
                    <div class="form-group">
                        <label for="upload-kind">{"Material Type"}</label>
                        <select id="upload-kind" onchange={on_kind}>
                            <option value="" selected={kind.is_none()}>{"Select a type"}</option>
                            { for MaterialKind::ALL.iter().map(|k| html! {
                                <option value={k.as_str()} selected={*kind == Some(*k)}>{k.label()}</option>
                            }) }
                        </select>
                        if let Some(message) = &field_errors.kind {
                            <span class="field-error">{message.clone()}</span>
                        }
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" onclick={on_cancel}>{"Cancel"}</button>
                        <button type="submit" class="btn-primary" disabled={*loading}>
                            { if *loading { "Uploading..." } else { "Upload" } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
