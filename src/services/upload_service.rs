// ============================================================================
// UPLOAD SERVICE - submit a material to the moderation queue
// ============================================================================
// Uploads never publish directly: they land in `/approvals` and show up in
// the materials list only once a moderator accepts them.
// ============================================================================

use crate::error::AppError;
use crate::models::MaterialKind;
use crate::services::api_client::ApiClient;
use crate::services::transport::{FormPart, GlooTransport, Transport};
use crate::state::AuthState;
use crate::utils::extract_file_name;

pub const UPLOAD_LOGIN_REQUIRED: &str = "You must be logged in to upload materials";
pub const FILE_REQUIRED: &str = "Please select a file to upload";
pub const KIND_REQUIRED: &str = "Please select a material type";

/// A file picked in the browser, already read into memory.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Per-field messages for the upload form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadErrors {
    pub file: Option<String>,
    pub kind: Option<String>,
}

impl UploadErrors {
    pub fn is_empty(&self) -> bool {
        self.file.is_none() && self.kind.is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadForm {
    pub file: Option<UploadFile>,
    pub kind: Option<MaterialKind>,
    pub professor_id: String,
    pub course_id: String,
}

impl UploadForm {
    pub fn validate(&self) -> Result<(), UploadErrors> {
        let errors = UploadErrors {
            file: self.file.is_none().then(|| FILE_REQUIRED.to_string()),
            kind: self.kind.is_none().then(|| KIND_REQUIRED.to_string()),
        };
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Multipart fields in the order the approvals endpoint reads them.
    /// `None` while the form is incomplete.
    pub fn to_parts(&self) -> Option<Vec<FormPart>> {
        let file = self.file.as_ref()?;
        let kind = self.kind?;
        Some(vec![
            FormPart::File {
                name: "file".into(),
                file_name: file.name.clone(),
                mime: file.mime.clone(),
                bytes: file.bytes.clone(),
            },
            FormPart::text("type", kind.as_str()),
            FormPart::text("title", extract_file_name(&file.name)),
            FormPart::text("professor_id", self.professor_id.clone()),
            FormPart::text("course_id", self.course_id.clone()),
        ])
    }
}

#[derive(Clone)]
pub struct UploadService<T = GlooTransport> {
    api: ApiClient<T>,
    auth: AuthState,
}

impl<T: Transport> UploadService<T> {
    pub fn new(api: ApiClient<T>, auth: AuthState) -> Self {
        Self { api, auth }
    }

    /// Validates, then posts the form to the approvals queue.
    ///
    /// # Errors
    ///
    /// `Validation` for an incomplete form and `Auth` without a session, both
    /// before any request is made.
    pub async fn submit(&self, form: &UploadForm) -> Result<(), AppError> {
        if let Err(errors) = form.validate() {
            let message = [errors.file, errors.kind]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(". ");
            return Err(AppError::Validation(message));
        }
        let token = self
            .auth
            .token()
            .ok_or_else(|| AppError::Auth(UPLOAD_LOGIN_REQUIRED.to_string()))?;
        let parts = form
            .to_parts()
            .ok_or_else(|| AppError::Validation(FILE_REQUIRED.to_string()))?;

        self.api.submit_for_approval(&token, parts).await?;
        log::info!("📤 material submitted for review");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Session;
    use crate::services::transport::testing::ScriptedTransport;
    use crate::services::transport::RequestBody;
    use futures::executor::block_on;
    use serde_json::json;

    fn signed_in() -> AuthState {
        let auth = AuthState::new();
        auth.set_session(Session { id: "u1".into(), email: "a@pmu.edu".into(), token: "tok".into(), expires_at: None });
        auth
    }

    fn complete_form() -> UploadForm {
        UploadForm {
            file: Some(UploadFile {
                name: "midterm_2023.pdf".into(),
                mime: "application/pdf".into(),
                bytes: vec![0x25, 0x50, 0x44, 0x46],
            }),
            kind: Some(MaterialKind::Olds),
            professor_id: "prof-1".into(),
            course_id: "course-7".into(),
        }
    }

    #[test]
    fn empty_form_reports_both_fields() {
        let errors = UploadForm::default().validate().unwrap_err();
        assert_eq!(errors.file.as_deref(), Some(FILE_REQUIRED));
        assert_eq!(errors.kind.as_deref(), Some(KIND_REQUIRED));
    }

    #[test]
    fn incomplete_form_makes_no_request() {
        let transport = ScriptedTransport::new();
        let service = UploadService::new(ApiClient::with_transport(transport.clone()), signed_in());
        let form = UploadForm { kind: Some(MaterialKind::Notes), ..Default::default() };

        let err = block_on(service.submit(&form)).unwrap_err();
        assert_eq!(err, AppError::Validation(FILE_REQUIRED.into()));
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn signed_out_upload_makes_no_request() {
        let transport = ScriptedTransport::new();
        let service = UploadService::new(ApiClient::with_transport(transport.clone()), AuthState::new());
        let err = block_on(service.submit(&complete_form())).unwrap_err();
        assert_eq!(err, AppError::Auth(UPLOAD_LOGIN_REQUIRED.into()));
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn valid_upload_posts_multipart_to_approvals() {
        let transport = ScriptedTransport::new().reply(201, json!({ "status": "pending" }));
        let service = UploadService::new(ApiClient::with_transport(transport.clone()), signed_in());
        block_on(service.submit(&complete_form())).unwrap();

        let req = transport.last_request().unwrap();
        assert_eq!(req.path, "/approvals");
        assert_eq!(req.bearer.as_deref(), Some("tok"));
        let RequestBody::Multipart(parts) = req.body else {
            panic!("expected multipart body");
        };
        let names: Vec<_> = parts.iter().map(FormPart::name).collect();
        assert_eq!(names, vec!["file", "type", "title", "professor_id", "course_id"]);
        assert_eq!(parts[1], FormPart::text("type", "olds"));
        assert_eq!(parts[2], FormPart::text("title", "midterm 2023"));
    }
}
