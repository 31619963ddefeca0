use crate::error::AppError;
use crate::models::Suggestion;
use crate::services::api_client::ApiClient;
use crate::services::transport::{GlooTransport, Transport};

pub const SUGGESTION_REQUIRED: &str = "Please enter your suggestion";

/// Anonymous feedback; no session needed.
#[derive(Clone, Debug, PartialEq)]
pub struct SuggestionService<T = GlooTransport> {
    api: ApiClient<T>,
}

impl<T: Transport> SuggestionService<T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self { api }
    }

    pub async fn submit(&self, suggestion: &str, description: &str) -> Result<(), AppError> {
        let suggestion = suggestion.trim();
        if suggestion.is_empty() {
            return Err(AppError::Validation(SUGGESTION_REQUIRED.into()));
        }
        let body = Suggestion {
            suggestion: suggestion.to_string(),
            description: description.trim().to_string(),
        };
        self.api.submit_suggestion(&body).await?;
        log::info!("💡 suggestion sent");
        Ok(())
    }
}
