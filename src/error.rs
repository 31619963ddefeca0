// ============================================================================
// APP ERROR - one error union for every service and view
// ============================================================================

use thiserror::Error;

/// Errors surfaced by services and rendered by views.
///
/// Nothing here is fatal: views catch it at their boundary and show
/// [`AppError::user_message`] inline or in a toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// The backend could not be reached at all.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Bad credentials, or a protected action attempted without a session.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Client-side form checks.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Duplicate resource (e.g. email already registered).
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Storage error: {0}")]
    Storage(String),

    /// The fetch was superseded or its view unmounted.
    #[error("Request cancelled")]
    Cancelled,
}

impl AppError {
    /// Builds an HTTP error, keeping the backend's message when it sent one.
    pub fn http(status: u16, message: Option<String>) -> Self {
        AppError::Http {
            status,
            message: message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| format!("API request failed with status {}", status)),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the backend was unreachable or refused the request.
    /// Catalog views use this to decide on the offline mock fallback.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, AppError::Network(_) | AppError::Http { .. })
    }

    /// Text shown to the user in alerts and toasts.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Network(detail) => format!("Could not reach the server ({})", detail),
            AppError::Http { message, .. } => message.clone(),
            AppError::Auth(message)
            | AppError::Validation(message)
            | AppError::Conflict(message) => message.clone(),
            AppError::Parse(_) => "The server sent an unexpected response".to_string(),
            AppError::Storage(detail) => format!("Local storage unavailable ({})", detail),
            AppError::Cancelled => String::new(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Parse(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
