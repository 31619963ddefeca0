#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "alert-success",
            Severity::Info => "alert-info",
            Severity::Warning => "alert-warning",
            Severity::Error => "alert-error",
        }
    }
}

/// Transient message shown over the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Success }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Info }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Warning }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Error }
    }
}
