// ============================================================================
// ERRORS
// ============================================================================
// Screens collapse all of these into one generic message; the variants only
// exist so the log line says what actually happened.
// ============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {0} ms")]
    Timeout(u32),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("parse error: {0}")]
    Decode(String),

    #[error("request build error: {0}")]
    Encode(String),

    /// The screen that issued the request was dismissed before it resolved
    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("field `{0}` is required")]
    MissingRequired(&'static str),
}

/// Errors from a form submission: either the draft was rejected locally or
/// the request failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("the resort wizard is closed")]
    Closed,

    #[error("the resort wizard was dismissed while a request was in flight")]
    Cancelled,
}
