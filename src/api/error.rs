use thiserror::Error;

/// Fallback when the server rejects a submission without an `error` field.
pub const SUBMIT_REJECTED_FALLBACK: &str = "Failed to submit feedback";
/// Fallback when the request never reached the server.
pub const SUBMIT_TRANSPORT_FALLBACK: &str = "Something went wrong. Please try again later.";

/// Failure while talking to the feedback API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Server answered non-2xx; `message` is the body's `error` field when present.
    #[error("server rejected request: {}", message.as_deref().unwrap_or("no detail"))]
    Rejected { message: Option<String> },
}

impl ApiError {
    /// Message shown to the user for a failed submission.
    pub fn submit_message(&self) -> String {
        match self {
            ApiError::Rejected {
                message: Some(message),
            } => message.clone(),
            ApiError::Rejected { message: None } => SUBMIT_REJECTED_FALLBACK.to_string(),
            ApiError::Transport(_) => SUBMIT_TRANSPORT_FALLBACK.to_string(),
        }
    }
}
