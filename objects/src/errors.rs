use reqwest::StatusCode;

use thiserror::Error;



#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP code: {status}. Response: {body}")]
    Status {
        status: StatusCode,
        body: String,
    },

    #[error("JSON parsing error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("bearer token is not a valid header value")]
    InvalidToken,
}

impl ProbeError {
    /// Failures worth another attempt: the request never completed, or the
    /// server answered with a 5xx.
    pub fn is_transient(&self) -> bool {
        match self {
            ProbeError::Transport(_) => true,
            ProbeError::Status { status, .. } => status.is_server_error(),
            _ => false,
        }
    }
}
