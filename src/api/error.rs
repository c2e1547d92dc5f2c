//! Errors surfaced by the REST client

use crate::state::ErrorBody;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response; `message` is what the service reported
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Build a server error from a failed response's status and body.
    ///
    /// Uses the body's `message` field when present, otherwise the status line.
    pub fn from_response(status: reqwest::StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| status.to_string());
        ApiError::Server {
            status: status.as_u16(),
            message,
        }
    }

    /// Text for the flash line
    pub fn flash_message(&self) -> String {
        self.to_string()
    }
}
