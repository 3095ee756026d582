//! Unified client error handling
//!
//! Every backend interaction funnels its failure through [`ClientError`] so
//! callers can branch on the class of failure (notably 401) without looking
//! at raw status codes.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Backend error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

/// Error body shape the backend uses when it bothers to send one.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub code: Option<String>,
    pub message: Option<String>,
}

impl ClientError {
    /// Map a non-success response status plus best-effort message.
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized(message),
            StatusCode::FORBIDDEN => Self::Forbidden(message),
            StatusCode::NOT_FOUND => Self::NotFound(message),
            StatusCode::BAD_REQUEST => Self::BadRequest(message),
            StatusCode::CONFLICT => Self::Conflict(message),
            _ => Self::Api {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// True for 401s, which the UI surfaces as "session expired".
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
