use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes surfaced by Open Invite API calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    Unauthorized,
    NotFound,
    RateLimited,
    InvalidPayload,
    InternalError,
}

impl ErrorCode {
    /// Maps an HTTP status code to the closest error code.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::Unauthorized,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            _ => Self::InternalError,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::NotFound => "NOT_FOUND",
            Self::RateLimited => "RATE_LIMITED",
            Self::InvalidPayload => "INVALID_PAYLOAD",
            Self::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Errors raised while normalizing a raw entitlements payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("Invalid field `{field}`: {source}")]
    InvalidField {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
