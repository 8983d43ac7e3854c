use openinvite_types::{ErrorCode, PayloadError};
use thiserror::Error;

/// SDK-specific errors.
#[derive(Debug, Error)]
pub enum OpenInviteError {
    /// API returned a non-success status
    #[error("API error: {code} - {message}")]
    ApiError { code: ErrorCode, message: String },

    /// Response body could not be normalized into entitlements
    #[error("Invalid entitlements payload: {0}")]
    InvalidPayload(#[from] PayloadError),

    /// Network error (only with `client` feature)
    #[cfg(feature = "client")]
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl OpenInviteError {
    /// The API error code, when the failure came from the server.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            Self::InvalidPayload(_) => Some(ErrorCode::InvalidPayload),
            _ => None,
        }
    }
}
