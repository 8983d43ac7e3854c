use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Session expired. Sign in again.")]
    Unauthorized,

    #[error("Purchase receipt error: {0}")]
    Receipt(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Clone, Copy, Debug)]
pub enum ErrorCode {
    BackendError,
    Unauthorized,
    ReceiptError,
    StorageError,
    InvalidInput,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::BackendError => "BACKEND_ERROR",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::ReceiptError => "RECEIPT_ERROR",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Backend(_) => ErrorCode::BackendError,
            AppError::Unauthorized => ErrorCode::Unauthorized,
            AppError::Receipt(_) => ErrorCode::ReceiptError,
            AppError::Storage(_) => ErrorCode::StorageError,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
