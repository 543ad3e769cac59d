use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapbookError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Photo or caption missing.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Present but unacceptable input, e.g. an over-long caption.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Photo too large: {0}")]
    TooLarge(String),

    #[error("Could not decode image: {0}")]
    Decode(String),

    #[error("Failed to upload photo: {0}")]
    UploadFailed(String),

    #[error("Record store error: {0}")]
    Record(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse classification used to pick a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    InvalidInput,
    TooLarge,
    UploadFailed,
    Record,
    Decode,
    Config,
}

impl ScrapbookError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScrapbookError::Validation(_) => ErrorKind::Validation,
            ScrapbookError::InvalidInput(_) => ErrorKind::InvalidInput,
            ScrapbookError::TooLarge(_) => ErrorKind::TooLarge,
            ScrapbookError::UploadFailed(_) => ErrorKind::UploadFailed,
            ScrapbookError::Record(_) => ErrorKind::Record,
            ScrapbookError::Decode(_) => ErrorKind::Decode,
            ScrapbookError::Config(_)
            | ScrapbookError::Io(_)
            | ScrapbookError::Yaml(_)
            | ScrapbookError::Json(_) => ErrorKind::Config,
        }
    }

    pub fn upload(cause: impl std::fmt::Display) -> Self {
        ScrapbookError::UploadFailed(cause.to_string())
    }

    pub fn record(cause: impl std::fmt::Display) -> Self {
        ScrapbookError::Record(cause.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScrapbookError>;
