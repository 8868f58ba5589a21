use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Malformed request input. The message is safe to show to the caller.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Your requested Item is not found")]
    NotFound,

    #[error("Storage error")]
    StorageError,

    #[error("Request timed out")]
    Timeout,

    /// Reserved for write paths.
    #[error("Your Item already exist")]
    Conflict,
}

impl CoreError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
