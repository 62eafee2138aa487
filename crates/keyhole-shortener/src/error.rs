use keyhole_core::{CoreError, StorageError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShortenerError>;

#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    #[error("URL must not be empty")]
    EmptyUrl,
    #[error("URL is malformed: {0}")]
    MalformedUrl(String),
    #[error("invalid short key: {0}")]
    InvalidShortKey(String),
    #[error("no free short key found for url after {attempts} attempts")]
    KeySpaceExhausted { attempts: u32 },
    #[error("storage error: {0}")]
    Storage(String),
}

impl ShortenerError {
    /// Whether this error was caused by bad caller input.
    ///
    /// Transports typically map these to a client error (e.g. HTTP 400)
    /// and everything else to a server error.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::EmptyUrl | Self::MalformedUrl(_))
    }
}

impl From<CoreError> for ShortenerError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::InvalidShortKey(message) => Self::InvalidShortKey(message),
        }
    }
}

impl From<StorageError> for ShortenerError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value.to_string())
    }
}
