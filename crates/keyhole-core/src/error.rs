use thiserror::Error;

/// Errors related to the core types of the URL shortener service.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid short key: {0}")]
    InvalidShortKey(String),
}

/// Errors surfaced by repository backends.
///
/// The in-memory repository never produces these; the variants exist so
/// that a remote or transactional backend can sit behind the same
/// [`Repository`][crate::repository::Repository] seam.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
}
