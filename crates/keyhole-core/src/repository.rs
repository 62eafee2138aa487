use crate::error::StorageError;
use crate::shortkey::ShortKey;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

type Result<T> = std::result::Result<T, StorageError>;

/// A stored URL record in the repository.
///
/// Records are created once by the shortener and never mutated: the
/// original URL behind a given short key does not change for the
/// lifetime of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// The original URL that was shortened.
    pub original_url: String,
}

/// Outcome of a compare-and-insert against the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The key was vacant and the record is now stored under it.
    Inserted,
    /// The key was already taken; the existing record is returned
    /// unchanged and nothing was written.
    Occupied(UrlRecord),
}

/// A read-only view of a repository.
///
/// Lookups take an arbitrary `&str` rather than a [`ShortKey`]: an
/// unknown or even syntactically invalid key is a normal miss, never
/// an error.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the URL record for a given short key.
    /// Returns `None` if the key does not exist.
    async fn get(&self, key: &str) -> Result<Option<UrlRecord>>;

    /// Checks whether a short key already exists in the repository.
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Returns the number of records in the repository.
    async fn len(&self) -> Result<usize>;

    /// Returns `true` if the repository holds no records.
    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Atomically inserts `record` under `key` if the key is vacant.
    ///
    /// If the key is already taken, the existing record is returned via
    /// [`InsertOutcome::Occupied`] and the mapping is left untouched —
    /// an existing key is never overwritten with a different URL.
    ///
    /// The check and the insert happen as a single atomic step with
    /// respect to concurrent callers.
    async fn insert_if_vacant(&self, key: &ShortKey, record: UrlRecord) -> Result<InsertOutcome>;
}
