use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use keyhole_core::error::StorageError;
use keyhole_core::repository::{InsertOutcome, ReadRepository, Repository, UrlRecord};
use keyhole_core::shortkey::ShortKey;

type Result<T> = std::result::Result<T, StorageError>;

/// In-memory implementation of the Repository trait using DashMap.
///
/// DashMap provides better concurrency than RwLock<HashMap> because it
/// uses sharded locks, allowing concurrent reads and writes to different
/// buckets without blocking. The entry API makes `insert_if_vacant` a
/// single atomic step per key, so a reader can never observe a key
/// without its record.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    storage: DashMap<String, UrlRecord>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, key: &str) -> Result<Option<UrlRecord>> {
        Ok(self.storage.get(key).map(|entry| entry.value().clone()))
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.storage.contains_key(key))
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.storage.len())
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert_if_vacant(&self, key: &ShortKey, record: UrlRecord) -> Result<InsertOutcome> {
        match self.storage.entry(key.as_str().to_owned()) {
            Entry::Occupied(occupied) => Ok(InsertOutcome::Occupied(occupied.get().clone())),
            Entry::Vacant(vacant) => {
                vacant.insert(record);
                Ok(InsertOutcome::Inserted)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> ShortKey {
        ShortKey::new_unchecked(s)
    }

    fn record(url: &str) -> UrlRecord {
        UrlRecord {
            original_url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn insert_and_get() {
        let repo = InMemoryRepository::new();

        let outcome = repo
            .insert_if_vacant(&key("abc123"), record("https://example.com"))
            .await
            .unwrap();
        assert_eq!(outcome, InsertOutcome::Inserted);

        let result = repo.get("abc123").await.unwrap().unwrap();
        assert_eq!(result.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let repo = InMemoryRepository::new();

        let result = repo.get("nope").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn occupied_key_is_not_overwritten() {
        let repo = InMemoryRepository::new();

        repo.insert_if_vacant(&key("abc123"), record("https://example.com"))
            .await
            .unwrap();

        let outcome = repo
            .insert_if_vacant(&key("abc123"), record("https://other.com"))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            InsertOutcome::Occupied(record("https://example.com"))
        );

        // The original mapping survives.
        let result = repo.get("abc123").await.unwrap().unwrap();
        assert_eq!(result.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn exists_checks() {
        let repo = InMemoryRepository::new();

        assert!(!repo.exists("abc123").await.unwrap());

        repo.insert_if_vacant(&key("abc123"), record("https://example.com"))
            .await
            .unwrap();

        assert!(repo.exists("abc123").await.unwrap());
    }

    #[tokio::test]
    async fn len_and_is_empty() {
        let repo = InMemoryRepository::new();

        assert!(repo.is_empty().await.unwrap());

        repo.insert_if_vacant(&key("abc123"), record("https://example.com"))
            .await
            .unwrap();
        repo.insert_if_vacant(&key("def456"), record("https://other.com"))
            .await
            .unwrap();

        assert_eq!(repo.len().await.unwrap(), 2);
        assert!(!repo.is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn concurrent_access() {
        use std::sync::Arc;

        let repo = Arc::new(InMemoryRepository::new());
        let mut handles = vec![];

        for i in 0..10u64 {
            let repo = Arc::clone(&repo);
            let handle = tokio::spawn(async move {
                let k = ShortKey::new_unchecked(format!("key{:03}", i));
                let r = UrlRecord {
                    original_url: format!("https://example{}.com", i),
                };
                repo.insert_if_vacant(&k, r).await.unwrap();
            });
            handles.push(handle);
        }

        for i in 0..10u64 {
            let repo = Arc::clone(&repo);
            let handle = tokio::spawn(async move {
                let _ = repo.get(&format!("key{:03}", i)).await;
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.await.unwrap();
        }

        for i in 0..10u64 {
            let result = repo.get(&format!("key{:03}", i)).await.unwrap().unwrap();
            assert_eq!(result.original_url, format!("https://example{}.com", i));
        }
    }

    #[tokio::test]
    async fn concurrent_insert_same_key_single_winner() {
        use std::sync::Arc;

        let repo = Arc::new(InMemoryRepository::new());
        let mut handles = vec![];

        for i in 0..8u64 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                let r = UrlRecord {
                    original_url: format!("https://racer{}.com", i),
                };
                repo.insert_if_vacant(&ShortKey::new_unchecked("contested"), r)
                    .await
                    .unwrap()
            }));
        }

        let mut inserted = 0;
        for handle in handles {
            if handle.await.unwrap() == InsertOutcome::Inserted {
                inserted += 1;
            }
        }

        // Exactly one writer wins; everyone else observes its record.
        assert_eq!(inserted, 1);
        assert_eq!(repo.len().await.unwrap(), 1);
    }
}
