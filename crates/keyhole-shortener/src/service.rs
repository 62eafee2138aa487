use crate::error::{Result, ShortenerError};
use crate::generator::{ContentHashGenerator, Generator};
use crate::shortener::Shortener;
use async_trait::async_trait;
use keyhole_core::{InsertOutcome, Repository, ShortKey, UrlRecord};
use std::sync::Arc;

/// Probe budget for collision resolution. With 40-bit keys a single
/// genuine collision is already rare; running out of attempts means the
/// key space is effectively saturated.
const DEFAULT_MAX_ATTEMPTS: u32 = 32;

/// A concrete implementation of the [`Shortener`] trait.
///
/// This service wraps a `Repository` and a `Generator` to handle:
/// - URL validation
/// - Content-derived short key generation
/// - Idempotent insertion and collision probing
///
/// Shortening is atomic with respect to concurrent callers without a
/// store-wide lock: candidate keys are derived deterministically from
/// the URL, and the repository's compare-and-insert decides the single
/// winner per key. Two concurrent calls for the same URL therefore
/// converge on the same key, and an existing key is never reassigned
/// to a different URL.
#[derive(Debug, Clone)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
    max_attempts: u32,
}

impl<R: Repository> ShortenerService<R, ContentHashGenerator> {
    /// Creates a `ShortenerService` with the default content-hash generator.
    pub fn new(repository: R) -> Self {
        Self::with_generator(repository, ContentHashGenerator::new())
    }
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    /// Creates a new `ShortenerService` with a custom generator.
    pub fn with_generator(repository: R, generator: G) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Validates that the URL is non-empty and carries an http scheme.
    fn validate_url(url: &str) -> Result<()> {
        if url.is_empty() {
            return Err(ShortenerError::EmptyUrl);
        }

        // Basic validation: "scheme://rest" with a non-empty rest.
        let parts: Vec<&str> = url.split("://").collect();
        if parts.len() < 2 || parts[0].is_empty() || parts[1].is_empty() {
            return Err(ShortenerError::MalformedUrl(format!(
                "URL must have a valid scheme and host: {}",
                url
            )));
        }

        let scheme = parts[0].to_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(ShortenerError::MalformedUrl(format!(
                "URL scheme must be http or https: {}",
                scheme
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Shortener for ShortenerService<R, G> {
    async fn shorten(&self, url: &str) -> Result<ShortKey> {
        // Validation happens before any state mutation; a rejected call
        // leaves the mapping exactly as it was.
        Self::validate_url(url)?;

        for attempt in 0..self.max_attempts {
            let key: ShortKey = self.generator.derive(url, attempt).into();
            let record = UrlRecord {
                original_url: url.to_owned(),
            };

            match self.repository.insert_if_vacant(&key, record).await? {
                InsertOutcome::Inserted => {
                    tracing::debug!(key = %key, attempt, "shortened url");
                    return Ok(key);
                }
                // Same URL already stored under this key, either by an
                // earlier call or by a concurrent one: idempotent hit.
                InsertOutcome::Occupied(existing) if existing.original_url == url => {
                    return Ok(key);
                }
                InsertOutcome::Occupied(_) => {
                    tracing::warn!(key = %key, attempt, "short key collision, probing");
                }
            }
        }

        Err(ShortenerError::KeySpaceExhausted {
            attempts: self.max_attempts,
        })
    }

    async fn get_original(&self, key: &str) -> Result<Option<String>> {
        let record = self.repository.get(key).await?;
        Ok(record.map(|r| r.original_url))
    }
}
