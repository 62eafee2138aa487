use crate::error::Result;
use async_trait::async_trait;
use keyhole_core::ShortKey;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Shortens a URL and returns its short key.
    ///
    /// Shortening the same URL twice yields the same key; the mapping
    /// is idempotent on input, not append-only.
    async fn shorten(&self, url: &str) -> Result<ShortKey>;

    /// Retrieves the original URL associated with the given short key.
    ///
    /// Unknown keys are a normal outcome and resolve to `Ok(None)` for
    /// any input string, never an error.
    async fn get_original(&self, key: &str) -> Result<Option<String>>;
}
