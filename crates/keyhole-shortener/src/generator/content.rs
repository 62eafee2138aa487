use crate::generator::Generator;
use keyhole_core::base58::ShortKeyBase58;
use sha2::{Digest, Sha256};

/// Number of digest bytes kept for a key. Five bytes give a 40-bit key
/// space (~7 base58 characters), plenty of headroom before probing
/// becomes observable.
const DEFAULT_KEY_BYTES: usize = 5;

/// A content-derived short key generator.
///
/// Keys are a truncated SHA-256 digest of the URL, rendered as base58.
/// Attempt 0 hashes the URL alone; later attempts salt the digest with
/// the attempt counter, so probing past a collision stays deterministic
/// per URL.
#[derive(Debug, Clone)]
pub struct ContentHashGenerator {
    key_bytes: usize,
}

impl ContentHashGenerator {
    /// Creates a generator producing keys of the default width.
    pub fn new() -> Self {
        Self {
            key_bytes: DEFAULT_KEY_BYTES,
        }
    }

    /// Creates a generator keeping `key_bytes` bytes of the digest.
    ///
    /// Wider keys shrink the collision probability at the cost of
    /// longer short URLs. Clamped to 1..=16 so the encoded key always
    /// fits the `ShortKey` length bound.
    pub fn with_key_bytes(key_bytes: usize) -> Self {
        Self {
            key_bytes: key_bytes.clamp(1, 16),
        }
    }
}

impl Default for ContentHashGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for ContentHashGenerator {
    type Output = ShortKeyBase58;

    fn derive(&self, url: &str, attempt: u32) -> Self::Output {
        let mut hasher = Sha256::new();
        hasher.update(url.as_bytes());
        if attempt > 0 {
            hasher.update(attempt.to_be_bytes());
        }
        let digest = hasher.finalize();
        ShortKeyBase58::new(&digest[..self.key_bytes])
    }
}
