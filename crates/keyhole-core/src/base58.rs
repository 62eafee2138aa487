use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Hash-derived key bytes encoded as a base58 string.
///
/// Base58 output is a strict subset of the alphanumeric alphabet, so
/// anything rendered through this type is safe in a URL path segment.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ShortKeyBase58(String);

impl ShortKeyBase58 {
    /// Creates a new `ShortKeyBase58` by encoding the given bytes as base58.
    ///
    /// # Type Parameters
    ///
    /// * `T` - A type that can be referenced as a byte slice (e.g., `[u8]`,
    ///   `Vec<u8>`, or a truncated digest prefix).
    pub fn new<T: AsRef<[u8]>>(bytes: T) -> Self {
        let encoded = bs58::encode(bytes).into_string();
        Self(encoded)
    }

    /// Returns the encoded key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ShortKeyBase58 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ShortKeyBase58").field(&self.0).finish()
    }
}

impl Display for ShortKeyBase58 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ShortKeyBase58 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ShortKeyBase58 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(serde::de::Error::custom(format!(
                "not a base58 short key: '{}'",
                s
            )));
        }
        Ok(Self(s))
    }
}
