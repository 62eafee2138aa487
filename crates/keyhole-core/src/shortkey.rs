use crate::base58::ShortKeyBase58;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A validated short key identifier for a shortened URL.
///
/// Short keys are 1-32 characters long and contain only alphanumeric
/// characters, so they are always safe in a URL path segment.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortKey(String);

const MAX_LENGTH: usize = 32;

impl ShortKey {
    /// Creates a new `ShortKey` after validating the input.
    ///
    /// Valid keys are 1-32 characters and contain only `[a-zA-Z0-9]`.
    pub fn new(key: impl Into<String>) -> std::result::Result<Self, CoreError> {
        let key = key.into();
        Self::validate(&key)?;
        Ok(Self(key))
    }

    /// Creates a `ShortKey` without validation.
    ///
    /// Use this only for keys produced by trusted internal sources
    /// (e.g. generators whose output alphabet is already alphanumeric).
    pub fn new_unchecked(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self)
    }

    /// Returns the short key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(key: &str) -> std::result::Result<(), CoreError> {
        if key.is_empty() || key.len() > MAX_LENGTH {
            return Err(CoreError::InvalidShortKey(format!(
                "length must be between 1 and {}, got {}",
                MAX_LENGTH,
                key.len()
            )));
        }

        if !key.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CoreError::InvalidShortKey(format!(
                "must contain only alphanumeric characters: '{}'",
                key
            )));
        }

        Ok(())
    }
}

impl Display for ShortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ShortKeyBase58> for ShortKey {
    fn from(val: ShortKeyBase58) -> Self {
        // Base58 output is alphanumeric by construction.
        Self(val.as_str().to_owned())
    }
}
