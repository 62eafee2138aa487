//! Core types and traits for the Keyhole URL shortener.
//!
//! This crate provides the shared vocabulary used by the storage
//! backends and the shortener service: the validated [`ShortKey`]
//! type, the [`UrlRecord`] data model, and the repository traits.

pub mod base58;
pub mod error;
pub mod repository;
pub mod shortkey;

pub use error::{CoreError, StorageError};
pub use repository::{InsertOutcome, ReadRepository, Repository, UrlRecord};
pub use shortkey::ShortKey;
