//! URL shortener service implementation.
//!
//! This crate provides the [`Shortener`] trait, the key [`generator`]
//! and the [`ShortenerService`] that ties a generator to a repository.
//! Core types are re-exported from `keyhole_core`.

pub mod error;
pub mod generator;
pub mod service;
pub mod shortener;

pub use error::ShortenerError;
pub use generator::Generator;
pub use service::ShortenerService;
pub use shortener::Shortener;
