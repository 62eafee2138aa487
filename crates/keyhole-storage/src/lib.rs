//! Repository implementations for the Keyhole URL shortener.

pub mod memory;

pub use memory::InMemoryRepository;
