pub mod content;

use keyhole_core::ShortKey;

pub use content::ContentHashGenerator;

/// Trait for deriving short key candidates from an input URL.
///
/// Implementations are pure derivations that don't interact with
/// storage: the same `(url, attempt)` pair must always produce the
/// same output. `attempt` selects a probe position — the service walks
/// attempts `0, 1, 2, ...` when a derived key is already taken by a
/// different URL, and determinism across attempts is what makes a
/// re-submitted URL land on the key it was originally assigned.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShortKey>;

    /// Derives the `attempt`-th candidate key for `url`.
    fn derive(&self, url: &str, attempt: u32) -> Self::Output;
}
