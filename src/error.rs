//! Error types for the crate.
//!
//! Lookups of missing keys are not errors; they return `None`. Failing to
//! allocate a new node or entry is not surfaced either; the structure is
//! left as it was. What remains is misconfiguration at construction time.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building a structure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A hash table needs at least one bucket.
    #[error("hash table capacity must be at least 1")]
    ZeroCapacity,
}
