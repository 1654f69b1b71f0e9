//! Errors returned by tree queries.

use thiserror::Error;

/// Result type for tree queries that can fail.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors that can occur when querying a [`Tree`](crate::Tree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The tree holds no keys, so it has no minimum or maximum.
    #[error("tree is empty")]
    EmptyTree,
}
