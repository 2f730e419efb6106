//! Ranking error types.

use thiserror::Error;

/// Ranking-related errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankingError {
    /// Sort key is not one of `category`, `spent`, `remaining`, `progress`.
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),
}
