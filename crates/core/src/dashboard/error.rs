//! Dashboard error types.

use thiserror::Error;

/// Errors raised while reading dashboard input.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Snapshot JSON could not be parsed.
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(#[from] serde_json::Error),
}
