//! Qualitative financial health derived from average spend.

pub mod scorer;

pub use scorer::{HealthLevel, HealthScore, HealthScorer};
