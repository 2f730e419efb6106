//! Period-over-period trend contract.
//!
//! Trend figures come from an external historical source. Nothing in this
//! crate computes them; absent data yields `None`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of change versus the comparison period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Spending went up.
    Up,
    /// Spending went down.
    Down,
}

/// Pre-computed trend supplied by a historical data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendRecord {
    /// Direction of change.
    pub direction: TrendDirection,
    /// Magnitude of change, in percent.
    pub percent: Decimal,
    /// Human label for the comparison period (e.g. "vs last month").
    pub comparison_label: String,
}

impl TrendRecord {
    /// Percent with the direction applied as a sign.
    #[must_use]
    pub fn signed_percent(&self) -> Decimal {
        match self.direction {
            TrendDirection::Up => self.percent.abs(),
            TrendDirection::Down => -self.percent.abs(),
        }
    }
}

/// A source of pre-computed trend records.
pub trait TrendSource {
    /// Month-over-month trend, if the source has one.
    fn monthly_trend(&self) -> Option<TrendRecord>;
}

/// Reads trends from a `TrendSource`.
pub struct TrendEstimator;

impl TrendEstimator {
    /// Current monthly trend, passed through from `source`.
    #[must_use]
    pub fn monthly<S: TrendSource + ?Sized>(source: &S) -> Option<TrendRecord> {
        source.monthly_trend()
    }
}
