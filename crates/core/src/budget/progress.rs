//! Spend percentages and threshold banding.

use finboard_shared::AnalyticsConfig;
use rust_decimal::Decimal;
use tracing::debug;

use super::types::{BudgetCategory, CategoryProgress, ProgressBand};

/// Computes spend percentages and classifies them into bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressCalculator {
    warning_threshold: Decimal,
    critical_threshold: Decimal,
}

impl Default for ProgressCalculator {
    fn default() -> Self {
        Self::from_config(&AnalyticsConfig::default())
    }
}

impl ProgressCalculator {
    /// Creates a calculator with explicit band thresholds.
    #[must_use]
    pub const fn new(warning_threshold: Decimal, critical_threshold: Decimal) -> Self {
        Self {
            warning_threshold,
            critical_threshold,
        }
    }

    /// Creates a calculator from analytics configuration.
    #[must_use]
    pub const fn from_config(config: &AnalyticsConfig) -> Self {
        Self::new(config.warning_threshold, config.critical_threshold)
    }

    /// Spend percentage: `spent / allocated * 100`.
    ///
    /// Returns zero when `allocated` is not positive. Not clamped, so an
    /// overrun reads above 100. A ratio too large for `Decimal` saturates
    /// to `Decimal::MAX` (or `Decimal::MIN` for negative spending).
    #[must_use]
    pub fn percentage(spent: Decimal, allocated: Decimal) -> Decimal {
        if allocated <= Decimal::ZERO {
            debug!(%allocated, "non-positive allocation, progress is zero");
            return Decimal::ZERO;
        }
        spent
            .checked_div(allocated)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or_else(|| {
                debug!(%spent, %allocated, "spend percentage overflowed, saturating");
                if spent.is_sign_negative() {
                    Decimal::MIN
                } else {
                    Decimal::MAX
                }
            })
    }

    /// Classifies a percentage into a band.
    #[must_use]
    pub fn band(&self, percentage: Decimal) -> ProgressBand {
        if percentage >= self.critical_threshold {
            ProgressBand::Critical
        } else if percentage >= self.warning_threshold {
            ProgressBand::Warning
        } else {
            ProgressBand::Normal
        }
    }

    /// Progress view of a single category.
    #[must_use]
    pub fn category_progress(&self, budget: &BudgetCategory) -> CategoryProgress {
        let percent = Self::percentage(budget.spent, budget.allocated);

        CategoryProgress {
            id: budget.id,
            category: budget.category.clone(),
            allocated: budget.allocated,
            spent: budget.spent,
            remaining: budget.remaining(),
            percent: percent.round_dp(2),
            band: self.band(percent),
        }
    }
}
