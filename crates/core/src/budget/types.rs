//! Budget data types.

use finboard_shared::types::BudgetCategoryId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A category budget for the current period.
///
/// `spent` may exceed `allocated`; an overrun is a valid state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetCategory {
    /// Category budget ID.
    pub id: BudgetCategoryId,
    /// Category name.
    pub category: String,
    /// Budgeted ceiling.
    #[serde(default)]
    pub allocated: Decimal,
    /// Amount spent so far.
    #[serde(default)]
    pub spent: Decimal,
    /// Icon reference for the presentation layer.
    #[serde(default)]
    pub icon: String,
    /// Display color for the presentation layer.
    #[serde(default)]
    pub color: String,
}

impl BudgetCategory {
    /// Remaining budget (`allocated - spent`); negative on overrun.
    ///
    /// Saturates at the `Decimal` bounds.
    #[must_use]
    pub fn remaining(&self) -> Decimal {
        self.allocated.saturating_sub(self.spent)
    }

    /// Returns true if spending exceeds the allocation.
    #[must_use]
    pub fn is_overrun(&self) -> bool {
        self.spent > self.allocated
    }
}

/// Summed allocation and spending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetTotals {
    /// Total allocated across categories.
    pub total_budget: Decimal,
    /// Total spent across categories.
    pub total_spent: Decimal,
}

/// Aggregate view over all categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateSummary {
    /// Total allocated across categories.
    pub total_budget: Decimal,
    /// Total spent across categories.
    pub total_spent: Decimal,
    /// `total_budget - total_spent`.
    pub remaining: Decimal,
    /// Overall spend percentage.
    pub progress_percent: Decimal,
    /// Band of the overall spend percentage.
    pub band: ProgressBand,
}

/// Spend band derived from a progress percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressBand {
    /// Below the warning threshold.
    Normal,
    /// At or above the warning threshold, below critical.
    Warning,
    /// At or above the critical threshold.
    Critical,
}

/// Progress of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryProgress {
    /// Category budget ID.
    pub id: BudgetCategoryId,
    /// Category name.
    pub category: String,
    /// Budgeted ceiling.
    pub allocated: Decimal,
    /// Amount spent.
    pub spent: Decimal,
    /// `allocated - spent`.
    pub remaining: Decimal,
    /// Spend percentage, rounded to 2 dp.
    pub percent: Decimal,
    /// Spend band.
    pub band: ProgressBand,
}
