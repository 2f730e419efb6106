//! Budget totals.

use rust_decimal::Decimal;

use super::progress::ProgressCalculator;
use super::types::{AggregateSummary, BudgetCategory, BudgetTotals};

/// Sums allocation and spending across category budgets.
pub struct BudgetAggregator;

impl BudgetAggregator {
    /// Sums `allocated` and `spent` over all categories.
    ///
    /// An empty slice yields zero totals. Sums saturate at the `Decimal`
    /// bounds instead of overflowing.
    #[must_use]
    pub fn aggregate(budgets: &[BudgetCategory]) -> BudgetTotals {
        let total_budget = budgets
            .iter()
            .fold(Decimal::ZERO, |acc, b| acc.saturating_add(b.allocated));
        let total_spent = budgets
            .iter()
            .fold(Decimal::ZERO, |acc, b| acc.saturating_add(b.spent));

        BudgetTotals {
            total_budget,
            total_spent,
        }
    }

    /// Totals plus remaining amount, overall percentage, and band.
    #[must_use]
    pub fn summarize(
        budgets: &[BudgetCategory],
        calculator: &ProgressCalculator,
    ) -> AggregateSummary {
        let totals = Self::aggregate(budgets);
        let progress_percent =
            ProgressCalculator::percentage(totals.total_spent, totals.total_budget);

        AggregateSummary {
            total_budget: totals.total_budget,
            total_spent: totals.total_spent,
            remaining: totals.total_budget.saturating_sub(totals.total_spent),
            progress_percent: progress_percent.round_dp(2),
            band: calculator.band(progress_percent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::types::ProgressBand;
    use finboard_shared::types::BudgetCategoryId;
    use rust_decimal_macros::dec;

    fn budget(allocated: Decimal, spent: Decimal) -> BudgetCategory {
        BudgetCategory {
            id: BudgetCategoryId::new(),
            category: "Test".to_string(),
            allocated,
            spent,
            icon: String::new(),
            color: String::new(),
        }
    }

    #[test]
    fn test_aggregate_empty() {
        assert_eq!(BudgetAggregator::aggregate(&[]), BudgetTotals::default());
    }

    #[test]
    fn test_aggregate_sums_both_columns() {
        let budgets = vec![
            budget(dec!(500), dec!(320.50)),
            budget(dec!(200), dec!(250)),
            budget(dec!(100), dec!(0)),
        ];

        let totals = BudgetAggregator::aggregate(&budgets);

        assert_eq!(totals.total_budget, dec!(800));
        assert_eq!(totals.total_spent, dec!(570.50));
    }

    #[test]
    fn test_summarize() {
        let budgets = vec![budget(dec!(600), dec!(300)), budget(dec!(400), dec!(550))];

        let summary = BudgetAggregator::summarize(&budgets, &ProgressCalculator::default());

        assert_eq!(summary.total_budget, dec!(1000));
        assert_eq!(summary.total_spent, dec!(850));
        assert_eq!(summary.remaining, dec!(150));
        assert_eq!(summary.progress_percent, dec!(85));
        assert_eq!(summary.band, ProgressBand::Warning);
    }

    #[test]
    fn test_summarize_empty_is_zero_and_normal() {
        let summary = BudgetAggregator::summarize(&[], &ProgressCalculator::default());

        assert_eq!(summary.remaining, Decimal::ZERO);
        assert_eq!(summary.progress_percent, Decimal::ZERO);
        assert_eq!(summary.band, ProgressBand::Normal);
    }

    #[test]
    fn test_aggregate_saturates_huge_totals() {
        let budgets = vec![
            budget(Decimal::MAX, Decimal::MAX),
            budget(Decimal::MAX, dec!(1)),
        ];

        let totals = BudgetAggregator::aggregate(&budgets);

        assert_eq!(totals.total_budget, Decimal::MAX);
        assert_eq!(totals.total_spent, Decimal::MAX);
    }

    #[test]
    fn test_summarize_extreme_ratio_is_critical() {
        let budgets = vec![budget(dec!(0.000001), dec!(1000000000000000000000000))];

        let summary = BudgetAggregator::summarize(&budgets, &ProgressCalculator::default());

        assert_eq!(summary.progress_percent, Decimal::MAX);
        assert_eq!(summary.band, ProgressBand::Critical);
    }

    #[test]
    fn test_summarize_total_overrun() {
        let budgets = vec![budget(dec!(100), dec!(130))];

        let summary = BudgetAggregator::summarize(&budgets, &ProgressCalculator::default());

        assert_eq!(summary.remaining, dec!(-30));
        assert_eq!(summary.band, ProgressBand::Critical);
    }
}
