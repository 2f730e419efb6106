//! Health scoring over category budgets.

use finboard_shared::AnalyticsConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::budget::{BudgetCategory, ProgressCalculator};

/// Qualitative health band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthLevel {
    /// Average spend at or below the excellent breakpoint.
    Excellent,
    /// Average spend at or below the good breakpoint.
    Good,
    /// Average spend above the good breakpoint.
    Attention,
    /// No categories to score.
    Unknown,
}

/// Health score result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthScore {
    /// Health band.
    pub level: HealthLevel,
    /// Mean of the per-category spend percentages, rounded to 2 dp.
    pub average_percent: Decimal,
}

/// Maps the mean category spend percentage to a health band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthScorer {
    excellent_max: Decimal,
    good_max: Decimal,
}

impl Default for HealthScorer {
    fn default() -> Self {
        Self::from_config(&AnalyticsConfig::default())
    }
}

impl HealthScorer {
    /// Creates a scorer with explicit breakpoints.
    #[must_use]
    pub const fn new(excellent_max: Decimal, good_max: Decimal) -> Self {
        Self {
            excellent_max,
            good_max,
        }
    }

    /// Creates a scorer from analytics configuration.
    #[must_use]
    pub const fn from_config(config: &AnalyticsConfig) -> Self {
        Self::new(config.excellent_max, config.good_max)
    }

    /// Scores a set of budgets.
    ///
    /// Classification uses the unrounded average. An empty slice scores
    /// `Unknown` with a zero average.
    #[must_use]
    pub fn score(&self, budgets: &[BudgetCategory]) -> HealthScore {
        if budgets.is_empty() {
            debug!("no budgets to score, health is unknown");
            return HealthScore {
                level: HealthLevel::Unknown,
                average_percent: Decimal::ZERO,
            };
        }

        let total = budgets
            .iter()
            .map(|b| ProgressCalculator::percentage(b.spent, b.allocated))
            .fold(Decimal::ZERO, Decimal::saturating_add);
        // Dividing by a count of at least one cannot overflow.
        let average = total / Decimal::from(budgets.len());

        HealthScore {
            level: self.level(average),
            average_percent: average.round_dp(2),
        }
    }

    /// Maps an average spend percentage to a level.
    #[must_use]
    pub fn level(&self, average: Decimal) -> HealthLevel {
        if average <= self.excellent_max {
            HealthLevel::Excellent
        } else if average <= self.good_max {
            HealthLevel::Good
        } else {
            HealthLevel::Attention
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finboard_shared::types::BudgetCategoryId;
    use rstest::rstest;
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
    fn test_empty_is_unknown() {
        let score = HealthScorer::default().score(&[]);
        assert_eq!(score.level, HealthLevel::Unknown);
        assert_eq!(score.average_percent, Decimal::ZERO);
    }

    #[test]
    fn test_average_of_50_100_100_is_good() {
        let budgets = vec![
            budget(dec!(100), dec!(50)),
            budget(dec!(200), dec!(200)),
            budget(dec!(40), dec!(40)),
        ];

        let score = HealthScorer::default().score(&budgets);

        assert_eq!(score.level, HealthLevel::Good);
        assert_eq!(score.average_percent, dec!(83.33));
    }

    #[test]
    fn test_zero_allocation_counts_as_zero_percent() {
        let budgets = vec![budget(dec!(0), dec!(500)), budget(dec!(100), dec!(100))];

        let score = HealthScorer::default().score(&budgets);

        assert_eq!(score.average_percent, dec!(50));
        assert_eq!(score.level, HealthLevel::Excellent);
    }

    #[test]
    fn test_extreme_spending_scores_attention() {
        let budgets = vec![budget(dec!(1), Decimal::MAX), budget(dec!(1), Decimal::MAX)];

        let score = HealthScorer::default().score(&budgets);

        assert_eq!(score.level, HealthLevel::Attention);
        assert_eq!(score.average_percent, Decimal::MAX / dec!(2));
    }

    #[rstest]
    #[case(dec!(0), HealthLevel::Excellent)]
    #[case(dec!(70), HealthLevel::Excellent)]
    #[case(dec!(70.01), HealthLevel::Good)]
    #[case(dec!(85), HealthLevel::Good)]
    #[case(dec!(85.01), HealthLevel::Attention)]
    #[case(dec!(140), HealthLevel::Attention)]
    fn test_level_breakpoints(#[case] average: Decimal, #[case] expected: HealthLevel) {
        assert_eq!(HealthScorer::default().level(average), expected);
    }

    #[test]
    fn test_custom_breakpoints() {
        let scorer = HealthScorer::new(dec!(50), dec!(60));
        assert_eq!(scorer.level(dec!(55)), HealthLevel::Good);
        assert_eq!(scorer.level(dec!(61)), HealthLevel::Attention);
    }
}
