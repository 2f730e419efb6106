//! Sorting and top-N selection over category budgets.
//!
//! Every ordering here is stable: categories that compare equal keep their
//! input order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::error::RankingError;
use crate::budget::{BudgetCategory, ProgressCalculator};

/// Sort order for a budget list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Category name, alphabetical, case- and accent-insensitive.
    #[default]
    Category,
    /// Amount spent, highest first.
    Spent,
    /// Remaining amount, highest first; overruns sort last.
    Remaining,
    /// Spend percentage, highest first.
    Progress,
}

impl std::str::FromStr for SortKey {
    type Err = RankingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "category" => Ok(Self::Category),
            "spent" => Ok(Self::Spent),
            "remaining" => Ok(Self::Remaining),
            "progress" => Ok(Self::Progress),
            _ => Err(RankingError::UnknownSortKey(s.to_string())),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Category => "category",
            Self::Spent => "spent",
            Self::Remaining => "remaining",
            Self::Progress => "progress",
        };
        f.write_str(name)
    }
}

/// Ranks category budgets.
pub struct RankingEngine;

impl RankingEngine {
    /// The `n` categories with the highest spending.
    ///
    /// Ties keep input order.
    #[must_use]
    pub fn top_spending(budgets: &[BudgetCategory], n: usize) -> Vec<&BudgetCategory> {
        let mut ranked = Self::sort_budgets(budgets, SortKey::Spent);
        ranked.truncate(n);
        ranked
    }

    /// Returns the budgets ordered by `key`.
    #[must_use]
    pub fn sort_budgets(budgets: &[BudgetCategory], key: SortKey) -> Vec<&BudgetCategory> {
        let mut sorted: Vec<&BudgetCategory> = budgets.iter().collect();

        match key {
            SortKey::Category => sorted.sort_by_cached_key(|b| collation_key(&b.category)),
            SortKey::Spent => sorted.sort_by(|a, b| descending(&a.spent, &b.spent)),
            SortKey::Remaining => {
                sorted.sort_by(|a, b| descending(&a.remaining(), &b.remaining()));
            }
            SortKey::Progress => sorted.sort_by_cached_key(|b| {
                std::cmp::Reverse(ProgressCalculator::percentage(b.spent, b.allocated))
            }),
        }

        sorted
    }
}

fn descending<T: Ord>(a: &T, b: &T) -> Ordering {
    b.cmp(a)
}

/// Case- and accent-folded key for alphabetical ordering.
fn collation_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for ch in name.trim().chars().flat_map(char::to_lowercase) {
        match ch {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => key.push('a'),
            'æ' => key.push_str("ae"),
            'ç' => key.push('c'),
            'è' | 'é' | 'ê' | 'ë' => key.push('e'),
            'ì' | 'í' | 'î' | 'ï' => key.push('i'),
            'ñ' => key.push('n'),
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => key.push('o'),
            'œ' => key.push_str("oe"),
            'ß' => key.push_str("ss"),
            'ù' | 'ú' | 'û' | 'ü' => key.push('u'),
            'ý' | 'ÿ' => key.push('y'),
            other => key.push(other),
        }
    }
    key
}
