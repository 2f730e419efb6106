//! Category budgets: totals, spend progress, and banding.

pub mod aggregate;
pub mod progress;
pub mod types;


pub use aggregate::BudgetAggregator;
pub use progress::ProgressCalculator;
pub use types::{AggregateSummary, BudgetCategory, BudgetTotals, CategoryProgress, ProgressBand};
