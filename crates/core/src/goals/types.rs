//! Savings goal data types.

use chrono::NaiveDate;
use finboard_shared::types::SavingsGoalId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Goal priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalPriority {
    /// Highest priority.
    High,
    /// Medium priority.
    Medium,
    /// Lowest priority.
    Low,
}

/// A savings goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoal {
    /// Goal ID.
    pub id: SavingsGoalId,
    /// Goal title.
    pub title: String,
    /// Amount to reach.
    #[serde(default)]
    pub target: Decimal,
    /// Amount saved so far.
    #[serde(default)]
    pub current: Decimal,
    /// Date the goal should be reached.
    pub deadline: NaiveDate,
    /// Goal priority.
    pub priority: GoalPriority,
}

/// Where a goal stands relative to its target and deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Current amount has reached the target.
    Completed,
    /// Deadline has passed without reaching the target.
    Overdue,
    /// Deadline is today.
    DueToday,
    /// Deadline is in the future.
    InProgress,
}

/// Computed progress of one goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Goal ID.
    pub id: SavingsGoalId,
    /// Goal title.
    pub title: String,
    /// Amount to reach.
    pub target: Decimal,
    /// Amount saved so far.
    pub current: Decimal,
    /// Amount still to save, never negative.
    pub remaining: Decimal,
    /// Progress percentage in `[0, 100]`, rounded to 2 dp.
    pub percent: Decimal,
    /// Goal deadline.
    pub deadline: NaiveDate,
    /// Whole days until the deadline; negative when overdue.
    pub days_remaining: i64,
    /// Goal status.
    pub status: GoalStatus,
    /// Goal priority.
    pub priority: GoalPriority,
    /// Monthly saving needed to meet the deadline, if still reachable.
    pub monthly_contribution: Option<Decimal>,
}
