//! Goal progress, remaining amount, and deadline arithmetic.
//!
//! Deadlines are calendar dates and are read as 00:00 UTC on that day.

use chrono::{DateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use tracing::debug;

use super::types::{GoalProgress, GoalStatus, SavingsGoal};

const MILLIS_PER_DAY: i64 = 86_400_000;
const DAYS_PER_MONTH: i64 = 30;

/// Computes savings-goal metrics.
pub struct GoalTracker;

impl GoalTracker {
    /// Progress percentage, clamped to `[0, 100]`.
    ///
    /// A non-positive target yields zero. A ratio too large for `Decimal`
    /// clamps like any other out-of-range value.
    #[must_use]
    pub fn progress(goal: &SavingsGoal) -> Decimal {
        if goal.target <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        goal.current
            .checked_div(goal.target)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or_else(|| {
                debug!(goal = %goal.id, "goal progress overflowed, clamping");
                if goal.current.is_sign_negative() {
                    Decimal::ZERO
                } else {
                    Decimal::ONE_HUNDRED
                }
            })
            .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
    }

    /// Amount still to save: `max(target - current, 0)`.
    #[must_use]
    pub fn remaining(goal: &SavingsGoal) -> Decimal {
        goal.target.saturating_sub(goal.current).max(Decimal::ZERO)
    }

    /// Days until the deadline, rounded up.
    ///
    /// Zero means due today, negative means overdue.
    #[must_use]
    pub fn days_remaining(goal: &SavingsGoal, now: DateTime<Utc>) -> i64 {
        let deadline = goal.deadline.and_time(NaiveTime::MIN).and_utc();
        let millis = (deadline - now).num_milliseconds();
        let days = millis / MILLIS_PER_DAY;
        // Truncation already rounds negatives up.
        if millis % MILLIS_PER_DAY > 0 {
            days + 1
        } else {
            days
        }
    }

    /// Goal status at `now`. A reached target wins over the deadline.
    #[must_use]
    pub fn status(goal: &SavingsGoal, now: DateTime<Utc>) -> GoalStatus {
        if goal.target > Decimal::ZERO && goal.current >= goal.target {
            return GoalStatus::Completed;
        }
        match Self::days_remaining(goal, now) {
            d if d < 0 => GoalStatus::Overdue,
            0 => GoalStatus::DueToday,
            _ => GoalStatus::InProgress,
        }
    }

    /// Monthly saving needed to reach the target by the deadline.
    ///
    /// Months are 30-day blocks rounded up, at least one. `None` once the
    /// goal is completed or overdue.
    #[must_use]
    pub fn monthly_contribution(goal: &SavingsGoal, now: DateTime<Utc>) -> Option<Decimal> {
        match Self::status(goal, now) {
            GoalStatus::Completed | GoalStatus::Overdue => None,
            GoalStatus::DueToday | GoalStatus::InProgress => {
                let days = Self::days_remaining(goal, now);
                let months = ((days + DAYS_PER_MONTH - 1) / DAYS_PER_MONTH).max(1);
                Some((Self::remaining(goal) / Decimal::from(months)).round_dp(2))
            }
        }
    }

    /// Full progress view of one goal.
    #[must_use]
    pub fn track(goal: &SavingsGoal, now: DateTime<Utc>) -> GoalProgress {
        GoalProgress {
            id: goal.id,
            title: goal.title.clone(),
            target: goal.target,
            current: goal.current,
            remaining: Self::remaining(goal),
            percent: Self::progress(goal).round_dp(2),
            deadline: goal.deadline,
            days_remaining: Self::days_remaining(goal, now),
            status: Self::status(goal, now),
            priority: goal.priority,
            monthly_contribution: Self::monthly_contribution(goal, now),
        }
    }

    /// Progress of every goal, highest priority first, then nearest deadline.
    #[must_use]
    pub fn summarize(goals: &[SavingsGoal], now: DateTime<Utc>) -> Vec<GoalProgress> {
        let mut tracked: Vec<GoalProgress> = goals.iter().map(|g| Self::track(g, now)).collect();
        tracked.sort_by(|a, b| {
            a.priority
                .cmp(&b.priority)
                .then_with(|| a.deadline.cmp(&b.deadline))
        });
        tracked
    }
}
