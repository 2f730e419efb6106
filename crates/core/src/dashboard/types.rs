//! Dashboard view-model types.

use chrono::{DateTime, NaiveDate, Utc};
use finboard_shared::types::{
    BudgetCategoryId, Currency, Locale, SavingsGoalId, TransactionId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::ProgressBand;
use crate::goals::{GoalPriority, GoalStatus};
use crate::health::HealthScore;
use crate::transactions::{TransactionStatus, TransactionType};
use crate::trend::TrendRecord;

/// Amount paired with its display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyView {
    /// Raw amount.
    pub amount: Decimal,
    /// Locale-formatted amount.
    pub formatted: String,
}

/// Budget totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryView {
    /// Total allocated.
    pub total_budget: MoneyView,
    /// Total spent.
    pub total_spent: MoneyView,
    /// Total remaining.
    pub remaining: MoneyView,
    /// Overall spend percentage.
    pub progress_percent: Decimal,
    /// Overall spend band.
    pub band: ProgressBand,
}

/// One category row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryView {
    /// Category budget ID.
    pub id: BudgetCategoryId,
    /// Category name.
    pub category: String,
    /// Icon reference.
    pub icon: String,
    /// Display color.
    pub color: String,
    /// Allocated amount.
    pub allocated: MoneyView,
    /// Spent amount.
    pub spent: MoneyView,
    /// Remaining amount.
    pub remaining: MoneyView,
    /// Spend percentage.
    pub percent: Decimal,
    /// Spend band.
    pub band: ProgressBand,
}

/// One savings goal card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalView {
    /// Goal ID.
    pub id: SavingsGoalId,
    /// Goal title.
    pub title: String,
    /// Goal priority.
    pub priority: GoalPriority,
    /// Target amount.
    pub target: MoneyView,
    /// Amount saved.
    pub current: MoneyView,
    /// Amount still to save.
    pub remaining: MoneyView,
    /// Progress percentage.
    pub percent: Decimal,
    /// Deadline.
    pub deadline: NaiveDate,
    /// Days until the deadline.
    pub days_remaining: i64,
    /// Goal status.
    pub status: GoalStatus,
    /// Monthly saving needed, if the goal is still open.
    pub monthly_contribution: Option<MoneyView>,
}

/// One recent-activity row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionView {
    /// Transaction ID.
    pub id: TransactionId,
    /// Debit or credit.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Description.
    pub description: String,
    /// Category name.
    pub category: String,
    /// Signed amount (debits negative).
    pub amount: MoneyView,
    /// Timestamp.
    pub timestamp: DateTime<Utc>,
    /// Settlement status.
    pub status: TransactionStatus,
}

/// Cash flow totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowView {
    /// Completed income.
    pub income: MoneyView,
    /// Completed expenses.
    pub expenses: MoneyView,
    /// Income minus expenses.
    pub net: MoneyView,
}

/// Everything the dashboard page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardView {
    /// Reference time used for deadline arithmetic.
    pub generated_at: DateTime<Utc>,
    /// Locale used for formatting.
    pub locale: Locale,
    /// Currency used for formatting.
    pub currency: Currency,
    /// Budget totals.
    pub summary: SummaryView,
    /// Category rows in the requested order.
    pub categories: Vec<CategoryView>,
    /// Health score.
    pub health: HealthScore,
    /// Highest-spending categories.
    pub top_spending: Vec<CategoryView>,
    /// Savings goals.
    pub goals: Vec<GoalView>,
    /// Most recent transactions.
    pub recent_transactions: Vec<TransactionView>,
    /// Cash flow over completed transactions.
    pub cash_flow: CashFlowView,
    /// Monthly trend, when the historical source provides one.
    pub trend: Option<TrendRecord>,
}
