//! Data sources feeding the dashboard.

use serde::{Deserialize, Serialize};

use super::error::DashboardError;
use crate::budget::BudgetCategory;
use crate::goals::SavingsGoal;
use crate::transactions::Transaction;
use crate::trend::{TrendRecord, TrendSource};

/// Supplies the records a dashboard is computed from.
///
/// Each call hands out an owned copy, so one computation never observes
/// another's changes.
pub trait DashboardDataSource: TrendSource {
    /// Category budgets for the current period.
    fn budgets(&self) -> Vec<BudgetCategory>;
    /// Savings goals.
    fn goals(&self) -> Vec<SavingsGoal>;
    /// Recent transactions.
    fn transactions(&self) -> Vec<Transaction>;
}

/// An in-memory set of dashboard records.
///
/// Missing collections deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Category budgets.
    #[serde(default)]
    pub budgets: Vec<BudgetCategory>,
    /// Savings goals.
    #[serde(default)]
    pub goals: Vec<SavingsGoal>,
    /// Transactions.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    /// Monthly trend from the historical source, if any.
    #[serde(default)]
    pub trend: Option<TrendRecord>,
}

impl Snapshot {
    /// Parses a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, DashboardError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl TrendSource for Snapshot {
    fn monthly_trend(&self) -> Option<TrendRecord> {
        self.trend.clone()
    }
}

impl DashboardDataSource for Snapshot {
    fn budgets(&self) -> Vec<BudgetCategory> {
        self.budgets.clone()
    }

    fn goals(&self) -> Vec<SavingsGoal> {
        self.goals.clone()
    }

    fn transactions(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }
}
