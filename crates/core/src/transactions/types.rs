//! Transaction data types.

use chrono::{DateTime, Utc};
use finboard_shared::types::TransactionId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transaction direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money out.
    Debit,
    /// Money in.
    Credit,
}

/// Transaction settlement status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Settled.
    #[default]
    Completed,
    /// Not yet settled.
    Pending,
    /// Rejected or reversed.
    Failed,
}

/// A transaction shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Debit or credit.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Category name.
    #[serde(default)]
    pub category: String,
    /// Unsigned amount; the sign comes from `kind`.
    #[serde(default)]
    pub amount: Decimal,
    /// When the transaction happened.
    pub timestamp: DateTime<Utc>,
    /// Settlement status.
    #[serde(default)]
    pub status: TransactionStatus,
}

impl Transaction {
    /// Amount with debits negative and credits positive.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionType::Debit => -self.amount.abs(),
            TransactionType::Credit => self.amount.abs(),
        }
    }
}

/// Income and expenses over completed transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Sum of completed credits.
    pub income: Decimal,
    /// Sum of completed debits, as a positive amount.
    pub expenses: Decimal,
    /// `income - expenses`.
    pub net: Decimal,
}
