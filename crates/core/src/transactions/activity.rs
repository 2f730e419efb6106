//! Recent-activity selection and cash-flow totals.

use rust_decimal::Decimal;

use super::types::{CashFlow, Transaction, TransactionStatus, TransactionType};

/// Derives activity views from a transaction list.
pub struct TransactionActivity;

impl TransactionActivity {
    /// The `limit` most recent transactions, newest first.
    ///
    /// Equal timestamps keep input order.
    #[must_use]
    pub fn recent(transactions: &[Transaction], limit: usize) -> Vec<&Transaction> {
        let mut sorted: Vec<&Transaction> = transactions.iter().collect();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        sorted.truncate(limit);
        sorted
    }

    /// Income, expenses, and net over completed transactions only.
    ///
    /// Totals saturate at the `Decimal` bounds.
    #[must_use]
    pub fn cash_flow(transactions: &[Transaction]) -> CashFlow {
        let (income, expenses) = transactions
            .iter()
            .filter(|t| t.status == TransactionStatus::Completed)
            .fold((Decimal::ZERO, Decimal::ZERO), |(income, expenses), t| {
                match t.kind {
                    TransactionType::Credit => (income.saturating_add(t.amount.abs()), expenses),
                    TransactionType::Debit => (income, expenses.saturating_add(t.amount.abs())),
                }
            });

        CashFlow {
            income,
            expenses,
            net: income.saturating_sub(expenses),
        }
    }
}
