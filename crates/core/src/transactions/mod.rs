//! Recent activity and cash flow over dashboard transactions.

pub mod activity;
pub mod types;

pub use activity::TransactionActivity;
pub use types::{CashFlow, Transaction, TransactionStatus, TransactionType};
