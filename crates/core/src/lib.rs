//! Dashboard analytics for Finboard.
//!
//! This crate contains pure transforms with ZERO I/O. Callers hand in a
//! snapshot of budgets, goals, and transactions and get view-models back.
//!
//! # Modules
//!
//! - `currency` - Locale-aware money formatting
//! - `budget` - Totals, spend progress, and banding
//! - `health` - Qualitative health score
//! - `ranking` - Sort orders and top spenders
//! - `goals` - Savings-goal progress and deadlines
//! - `transactions` - Recent activity and cash flow
//! - `trend` - Externally supplied monthly trend
//! - `dashboard` - View-model assembly over an injected data source

pub mod budget;
pub mod currency;
pub mod dashboard;
pub mod goals;
pub mod health;
pub mod ranking;
pub mod transactions;
pub mod trend;
