//! Dashboard view-model assembly.
//!
//! This module composes the analytics components over a snapshot taken
//! from an injected data source:
//! - Budget summary and per-category progress
//! - Health score and top spenders
//! - Savings goals, recent activity, and cash flow
//! - Externally supplied monthly trend

pub mod error;
pub mod service;
pub mod source;
pub mod types;

pub use error::DashboardError;
pub use service::DashboardService;
pub use source::{DashboardDataSource, Snapshot};
pub use types::*;
