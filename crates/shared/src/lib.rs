//! Shared types, errors, and configuration for Finboard.
//!
//! This crate provides common types used across all other crates:
//! - Currency and locale display types
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AnalyticsConfig, AppConfig, DisplayConfig};
pub use error::{AppError, AppResult};
