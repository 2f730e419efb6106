//! Currency formatting for the presentation boundary.

pub mod format;

pub use format::{CurrencyFormatter, format};
