//! Common types used across the application.

pub mod currency;
pub mod id;
pub mod locale;

pub use currency::Currency;
pub use id::*;
pub use locale::{Locale, SymbolPlacement};
