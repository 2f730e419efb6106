//! Budget rankings and sort orders.

pub mod engine;
pub mod error;


pub use engine::{RankingEngine, SortKey};
pub use error::RankingError;
