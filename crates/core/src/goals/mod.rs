//! Savings-goal progress and timelines.

pub mod tracker;
pub mod types;


pub use tracker::GoalTracker;
pub use types::{GoalPriority, GoalProgress, GoalStatus, SavingsGoal};
