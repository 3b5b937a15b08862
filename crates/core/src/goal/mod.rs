//! Savings goals, contributions, and need calculation.

pub mod error;
pub mod need;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::GoalError;
pub use need::GoalNeed;
pub use service::GoalService;
pub use types::{Contribution, Goal, GoalStatus};
