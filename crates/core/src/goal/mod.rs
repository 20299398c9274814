//! Monthly spending goal and progress against it.

pub mod error;
pub mod progress;

pub use error::GoalError;
pub use progress::{GoalProgress, GoalStatus, MonthlyGoal};
