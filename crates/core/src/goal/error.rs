//! Goal error types.

use rust_decimal::Decimal;
use spendlens_shared::AppError;
use thiserror::Error;

/// Goal-related errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GoalError {
    /// Target must be strictly positive.
    #[error("Monthly goal must be positive, got {0}")]
    NonPositiveTarget(Decimal),
}

impl From<GoalError> for AppError {
    fn from(err: GoalError) -> Self {
        Self::Validation(err.to_string())
    }
}
