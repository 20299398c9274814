//! Expense error types.

use rust_decimal::Decimal;
use spendlens_shared::{AppError, types::ExpenseId};
use thiserror::Error;

/// Expense-related errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpenseError {
    /// Description is empty or whitespace.
    #[error("Description cannot be empty")]
    EmptyDescription,

    /// Category is empty or whitespace.
    #[error("Category cannot be empty")]
    EmptyCategory,

    /// Amount is zero or negative.
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// Amount exceeds the per-expense ceiling.
    #[error("Amount {0} exceeds the maximum of {max}", max = super::validation::MAX_EXPENSE_AMOUNT)]
    AmountTooLarge(Decimal),

    /// Amount text could not be parsed.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Expense not found.
    #[error("Expense not found: {0}")]
    NotFound(ExpenseId),
}

impl From<ExpenseError> for AppError {
    fn from(err: ExpenseError) -> Self {
        match err {
            ExpenseError::NotFound(_) => Self::NotFound(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}
