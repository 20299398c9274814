//! Entry-form validation rules.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::error::ExpenseError;
use super::types::NewExpense;

/// Largest amount a single expense may carry.
pub const MAX_EXPENSE_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Validates a new expense before it becomes a record.
///
/// # Errors
///
/// Returns `ExpenseError::EmptyDescription` if the description is blank.
/// Returns `ExpenseError::EmptyCategory` if the category is blank.
/// Returns `ExpenseError::NonPositiveAmount` if the amount is zero or negative.
/// Returns `ExpenseError::AmountTooLarge` if the amount exceeds [`MAX_EXPENSE_AMOUNT`].
pub fn validate_new_expense(input: &NewExpense) -> Result<(), ExpenseError> {
    if input.description.trim().is_empty() {
        return Err(ExpenseError::EmptyDescription);
    }

    if input.category.trim().is_empty() {
        return Err(ExpenseError::EmptyCategory);
    }

    if input.amount <= Decimal::ZERO {
        return Err(ExpenseError::NonPositiveAmount(input.amount));
    }

    if input.amount > MAX_EXPENSE_AMOUNT {
        return Err(ExpenseError::AmountTooLarge(input.amount));
    }

    Ok(())
}

/// Parses a user-typed amount. A comma is accepted as the decimal separator.
///
/// # Errors
///
/// Returns `ExpenseError::InvalidAmount` if the text is not a number.
pub fn parse_amount(text: &str) -> Result<Decimal, ExpenseError> {
    let normalized = text.trim().replacen(',', ".", 1);
    Decimal::from_str(&normalized).map_err(|_| ExpenseError::InvalidAmount(text.to_string()))
}
