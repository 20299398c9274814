//! Expense data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use spendlens_shared::types::ExpenseId;

use super::error::ExpenseError;
use super::validation::validate_new_expense;

/// A recorded expense. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Expense ID, generated at creation.
    pub id: ExpenseId,
    /// Free-form description.
    pub description: String,
    /// Positive amount in major currency units.
    pub amount: Decimal,
    /// Category name, conventionally one of the registry entries.
    pub category: String,
    /// Calendar date of the expense.
    pub date: NaiveDate,
}

/// Input for recording a new expense.
#[derive(Debug, Clone, Deserialize)]
pub struct NewExpense {
    /// Description.
    pub description: String,
    /// Amount.
    pub amount: Decimal,
    /// Category name.
    pub category: String,
    /// Date of the expense.
    pub date: NaiveDate,
}

impl ExpenseRecord {
    /// Validates the input and assigns a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure, see [`validate_new_expense`].
    pub fn create(input: NewExpense) -> Result<Self, ExpenseError> {
        validate_new_expense(&input)?;

        Ok(Self {
            id: ExpenseId::new(),
            description: input.description,
            amount: input.amount,
            category: input.category,
            date: input.date,
        })
    }
}
