//! Expense records and entry validation.

pub mod error;
pub mod types;
pub mod validation;

pub use error::ExpenseError;
pub use types::{ExpenseRecord, NewExpense};
pub use validation::{parse_amount, validate_new_expense, MAX_EXPENSE_AMOUNT};
