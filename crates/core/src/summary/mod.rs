//! Expense aggregation: totals by category and by month.

pub mod service;
pub mod types;


pub use service::SummaryService;
pub use types::{ExpenseSummary, MonthKey, ParseMonthKeyError};
