//! Application state: the expense list, its summary, and the monthly goal.

pub mod service;

pub use service::ExpenseTracker;
