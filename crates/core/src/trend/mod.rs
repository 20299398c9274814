//! Month-over-month spending trend.

pub mod service;
pub mod types;

pub use service::TrendService;
pub use types::{MonthlyPoint, TrendDirection, TrendResult};
