//! Trend data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::summary::MonthKey;

/// Direction of the latest month-over-month change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Latest month is higher than the previous one.
    Increase,
    /// Latest month is lower than the previous one.
    Decrease,
    /// Both months are equal.
    Stable,
}

/// Comparison of the two most recent months.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendResult {
    /// Most recent month.
    pub latest_month: MonthKey,
    /// Month before it (the second most recent with data).
    pub previous_month: MonthKey,
    /// Latest total minus previous total.
    pub delta: Decimal,
    /// `delta / previous * 100`, zero when previous is zero.
    pub percent_change: Decimal,
    /// Sign of `delta`.
    pub direction: TrendDirection,
}

/// One month of the chronological spending series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    /// Month.
    pub month: MonthKey,
    /// Total spent that month.
    pub amount: Decimal,
}
