//! Ranking data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A category's share of total spending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Category name.
    pub category: String,
    /// Summed amount.
    pub amount: Decimal,
    /// Percentage of total (0-100), zero when total is zero.
    pub percentage: Decimal,
    /// Display color from the registry, or the fallback color.
    pub color: String,
}
