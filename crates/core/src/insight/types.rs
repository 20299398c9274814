//! Insight data types.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use spendlens_shared::types::{Currency, Money};

/// Which generator produced an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightTier {
    /// Default analysis shown on every data change.
    Basic,
    /// Richer analysis behind the "more insights" action.
    Detailed,
}

/// Generated insights and suggestions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiAnalysis {
    /// Backward-looking observations, in display order.
    pub insights: Vec<String>,
    /// Forward-looking recommendations, in display order.
    pub suggestions: Vec<String>,
    /// True while a newer analysis is being generated.
    pub loading: bool,
}

/// Published analysis state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSnapshot {
    /// Sequence number of the request that produced `analysis`; 0 before any.
    pub sequence: u64,
    /// Tier of `analysis`, if one has been produced.
    pub tier: Option<InsightTier>,
    /// The analysis itself.
    pub analysis: AiAnalysis,
}

/// Fixed inputs for a generation run besides the data itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsightContext {
    /// Reference date for "last 7 days" rules.
    pub today: NaiveDate,
    /// Currency used when rendering amounts.
    pub currency: Currency,
}

impl InsightContext {
    /// Creates a context.
    #[must_use]
    pub const fn new(today: NaiveDate, currency: Currency) -> Self {
        Self { today, currency }
    }

    /// Renders an amount in the context currency.
    #[must_use]
    pub fn money(&self, amount: Decimal) -> Money {
        Money::new(amount, self.currency)
    }

    /// Renders an amount without forcing two decimals, e.g. `R$ 10`.
    #[must_use]
    pub fn plain_amount(&self, amount: Decimal) -> String {
        format!("{} {}", self.currency.symbol(), amount.normalize())
    }
}

/// Formats a percentage with one decimal place.
#[must_use]
pub fn format_percent(value: Decimal) -> String {
    format!(
        "{:.1}",
        value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    )
}
