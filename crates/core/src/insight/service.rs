//! Delayed insight generation.

use std::time::Duration;

use chrono::NaiveDate;
use spendlens_shared::config::InsightConfig;
use spendlens_shared::types::Currency;

use super::types::{AiAnalysis, InsightContext, InsightTier};
use super::{basic, detailed};
use crate::expense::ExpenseRecord;
use crate::summary::ExpenseSummary;

/// Produces analyses after the configured latency of each tier.
#[derive(Debug, Clone, Default)]
pub struct InsightService {
    config: InsightConfig,
    currency: Currency,
}

impl InsightService {
    /// Creates a service.
    #[must_use]
    pub const fn new(config: InsightConfig, currency: Currency) -> Self {
        Self { config, currency }
    }

    /// Latency of a tier.
    #[must_use]
    pub fn delay(&self, tier: InsightTier) -> Duration {
        match tier {
            InsightTier::Basic => self.config.basic_delay(),
            InsightTier::Detailed => self.config.detailed_delay(),
        }
    }

    /// Basic analysis, resolved after the basic delay.
    pub async fn analyze(
        &self,
        expenses: &[ExpenseRecord],
        summary: &ExpenseSummary,
        today: NaiveDate,
    ) -> AiAnalysis {
        self.run(InsightTier::Basic, expenses, summary, today).await
    }

    /// Detailed analysis, resolved after the detailed delay.
    pub async fn analyze_more(
        &self,
        expenses: &[ExpenseRecord],
        summary: &ExpenseSummary,
        today: NaiveDate,
    ) -> AiAnalysis {
        self.run(InsightTier::Detailed, expenses, summary, today).await
    }

    /// Waits for the tier's delay, then generates.
    pub async fn run(
        &self,
        tier: InsightTier,
        expenses: &[ExpenseRecord],
        summary: &ExpenseSummary,
        today: NaiveDate,
    ) -> AiAnalysis {
        tokio::time::sleep(self.delay(tier)).await;
        self.generate(tier, expenses, summary, today)
    }

    /// Generates immediately. Same inputs always give the same output.
    #[must_use]
    pub fn generate(
        &self,
        tier: InsightTier,
        expenses: &[ExpenseRecord],
        summary: &ExpenseSummary,
        today: NaiveDate,
    ) -> AiAnalysis {
        let ctx = InsightContext::new(today, self.currency);
        match tier {
            InsightTier::Basic => basic::analyze(expenses, summary, &ctx),
            InsightTier::Detailed => detailed::analyze(expenses, summary, &ctx),
        }
    }
}
