//! Dashboard data types.

use serde::{Deserialize, Serialize};

use crate::category::CategoryRegistry;
use crate::goal::{GoalProgress, MonthlyGoal};
use crate::ranking::{CategoryShare, RankingService};
use crate::summary::ExpenseSummary;
use crate::trend::{MonthlyPoint, TrendResult, TrendService};

/// Number of months shown in the monthly chart.
pub const RECENT_MONTHS: usize = 3;

/// Derived view of the current expense state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Aggregated totals.
    pub summary: ExpenseSummary,
    /// Category shares, largest first.
    pub shares: Vec<CategoryShare>,
    /// Largest category, if any.
    pub top_category: Option<CategoryShare>,
    /// Month-over-month trend, if at least two months have data.
    pub trend: Option<TrendResult>,
    /// Last [`RECENT_MONTHS`] months in chronological order.
    pub recent_months: Vec<MonthlyPoint>,
    /// Total spending against the monthly goal.
    pub goal: GoalProgress,
}

impl DashboardSnapshot {
    /// Derives a snapshot from a summary.
    #[must_use]
    pub fn build(
        summary: &ExpenseSummary,
        registry: &CategoryRegistry,
        goal: &MonthlyGoal,
    ) -> Self {
        let shares = RankingService::rank(&summary.by_category, summary.total, registry);

        Self {
            top_category: shares.first().cloned(),
            shares,
            trend: TrendService::trend(&summary.by_month),
            recent_months: TrendService::recent_months(&summary.by_month, RECENT_MONTHS),
            goal: goal.progress(summary.total),
            summary: summary.clone(),
        }
    }
}
