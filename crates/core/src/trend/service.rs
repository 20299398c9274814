//! Trend calculation service.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::types::{MonthlyPoint, TrendDirection, TrendResult};
use crate::ranking::RankingService;
use crate::summary::MonthKey;

/// Computes month-over-month trends from monthly totals.
pub struct TrendService;

impl TrendService {
    /// Compares the two most recent months.
    ///
    /// Returns `None` when fewer than two months have data.
    #[must_use]
    pub fn trend(by_month: &BTreeMap<MonthKey, Decimal>) -> Option<TrendResult> {
        let mut recent = by_month.iter().rev();
        let (&latest_month, &latest) = recent.next()?;
        let (&previous_month, &previous) = recent.next()?;

        let delta = latest.saturating_sub(previous);
        let percent_change = RankingService::percentage_of(delta, previous);

        let direction = match delta.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => TrendDirection::Increase,
            std::cmp::Ordering::Less => TrendDirection::Decrease,
            std::cmp::Ordering::Equal => TrendDirection::Stable,
        };

        Some(TrendResult {
            latest_month,
            previous_month,
            delta,
            percent_change,
            direction,
        })
    }

    /// All months in chronological order.
    #[must_use]
    pub fn monthly_series(by_month: &BTreeMap<MonthKey, Decimal>) -> Vec<MonthlyPoint> {
        by_month
            .iter()
            .map(|(&month, &amount)| MonthlyPoint { month, amount })
            .collect()
    }

    /// The last `n` months in chronological order.
    #[must_use]
    pub fn recent_months(by_month: &BTreeMap<MonthKey, Decimal>, n: usize) -> Vec<MonthlyPoint> {
        let series = Self::monthly_series(by_month);
        let skip = series.len().saturating_sub(n);
        series.into_iter().skip(skip).collect()
    }
}
