//! Aggregator service.

use rust_decimal::Decimal;

use super::types::{ExpenseSummary, MonthKey};
use crate::expense::ExpenseRecord;

/// Reduces expense records into an [`ExpenseSummary`].
pub struct SummaryService;

impl SummaryService {
    /// Aggregates total, per-category and per-month sums.
    ///
    /// Pure function of its input. Amounts are not validated here; an empty
    /// slice yields an all-zero summary. Sums saturate at `Decimal::MAX`
    /// instead of overflowing.
    #[must_use]
    pub fn summarize(expenses: &[ExpenseRecord]) -> ExpenseSummary {
        let mut summary = ExpenseSummary::default();

        for expense in expenses {
            summary.total = summary.total.saturating_add(expense.amount);

            let category = summary
                .by_category
                .entry(expense.category.clone())
                .or_insert(Decimal::ZERO);
            *category = category.saturating_add(expense.amount);

            let month = summary
                .by_month
                .entry(MonthKey::from_date(expense.date))
                .or_insert(Decimal::ZERO);
            *month = month.saturating_add(expense.amount);
        }

        summary.count = expenses.len();
        summary
    }
}
