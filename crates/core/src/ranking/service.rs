//! Ranking service.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::types::CategoryShare;
use crate::category::CategoryRegistry;

/// Derives ranked category shares from per-category totals.
pub struct RankingService;

impl RankingService {
    /// Category names with their totals, sorted by amount, descending.
    ///
    /// The sort is stable, so equal amounts keep the map's name order.
    #[must_use]
    pub fn ordered(by_category: &BTreeMap<String, Decimal>) -> Vec<(&str, Decimal)> {
        let mut ordered: Vec<(&str, Decimal)> = by_category
            .iter()
            .map(|(category, &amount)| (category.as_str(), amount))
            .collect();

        ordered.sort_by(|a, b| b.1.cmp(&a.1));
        ordered
    }

    /// Converts category totals into shares, largest first.
    #[must_use]
    pub fn rank(
        by_category: &BTreeMap<String, Decimal>,
        total: Decimal,
        registry: &CategoryRegistry,
    ) -> Vec<CategoryShare> {
        Self::ordered(by_category)
            .into_iter()
            .map(|(category, amount)| CategoryShare {
                category: category.to_string(),
                amount,
                percentage: Self::percentage_of(amount, total),
                color: registry.color_for(category).to_string(),
            })
            .collect()
    }

    /// `amount / total * 100`, or zero if total is not positive.
    ///
    /// Results beyond the `Decimal` range saturate.
    #[must_use]
    pub fn percentage_of(amount: Decimal, total: Decimal) -> Decimal {
        if total <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        amount
            .checked_div(total)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(if amount.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            })
    }
}
