//! Goal progress calculations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::GoalError;
use crate::ranking::RankingService;

/// A user-set monthly spending ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyGoal {
    target: Decimal,
}

impl MonthlyGoal {
    /// Creates a goal.
    ///
    /// # Errors
    ///
    /// Returns `GoalError::NonPositiveTarget` if `target` is zero or negative.
    pub fn new(target: Decimal) -> Result<Self, GoalError> {
        if target <= Decimal::ZERO {
            return Err(GoalError::NonPositiveTarget(target));
        }
        Ok(Self { target })
    }

    /// The spending ceiling.
    #[must_use]
    pub const fn target(&self) -> Decimal {
        self.target
    }

    /// Progress of `current_spending` against this goal.
    #[must_use]
    pub fn progress(&self, current_spending: Decimal) -> GoalProgress {
        GoalProgress::calculate(self.target, current_spending)
    }
}

impl Default for MonthlyGoal {
    fn default() -> Self {
        Self {
            target: Decimal::from(2000),
        }
    }
}

/// Label for the remaining amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Spending is at or below the goal.
    Remaining,
    /// Spending exceeds the goal.
    OverBudget,
}

/// Spending measured against a monthly goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Goal target.
    pub goal: Decimal,
    /// Current spending.
    pub current_spending: Decimal,
    /// Raw `current / goal * 100`; may exceed 100.
    pub progress_percentage: Decimal,
    /// `progress_percentage` capped at 100, for progress bars.
    pub display_percentage: Decimal,
    /// True when current spending is strictly above the goal.
    pub is_over_budget: bool,
    /// `goal - current`; negative when over budget.
    pub remaining: Decimal,
    /// Magnitude of `remaining`.
    pub remaining_abs: Decimal,
    /// Whether `remaining_abs` is left over or overspent.
    pub status: GoalStatus,
}

impl GoalProgress {
    /// Calculates progress. A zero goal yields zero percentages.
    #[must_use]
    pub fn calculate(goal: Decimal, current_spending: Decimal) -> Self {
        let progress_percentage = RankingService::percentage_of(current_spending, goal);
        let is_over_budget = current_spending > goal;
        let remaining = goal.saturating_sub(current_spending);

        Self {
            goal,
            current_spending,
            progress_percentage,
            display_percentage: progress_percentage.min(Decimal::ONE_HUNDRED),
            is_over_budget,
            remaining,
            remaining_abs: remaining.abs(),
            status: if is_over_budget {
                GoalStatus::OverBudget
            } else {
                GoalStatus::Remaining
            },
        }
    }
}
