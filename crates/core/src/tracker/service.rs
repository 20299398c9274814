//! Expense tracker.

use rust_decimal::Decimal;
use spendlens_shared::config::GoalConfig;
use spendlens_shared::types::ExpenseId;
use tokio::runtime::Handle;
use tracing::{debug, info};

use crate::category::CategoryRegistry;
use crate::dashboard::DashboardSnapshot;
use crate::expense::{ExpenseError, ExpenseRecord, NewExpense};
use crate::goal::{GoalError, GoalProgress, MonthlyGoal};
use crate::insight::{InsightCoordinator, InsightTier};
use crate::summary::{ExpenseSummary, SummaryService};

/// Owns the expense collection and keeps its summary current.
///
/// Expenses are stored newest first. The summary is recomputed from scratch
/// after every mutation and replaced as a whole, together with the list.
///
/// With an attached [`InsightCoordinator`], every change to the list
/// supersedes pending insight requests. Inside a tokio runtime it also issues
/// a fresh basic analysis for the new data.
#[derive(Debug, Clone)]
pub struct ExpenseTracker {
    expenses: Vec<ExpenseRecord>,
    summary: ExpenseSummary,
    goal: MonthlyGoal,
    registry: CategoryRegistry,
    insights: Option<InsightCoordinator>,
}

impl ExpenseTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new(registry: CategoryRegistry, goal: MonthlyGoal) -> Self {
        Self {
            expenses: Vec::new(),
            summary: ExpenseSummary::default(),
            goal,
            registry,
            insights: None,
        }
    }

    /// Attaches a coordinator to be notified of every list change.
    #[must_use]
    pub fn with_insights(mut self, coordinator: InsightCoordinator) -> Self {
        self.insights = Some(coordinator);
        self
    }

    /// Creates an empty tracker with the configured goal.
    ///
    /// # Errors
    ///
    /// Returns `GoalError::NonPositiveTarget` if the configured target is not
    /// positive.
    pub fn from_config(config: &GoalConfig, registry: CategoryRegistry) -> Result<Self, GoalError> {
        Ok(Self::new(registry, MonthlyGoal::new(config.monthly_target)?))
    }

    /// Validates and records an expense, placing it first.
    ///
    /// # Errors
    ///
    /// Returns the validation error; the tracker is left unchanged.
    pub fn add(&mut self, input: NewExpense) -> Result<ExpenseRecord, ExpenseError> {
        let record = ExpenseRecord::create(input)?;

        let mut expenses = Vec::with_capacity(self.expenses.len() + 1);
        expenses.push(record.clone());
        expenses.extend(self.expenses.iter().cloned());
        self.commit(expenses);

        info!(
            expense_id = %record.id,
            amount = %record.amount,
            category = %record.category,
            "Expense added"
        );
        Ok(record)
    }

    /// Removes an expense by ID.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::NotFound` if no expense has this ID.
    pub fn remove(&mut self, id: ExpenseId) -> Result<ExpenseRecord, ExpenseError> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or(ExpenseError::NotFound(id))?;

        let mut expenses = self.expenses.clone();
        let record = expenses.remove(index);
        self.commit(expenses);

        info!(expense_id = %id, "Expense removed");
        Ok(record)
    }

    /// Replaces the monthly goal.
    ///
    /// # Errors
    ///
    /// Returns `GoalError::NonPositiveTarget` if `target` is not positive;
    /// the previous goal is kept.
    pub fn set_goal(&mut self, target: Decimal) -> Result<(), GoalError> {
        self.goal = MonthlyGoal::new(target)?;
        debug!(target = %target, "Monthly goal updated");
        Ok(())
    }

    /// Expenses, newest first.
    #[must_use]
    pub fn expenses(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    /// Current summary.
    #[must_use]
    pub const fn summary(&self) -> &ExpenseSummary {
        &self.summary
    }

    /// Current goal.
    #[must_use]
    pub const fn goal(&self) -> &MonthlyGoal {
        &self.goal
    }

    /// Category registry used for colors.
    #[must_use]
    pub const fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// Total spending against the goal.
    #[must_use]
    pub fn goal_progress(&self) -> GoalProgress {
        self.goal.progress(self.summary.total)
    }

    /// Derives the dashboard view.
    #[must_use]
    pub fn dashboard(&self) -> DashboardSnapshot {
        DashboardSnapshot::build(&self.summary, &self.registry, &self.goal)
    }

    /// Attached insight coordinator, if any.
    #[must_use]
    pub const fn insights(&self) -> Option<&InsightCoordinator> {
        self.insights.as_ref()
    }

    fn commit(&mut self, expenses: Vec<ExpenseRecord>) {
        let summary = SummaryService::summarize(&expenses);
        self.expenses = expenses;
        self.summary = summary;
        self.notify_insights();
    }

    fn notify_insights(&self) {
        let Some(coordinator) = &self.insights else {
            return;
        };

        if Handle::try_current().is_ok() {
            // Completion is observed through the coordinator's channel.
            drop(coordinator.refresh(
                InsightTier::Basic,
                self.expenses.clone(),
                self.summary.clone(),
            ));
        } else {
            coordinator.invalidate();
        }
    }
}

impl Default for ExpenseTracker {
    fn default() -> Self {
        Self::new(CategoryRegistry::default(), MonthlyGoal::default())
    }
}
