//! Rule-based spending insights and suggestions.
//!
//! This module provides a deterministic text generator over expense
//! aggregates, in two tiers:
//! - Basic: totals, top category, monthly trend, averages
//! - Detailed: daily average, weekday habits, outliers, budgeting rules,
//!   category tips
//!
//! Results resolve after a configured delay. [`InsightCoordinator`] numbers
//! each request so a newer request always supersedes an older one.

pub mod basic;
pub mod coordinator;
pub mod detailed;
pub mod service;
pub mod tips;
pub mod types;

#[cfg(test)]
mod tests;

pub use coordinator::InsightCoordinator;
pub use service::InsightService;
pub use types::{AiAnalysis, AnalysisSnapshot, InsightContext, InsightTier};
