//! Dashboard read model.
//!
//! Bundles everything a dashboard view renders:
//! - Totals and breakdowns
//! - Ranked category shares and the top category
//! - Trend and the last few months
//! - Goal progress

pub mod types;

pub use types::{DashboardSnapshot, RECENT_MONTHS};
