//! Core business logic for SpendLens.
//!
//! This crate contains pure expense logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `expense` - Expense records, input validation, and amount parsing
//! - `category` - Category registry and display colors
//! - `summary` - Totals by category and by calendar month
//! - `ranking` - Category shares sorted by amount
//! - `trend` - Month-over-month change and monthly series
//! - `goal` - Monthly spending goal and progress
//! - `dashboard` - Combined read model for the dashboard view
//! - `insight` - Rule-based insights and suggestions with simulated latency
//! - `tracker` - Application state tying the above together

pub mod category;
pub mod dashboard;
pub mod expense;
pub mod goal;
pub mod insight;
pub mod ranking;
pub mod summary;
pub mod tracker;
pub mod trend;
