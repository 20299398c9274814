//! Category registry: fixed category names and their display colors.

pub mod registry;

pub use registry::{CategoryDefinition, CategoryRegistry, FALLBACK_COLOR};
