//! Category ranking with percentage-of-total shares.

pub mod service;
pub mod types;

pub use service::RankingService;
pub use types::CategoryShare;
