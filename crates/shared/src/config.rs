//! Application configuration management.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppResult;
use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Insight generator configuration.
    #[serde(default)]
    pub insights: InsightConfig,
    /// Monthly goal configuration.
    #[serde(default)]
    pub goal: GoalConfig,
    /// Currency used when rendering amounts in generated text.
    #[serde(default)]
    pub currency: Currency,
}

/// Simulated latency for the insight tiers.
#[derive(Debug, Clone, Deserialize)]
pub struct InsightConfig {
    /// Delay before a basic analysis resolves, in milliseconds.
    #[serde(default = "default_basic_delay_ms")]
    pub basic_delay_ms: u64,
    /// Delay before a detailed analysis resolves, in milliseconds.
    #[serde(default = "default_detailed_delay_ms")]
    pub detailed_delay_ms: u64,
}

fn default_basic_delay_ms() -> u64 {
    1500
}

fn default_detailed_delay_ms() -> u64 {
    2000
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            basic_delay_ms: default_basic_delay_ms(),
            detailed_delay_ms: default_detailed_delay_ms(),
        }
    }
}

impl InsightConfig {
    /// Basic tier delay as a `Duration`.
    #[must_use]
    pub const fn basic_delay(&self) -> Duration {
        Duration::from_millis(self.basic_delay_ms)
    }

    /// Detailed tier delay as a `Duration`.
    #[must_use]
    pub const fn detailed_delay(&self) -> Duration {
        Duration::from_millis(self.detailed_delay_ms)
    }
}

/// Monthly goal configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GoalConfig {
    /// Spending ceiling the session starts with.
    #[serde(default = "default_monthly_target")]
    pub monthly_target: Decimal,
}

fn default_monthly_target() -> Decimal {
    Decimal::from(2000)
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            monthly_target: default_monthly_target(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a source cannot be read or deserialized.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SPENDLENS").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
