//! Driver configuration

use serde::Deserialize;

use core_kernel::Currency;

/// Console driver configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Billing currency for the session
    pub currency: Currency,
    /// Log level
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            log_level: "info".to_string(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from `HOSPITAL_`-prefixed environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("HOSPITAL"))
            .build()?
            .try_deserialize()
    }
}
