//! Report configuration

use serde::Deserialize;

use crate::error::ReportError;

/// Report configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Log level or `EnvFilter` directive
    pub log_level: String,
    /// Emit logs as JSON lines
    pub json_logs: bool,
    /// List companies without invoices in the company report at 0.00
    pub include_idle_companies: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            include_idle_companies: true,
        }
    }
}

impl ReportConfig {
    /// Loads configuration from `REPORT_`-prefixed environment variables
    ///
    /// A `.env` file in the working directory is read first when present.
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ReportError> {
        dotenvy::dotenv().ok();
        Self::from_source(config::Environment::with_prefix("REPORT"))
    }

    /// Loads configuration from any `config` source
    pub fn from_source<S>(source: S) -> Result<Self, ReportError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;
        Ok(config)
    }
}
