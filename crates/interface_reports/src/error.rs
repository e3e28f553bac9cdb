//! Report error handling

use thiserror::Error;

use domain_billing::BillingError;

/// Report generation error types
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Billing error: {0}")]
    Billing(#[from] BillingError),
}
