//! Logging setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ReportConfig;

/// Installs the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level. Output is plain
/// text or JSON lines per [`ReportConfig::json_logs`]. Returns `false` when a
/// global subscriber is already installed, in which case nothing changes.
pub fn init_tracing(config: &ReportConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if config.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };

    installed.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_a_no_op() {
        let config = ReportConfig::default();
        init_tracing(&config);
        assert!(!init_tracing(&config));
    }
}
