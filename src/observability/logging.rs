//! # Logging
//!
//! Installs the global tracing subscriber.
//!
//! `RUST_LOG` wins when set. Otherwise the configured `LOG_LEVEL` applies to the
//! library and to the calling binary's own target.

use crate::config::OperatorConfig;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is not set
pub fn default_directive(config: &OperatorConfig, binary_target: &str) -> String {
    let level = config.log_level.to_lowercase();
    format!("cincinnati_operator={level},{binary_target}={level}")
}

/// Initialize the tracing subscriber in text or JSON format
pub fn init_logging(config: &OperatorConfig, binary_target: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config, binary_target)));

    let result = if config.json_logs() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_uses_configured_level() {
        let config = OperatorConfig {
            log_level: "DEBUG".to_string(),
            ..OperatorConfig::default()
        };
        assert_eq!(
            default_directive(&config, "cincinnati_names"),
            "cincinnati_operator=debug,cincinnati_names=debug"
        );
    }
}
