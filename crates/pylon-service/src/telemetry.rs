//! Structured logging initialization.
//!
//! Wires the [`LoggingConfig`] into the tracing-subscriber ecosystem:
//! JSON output for production, pretty output for development, level
//! selection through an `EnvFilter`.
//!
//! # Example
//!
//! ```rust,ignore
//! use pylon_service::{init_logging, LoggingConfig};
//!
//! init_logging(&LoggingConfig::default())?;
//!
//! tracing::info!(handler = "create_item", "request handled");
//! ```

use crate::config::{LogFormat, LoggingConfig};
use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Errors raised while initializing telemetry.
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Logging initialization failed.
    #[error("failed to initialize logging: {0}")]
    LoggingInit(String),
}

/// Result type alias for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;

/// Initializes the logging subsystem.
///
/// A disabled config is a no-op. Initialization can only happen once
/// per process; a second call fails with [`TelemetryError::LoggingInit`].
///
/// # Errors
///
/// Returns [`TelemetryError::LoggingInit`] if the level filter is
/// invalid or a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> TelemetryResult<()> {
    if !config.enabled {
        return Ok(());
    }

    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| TelemetryError::LoggingInit(format!("Invalid log level: {e}")))?;

    match config.format {
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_filter(filter);

            tracing_subscriber::registry()
                .with(fmt_layer)
                .try_init()
                .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
        }
        LogFormat::Pretty => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .pretty()
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_filter(filter);

            tracing_subscriber::registry()
                .with(fmt_layer)
                .try_init()
                .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
        }
    }

    Ok(())
}

/// Standard log field names, for consistency across handlers.
pub mod fields {
    /// Handler name field.
    pub const HANDLER: &str = "handler";

    /// HTTP status code field.
    pub const HTTP_STATUS: &str = "http.status_code";

    /// Failure kind field.
    pub const FAILURE_KIND: &str = "failure_kind";

    /// Service name field.
    pub const SERVICE_NAME: &str = "service.name";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_logging_is_noop() {
        let config = LoggingConfig {
            enabled: false,
            ..LoggingConfig::default()
        };
        assert!(init_logging(&config).is_ok());
    }

    #[test]
    fn test_invalid_level_rejected() {
        let config = LoggingConfig {
            level: "invalid=level=directive".to_string(),
            ..LoggingConfig::default()
        };
        let result = init_logging(&config);
        assert!(matches!(result, Err(TelemetryError::LoggingInit(_))));
    }

    #[test]
    fn test_field_names() {
        assert_eq!(fields::HANDLER, "handler");
        assert_eq!(fields::FAILURE_KIND, "failure_kind");
    }
}
