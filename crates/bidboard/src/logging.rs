//! Process-wide logging setup.
//!
//! `tracing` events and `log` records both end up in one subscriber. The
//! filter comes from `RUST_LOG` when set, otherwise from the config. Output
//! goes to stderr so it never mixes with what the CLI prints.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::config::{LogFormat, LoggingConfig};
use crate::error::LoggingError;

fn build_filter(default_level: &str) -> Result<EnvFilter, LoggingError> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.trim().is_empty() => {
            EnvFilter::try_new(&directives).map_err(|e| LoggingError::InvalidFilter {
                filter: directives,
                reason: e.to_string(),
            })
        }
        _ => EnvFilter::try_new(default_level).map_err(|e| LoggingError::InvalidFilter {
            filter: default_level.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = build_filter(&config.level)?;

    match config.format {
        LogFormat::Text => {
            let subscriber = Registry::default().with(filter).with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            );
            tracing::subscriber::set_global_default(subscriber)
                .map_err(|_| LoggingError::AlreadyInitialized)?;
        }
        LogFormat::Json => {
            let subscriber = Registry::default()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_current_span(true),
                );
            tracing::subscriber::set_global_default(subscriber)
                .map_err(|_| LoggingError::AlreadyInitialized)?;
        }
    }

    tracing_log::LogTracer::init().map_err(|_| LoggingError::AlreadyInitialized)?;

    Ok(())
}
