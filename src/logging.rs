//! Tracing setup for the CLI.
//!
//! Diagnostics go to stderr so they never mix with command output.
//! `RUST_LOG` wins over the configured level.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to set global tracing subscriber: {0}")]
    SetGlobalSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),

    #[error("failed to parse log filter: {0}")]
    EnvFilter(#[from] tracing_subscriber::filter::ParseError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }
}

pub fn init_logging(config: LoggingConfig) -> Result<(), LoggingError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!("gymcheck={}", config.level))?,
    };

    match config.format {
        LogFormat::Compact => {
            let subscriber = tracing_subscriber::registry().with(env_filter).with(
                fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .without_time(),
            );
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogFormat::Json => {
            let subscriber = tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr));
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    Ok(())
}
