//! Tracing bootstrap for the assessment service.
//!
//! Production emits compact single-line records for log shippers; every
//! other environment gets the pretty multi-line format for local reading.

use crate::config::{AppEnvironment, TelemetryConfig};
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    InvalidFilter {
        directive: String,
        source: ParseError,
    },
    SubscriberRejected(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::InvalidFilter { directive, .. } => {
                write!(f, "log filter directive '{directive}' does not parse")
            }
            TelemetryError::SubscriberRejected(err) => {
                write!(f, "tracing subscriber registration failed: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::InvalidFilter { source, .. } => Some(source),
            TelemetryError::SubscriberRejected(err) => Some(&**err),
        }
    }
}

pub fn init(
    environment: AppEnvironment,
    config: &TelemetryConfig,
) -> Result<(), TelemetryError> {
    // RUST_LOG outranks the configured level so operators can raise
    // verbosity without touching deployment config.
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) => parse_filter(&directives)?,
        Err(_) => parse_filter(&config.log_level)?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false);

    match environment {
        AppEnvironment::Production => builder.compact().try_init(),
        AppEnvironment::Development | AppEnvironment::Test => builder.pretty().try_init(),
    }
    .map_err(TelemetryError::SubscriberRejected)
}

fn parse_filter(directives: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directives).map_err(|source| TelemetryError::InvalidFilter {
        directive: directives.to_string(),
        source,
    })
}
