//! Tracing setup shared by every binary entry point.
//!
//! ```ignore
//! use coffeechat_core::tracing::{TracingConfig, init_tracing};
//!
//! init_tracing(&TracingConfig::default())?;
//! ```
//!
//! Filtering follows `COFFEECHAT_LOG` when set, then `RUST_LOG`, then the
//! config's default level. Logs always go to stderr so command output on
//! stdout stays clean.

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{
    EnvFilter,
    fmt,
    prelude::*,
};

/// Environment variable consulted first for filter directives.
pub const LOG_ENV: &str = "COFFEECHAT_LOG";

/// Errors that can occur during tracing initialization.
#[derive(Debug, Error)]
pub enum TracingError {
    /// A global subscriber was already installed.
    #[error("failed to set global tracing subscriber: {0}")]
    SetGlobalSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),

    /// A filter directive did not parse.
    #[error("failed to parse env filter: {0}")]
    EnvFilter(#[from] tracing_subscriber::filter::ParseError),
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TracingOutputFormat {
    /// Compact single-line text (default).
    #[default]
    Text,
    /// JSON, one object per line.
    Json,
}

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Level applied when no env directive is present.
    pub default_level: Level,
    /// Output format for log lines.
    pub output_format: TracingOutputFormat,
    /// Whether to include the module path in each line.
    pub include_target: bool,
    /// Whether to include timestamps.
    pub include_timestamp: bool,
    /// Explicit filter directive, overriding environment and default level.
    pub env_filter: Option<String>,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_level: Level::WARN,
            output_format: TracingOutputFormat::Text,
            include_target: true,
            include_timestamp: false,
            env_filter: None,
        }
    }
}

impl TracingConfig {
    /// Config for `--verbose` runs: debug level with timestamps.
    #[must_use]
    pub fn verbose() -> Self {
        Self {
            default_level: Level::DEBUG,
            include_timestamp: true,
            ..Self::default()
        }
    }

    /// Builder: set the default level.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.default_level = level;
        self
    }

    /// Builder: set the output format.
    #[must_use]
    pub fn with_format(mut self, format: TracingOutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Builder: set an explicit filter directive.
    #[must_use]
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }
}

/// Initializes the global subscriber. Call once, at startup.
///
/// # Errors
///
/// Fails when a subscriber is already installed or a filter directive does
/// not parse.
pub fn init_tracing(config: &TracingConfig) -> Result<(), TracingError> {
    let filter = build_filter(config)?;

    match config.output_format {
        TracingOutputFormat::Text => {
            let layer = fmt::layer()
                .compact()
                .with_target(config.include_target)
                .with_writer(std::io::stderr);
            let layer = if config.include_timestamp {
                layer.boxed()
            } else {
                layer.without_time().boxed()
            };
            let subscriber = tracing_subscriber::registry().with(filter).with(layer);
            tracing::subscriber::set_global_default(subscriber)?;
        }
        TracingOutputFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_target(config.include_target)
                .with_writer(std::io::stderr);
            let layer = if config.include_timestamp {
                layer.boxed()
            } else {
                layer.without_time().boxed()
            };
            let subscriber = tracing_subscriber::registry().with(filter).with(layer);
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    Ok(())
}

fn build_filter(config: &TracingConfig) -> Result<EnvFilter, TracingError> {
    if let Some(ref directive) = config.env_filter {
        return Ok(EnvFilter::try_new(directive)?);
    }
    for var in [LOG_ENV, "RUST_LOG"] {
        if let Ok(directive) = std::env::var(var)
            && !directive.is_empty()
        {
            return Ok(EnvFilter::try_new(directive)?);
        }
    }
    Ok(EnvFilter::new(config.default_level.to_string()))
}
