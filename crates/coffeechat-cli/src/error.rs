//! CLI error types.

use std::fmt;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI.
#[derive(Debug)]
pub enum CliError {
    /// Configuration error.
    Config(String),
    /// Calendar backend error.
    Provider(String),
    /// Scheduling error.
    Schedule(String),
    /// IO error.
    Io(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {}", msg),
            Self::Provider(msg) => write!(f, "provider error: {}", msg),
            Self::Schedule(msg) => write!(f, "scheduling error: {}", msg),
            Self::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<coffeechat_providers::ProviderError> for CliError {
    fn from(err: coffeechat_providers::ProviderError) -> Self {
        Self::Provider(err.to_string())
    }
}

impl From<coffeechat_scheduler::ScheduleError> for CliError {
    fn from(err: coffeechat_scheduler::ScheduleError) -> Self {
        Self::Schedule(err.to_string())
    }
}
