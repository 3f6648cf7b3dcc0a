//! Scheduling error types.

use thiserror::Error;

use coffeechat_core::InputError;
use coffeechat_providers::ProviderError;

/// Result type for scheduling operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Errors that can occur while computing availability or booking.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The visitor's input did not validate.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The calendar backend failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Every calendar on the account is read-only.
    #[error("no writable calendar on the account")]
    NoWritableCalendar,

    /// The scheduler configuration is unusable.
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl ScheduleError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
