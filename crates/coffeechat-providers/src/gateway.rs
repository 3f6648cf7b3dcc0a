//! The calendar gateway trait.
//!
//! Everything above this crate talks to calendars through
//! [`CalendarGateway`]; the concrete backend is chosen at construction.

use std::future::Future;
use std::pin::Pin;

use crate::error::ProviderResult;
use crate::event::{Calendar, EventDraft, ProviderEvent};

/// Boxed future used by the object-safe gateway trait.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A calendar backend.
///
/// Listing methods return the provider's data unfiltered; deciding which
/// events matter is the caller's job. Implementations must be cheap to
/// share behind an `Arc`.
pub trait CalendarGateway: Send + Sync {
    /// Short name for logs, e.g. `"nylas"`.
    fn name(&self) -> &'static str;

    /// Every calendar on the grant, read-only ones included.
    fn list_calendars(&self) -> BoxFuture<'_, ProviderResult<Vec<Calendar>>>;

    /// Every event on one calendar within the backend's fetch horizon,
    /// in provider order.
    fn list_events(&self, calendar_id: &str) -> BoxFuture<'_, ProviderResult<Vec<ProviderEvent>>>;

    /// Creates an event and returns it as the provider now reports it.
    fn create_event(
        &self,
        calendar_id: &str,
        draft: EventDraft,
    ) -> BoxFuture<'_, ProviderResult<ProviderEvent>>;
}

/// Gateway that fails every call with a fixed error.
///
/// Stands in where a real backend is not configured yet, and exercises
/// error paths in tests.
#[derive(Debug, Clone)]
pub struct ErrorGateway {
    message: String,
}

impl ErrorGateway {
    /// Creates a gateway that fails with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for ErrorGateway {
    fn default() -> Self {
        Self::new("no calendar backend configured")
    }
}

impl CalendarGateway for ErrorGateway {
    fn name(&self) -> &'static str {
        "error"
    }

    fn list_calendars(&self) -> BoxFuture<'_, ProviderResult<Vec<Calendar>>> {
        let message = self.message.clone();
        Box::pin(async move { Err(crate::error::ProviderError::configuration(message)) })
    }

    fn list_events(&self, _calendar_id: &str) -> BoxFuture<'_, ProviderResult<Vec<ProviderEvent>>> {
        let message = self.message.clone();
        Box::pin(async move { Err(crate::error::ProviderError::configuration(message)) })
    }

    fn create_event(
        &self,
        _calendar_id: &str,
        _draft: EventDraft,
    ) -> BoxFuture<'_, ProviderResult<ProviderEvent>> {
        let message = self.message.clone();
        Box::pin(async move { Err(crate::error::ProviderError::configuration(message)) })
    }
}
