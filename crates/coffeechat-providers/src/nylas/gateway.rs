//! Nylas gateway implementation.
//!
//! Implements the [`CalendarGateway`] trait on top of the Nylas client.

use crate::error::{ProviderError, ProviderResult};
use crate::event::{Calendar, EventDraft, ProviderEvent};
use crate::gateway::{BoxFuture, CalendarGateway};

use super::client::NylasClient;
use super::config::NylasConfig;

/// Calendar gateway backed by the Nylas v3 API.
///
/// Authentication is the API key in the configuration; there is no token
/// flow to drive. Errors are tagged with the `nylas` provider name.
#[derive(Debug)]
pub struct NylasGateway {
    client: NylasClient,
}

impl NylasGateway {
    /// Creates a gateway from a validated configuration.
    pub fn new(config: NylasConfig) -> ProviderResult<Self> {
        Ok(Self {
            client: NylasClient::new(config)?,
        })
    }

    /// Creates a gateway from `NYLAS_API_KEY` and `NYLAS_GRANT_ID`.
    pub fn from_env() -> ProviderResult<Self> {
        let config = NylasConfig::from_env().map_err(ProviderError::configuration)?;
        Self::new(config)
    }
}

impl CalendarGateway for NylasGateway {
    fn name(&self) -> &'static str {
        "nylas"
    }

    fn list_calendars(&self) -> BoxFuture<'_, ProviderResult<Vec<Calendar>>> {
        Box::pin(async move {
            self.client
                .list_calendars()
                .await
                .map_err(|e| e.with_provider(self.name()))
        })
    }

    fn list_events(&self, calendar_id: &str) -> BoxFuture<'_, ProviderResult<Vec<ProviderEvent>>> {
        let calendar_id = calendar_id.to_string();
        Box::pin(async move {
            self.client
                .list_events(&calendar_id)
                .await
                .map_err(|e| e.with_provider(self.name()))
        })
    }

    fn create_event(
        &self,
        calendar_id: &str,
        draft: EventDraft,
    ) -> BoxFuture<'_, ProviderResult<ProviderEvent>> {
        let calendar_id = calendar_id.to_string();
        Box::pin(async move {
            self.client
                .create_event(&calendar_id, &draft)
                .await
                .map_err(|e| e.with_provider(self.name()))
        })
    }
}
