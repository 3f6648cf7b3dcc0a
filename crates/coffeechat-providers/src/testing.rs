//! In-memory gateway for tests and demos.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{ProviderError, ProviderErrorCode, ProviderResult};
use crate::event::{Calendar, EventDraft, ProviderEvent};
use crate::gateway::{BoxFuture, CalendarGateway};

/// Gateway backed by fixed data.
///
/// Listing returns whatever was loaded; created events are recorded and
/// echoed back. `failing_fetches` makes every listing call fail with the
/// given code, for exercising degraded paths.
#[derive(Debug, Default)]
pub struct StaticGateway {
    calendars: Vec<Calendar>,
    events: HashMap<String, Vec<ProviderEvent>>,
    created: Mutex<Vec<(String, EventDraft)>>,
    fail_fetches: Option<ProviderErrorCode>,
}

impl StaticGateway {
    /// An empty gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a calendar.
    #[must_use]
    pub fn with_calendar(mut self, calendar: Calendar) -> Self {
        self.calendars.push(calendar);
        self
    }

    /// Builder: load events for a calendar.
    #[must_use]
    pub fn with_events(mut self, calendar_id: impl Into<String>, events: Vec<ProviderEvent>) -> Self {
        self.events.insert(calendar_id.into(), events);
        self
    }

    /// Builder: make every listing call fail with `code`.
    #[must_use]
    pub fn failing_fetches(mut self, code: ProviderErrorCode) -> Self {
        self.fail_fetches = Some(code);
        self
    }

    /// Every `(calendar_id, draft)` pair submitted so far, in order.
    pub fn created(&self) -> Vec<(String, EventDraft)> {
        self.created.lock().expect("created lock").clone()
    }

    fn fetch_error(&self) -> Option<ProviderError> {
        self.fail_fetches
            .map(|code| ProviderError::new(code, "static gateway configured to fail"))
    }
}

impl CalendarGateway for StaticGateway {
    fn name(&self) -> &'static str {
        "static"
    }

    fn list_calendars(&self) -> BoxFuture<'_, ProviderResult<Vec<Calendar>>> {
        let result = match self.fetch_error() {
            Some(err) => Err(err),
            None => Ok(self.calendars.clone()),
        };
        Box::pin(async move { result })
    }

    fn list_events(&self, calendar_id: &str) -> BoxFuture<'_, ProviderResult<Vec<ProviderEvent>>> {
        let result = match self.fetch_error() {
            Some(err) => Err(err),
            None => Ok(self.events.get(calendar_id).cloned().unwrap_or_default()),
        };
        Box::pin(async move { result })
    }

    fn create_event(
        &self,
        calendar_id: &str,
        draft: EventDraft,
    ) -> BoxFuture<'_, ProviderResult<ProviderEvent>> {
        let calendar_id = calendar_id.to_string();
        Box::pin(async move {
            let mut created = self.created.lock().expect("created lock");
            created.push((calendar_id.clone(), draft.clone()));

            Ok(ProviderEvent {
                id: format!("static-{}", created.len()),
                calendar_id,
                title: Some(draft.title),
                description: (!draft.description.is_empty()).then_some(draft.description),
                location: draft.location,
                busy: draft.busy,
                status: Some("confirmed".to_string()),
                when: draft.when,
                participants: draft.participants,
                organizer: None,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventWhen;

    fn sample_event(id: &str) -> ProviderEvent {
        ProviderEvent::new(
            id,
            EventWhen::Timespan {
                start_time: 100,
                end_time: 200,
                start_timezone: None,
                end_timezone: None,
            },
        )
    }

    #[tokio::test]
    async fn lists_loaded_data() {
        let gateway = StaticGateway::new()
            .with_calendar(Calendar::new("cal-1", "Personal"))
            .with_events("cal-1", vec![sample_event("evt-1"), sample_event("evt-2")]);

        let calendars = gateway.list_calendars().await.unwrap();
        assert_eq!(calendars.len(), 1);

        let events = gateway.list_events("cal-1").await.unwrap();
        assert_eq!(events.len(), 2);

        // Unknown calendars list as empty rather than failing.
        assert!(gateway.list_events("cal-9").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn records_and_echoes_created_events() {
        let gateway = StaticGateway::new().with_calendar(Calendar::new("cal-1", "Personal"));

        let draft = EventDraft::new("Coffee Chat with Ada", 100, 200, "UTC")
            .with_participant("ada@example.com");
        let event = gateway.create_event("cal-1", draft).await.unwrap();

        assert_eq!(event.calendar_id, "cal-1");
        assert_eq!(event.title.as_deref(), Some("Coffee Chat with Ada"));
        assert!(event.busy);
        assert_eq!(event.participants.len(), 1);

        let created = gateway.created();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].0, "cal-1");
    }

    #[tokio::test]
    async fn failing_fetches_break_listing_but_not_creation() {
        let gateway = StaticGateway::new()
            .with_calendar(Calendar::new("cal-1", "Personal"))
            .failing_fetches(ProviderErrorCode::ServerError);

        let err = gateway.list_calendars().await.unwrap_err();
        assert_eq!(err.code(), ProviderErrorCode::ServerError);
        assert!(gateway.list_events("cal-1").await.is_err());

        let draft = EventDraft::new("Chat", 100, 200, "UTC");
        assert!(gateway.create_event("cal-1", draft).await.is_ok());
    }
}
