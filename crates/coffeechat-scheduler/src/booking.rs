//! The booking flow.
//!
//! Turns a visitor's form submission into a calendar event. The slot label
//! and timezone abbreviation are resolved to UTC instants first, so every
//! input error surfaces before anything reaches the backend; the event is
//! then created on the first writable calendar of the account.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use coffeechat_core::{
    InputError, ZoneEntry, end_is_next_midnight, format_clock, parse_slot_label,
};
use coffeechat_providers::EventDraft;

use crate::availability::Scheduler;
use crate::error::{ScheduleError, ScheduleResult};

/// Title used when the form does not carry one.
pub const DEFAULT_TITLE: &str = "Coffee Chat";

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// A visitor's request to book one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    /// Calendar date of the slot.
    pub date: NaiveDate,
    /// Slot label as shown on the page, `"09:00 AM - 09:30 AM"`.
    pub slot_label: String,
    /// Timezone abbreviation the visitor picked, `"EST"`.
    pub timezone_label: String,
    /// Visitor's address, invited to the event.
    pub attendee_email: String,
    /// Visitor's name, woven into the event title.
    pub attendee_name: String,
    /// Base title; the attendee name is appended.
    #[serde(default = "default_title")]
    pub title: String,
    /// Free-form note copied into the event body.
    #[serde(default)]
    pub description: Option<String>,
}

impl MeetingRequest {
    /// Creates a request with the default title and no description.
    pub fn new(
        date: NaiveDate,
        slot_label: impl Into<String>,
        timezone_label: impl Into<String>,
        attendee_email: impl Into<String>,
        attendee_name: impl Into<String>,
    ) -> Self {
        Self {
            date,
            slot_label: slot_label.into(),
            timezone_label: timezone_label.into(),
            attendee_email: attendee_email.into(),
            attendee_name: attendee_name.into(),
            title: default_title(),
            description: None,
        }
    }

    /// Builder: set the base title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder: set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A slot label resolved to UTC instants through one zone menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRange {
    /// Start instant.
    pub start: DateTime<Utc>,
    /// End instant.
    pub end: DateTime<Utc>,
    /// The menu entry that governed the conversion.
    pub zone: ZoneEntry,
}

/// What the visitor is told after a successful booking.
///
/// Times are civil times in the zone the visitor picked, alongside the
/// nominal offset of their abbreviation and the exact Unix instants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedEventSummary {
    /// Provider id of the created event.
    pub event_id: String,
    /// Calendar the event landed on.
    pub calendar_id: String,
    /// Full event title, attendee name included.
    pub title: String,
    /// Calendar date of the slot.
    pub date: NaiveDate,
    /// Civil start in the visitor's zone, `"09:00 AM"`.
    pub start_display: String,
    /// Civil end in the visitor's zone, `"09:30 AM"`.
    pub end_display: String,
    /// Abbreviation the visitor picked.
    pub timezone_label: String,
    /// Offset that abbreviation names, `"UTC-05:00"`.
    pub offset_label: String,
    /// Start instant, Unix seconds.
    pub start_unix: i64,
    /// End instant, Unix seconds.
    pub end_unix: i64,
    /// Meeting location attached to the event.
    pub location: Option<String>,
}

impl Scheduler {
    /// Resolves a slot label and timezone abbreviation to UTC instants.
    ///
    /// The abbreviation's zone converts with its real rule for `date`;
    /// picking EST for a July slot books the instant the New York clock
    /// names, not a fixed -05:00 reading. A `"12:00 AM"` end resolves on
    /// the day after `date`.
    pub fn resolve_slot(
        &self,
        date: NaiveDate,
        slot_label: &str,
        timezone_label: &str,
    ) -> ScheduleResult<SlotRange> {
        let zone = self.config().zones.resolve(timezone_label)?;
        let (start_civil, end_civil) = parse_slot_label(slot_label)?;
        let start = zone.civil_to_utc(date, start_civil)?;
        let end_date = if end_is_next_midnight(end_civil) {
            date.succ_opt().ok_or_else(|| InputError::NonexistentLocalTime {
                date,
                time: end_civil,
                zone: zone.zone.name().to_string(),
            })?
        } else {
            date
        };
        let end = zone.civil_to_utc(end_date, end_civil)?;
        Ok(SlotRange { start, end, zone })
    }

    /// Books a slot: resolves the request, picks the first writable
    /// calendar, and creates the event.
    ///
    /// When every calendar is read-only nothing is sent to the backend.
    pub async fn book(&self, request: &MeetingRequest) -> ScheduleResult<CreatedEventSummary> {
        let range =
            self.resolve_slot(request.date, &request.slot_label, &request.timezone_label)?;

        let calendars = self.gateway().list_calendars().await?;
        let target = calendars
            .iter()
            .find(|c| c.writable())
            .ok_or(ScheduleError::NoWritableCalendar)?;

        let title = format!("{} with {}", request.title, request.attendee_name);
        let mut draft = EventDraft::new(
            title.clone(),
            range.start.timestamp(),
            range.end.timestamp(),
            range.zone.zone.name(),
        )
        .with_participant(request.attendee_email.clone());

        if let Some(description) = &request.description {
            draft = draft.with_description(description.clone());
        }
        if let Some(location) = &self.config().location {
            draft = draft.with_location(location.clone());
        }

        let created = self.gateway().create_event(&target.id, draft).await?;
        info!(event_id = %created.id, calendar_id = %target.id, "slot booked");

        let start_local = range.start.with_timezone(&range.zone.zone);
        let end_local = range.end.with_timezone(&range.zone.zone);

        Ok(CreatedEventSummary {
            event_id: created.id,
            calendar_id: target.id.clone(),
            title,
            date: request.date,
            start_display: format_clock(start_local.time()),
            end_display: format_clock(end_local.time()),
            timezone_label: request.timezone_label.clone(),
            offset_label: range.zone.offset_label(),
            start_unix: range.start.timestamp(),
            end_unix: range.end.timestamp(),
            location: self.config().location.clone(),
        })
    }
}
