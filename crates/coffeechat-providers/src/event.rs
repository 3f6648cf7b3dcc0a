//! Provider-facing calendar and event data.
//!
//! Events arrive from the provider with one of several `when` shapes. The
//! shape is resolved exactly once, at deserialization, into the
//! [`EventWhen`] union; nothing downstream re-inspects raw JSON for field
//! presence. Shapes the union does not model (single `date`, single `time`,
//! anything newer) are carried as [`EventWhen::Unrecognized`] and never
//! interpreted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A calendar on the grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    /// Provider identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether events can be created here. Absent means writable.
    #[serde(default)]
    pub read_only: bool,
    /// Whether the provider marks this as the grant's primary calendar.
    #[serde(default)]
    pub is_primary: bool,
    /// IANA zone the provider associates with the calendar.
    #[serde(default)]
    pub timezone: Option<String>,
}

impl Calendar {
    /// Creates a calendar with the given id and name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            read_only: false,
            is_primary: false,
            timezone: None,
        }
    }

    /// Builder: mark read-only.
    #[must_use]
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Builder: mark primary.
    #[must_use]
    pub fn with_primary(mut self, is_primary: bool) -> Self {
        self.is_primary = is_primary;
        self
    }

    /// True when events can be created on this calendar.
    pub fn writable(&self) -> bool {
        !self.read_only
    }
}

/// When an event occupies time, resolved from the provider's wire shapes.
///
/// Deserialization tries the timespan shape, then the datespan shape, and
/// otherwise keeps the raw value. An event whose `when` deserialized as
/// `Unrecognized` still lists fine; it just never blocks availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventWhen {
    /// Concrete start and end instants, Unix seconds.
    Timespan {
        start_time: i64,
        end_time: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start_timezone: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        end_timezone: Option<String>,
    },
    /// All-day span of civil dates, no zone metadata. The end date is the
    /// morning the span is over: a one-day event has `end_date` equal to
    /// the day after `start_date`.
    Datespan {
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
    /// Any other shape, kept verbatim.
    Unrecognized(serde_json::Value),
}

impl EventWhen {
    /// Shape name for logs and listings.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timespan { .. } => "timespan",
            Self::Datespan { .. } => "datespan",
            Self::Unrecognized(_) => "unrecognized",
        }
    }
}

fn unrecognized_when() -> EventWhen {
    EventWhen::Unrecognized(serde_json::Value::Null)
}

/// Someone invited to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Invitation address.
    pub email: String,
    /// Display name, when the provider knows one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// RSVP status as reported by the provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Participant {
    /// Creates a participant from an email address.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
            status: None,
        }
    }
}

/// The event's organizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organizer {
    /// Organizer address.
    #[serde(default)]
    pub email: Option<String>,
    /// Organizer display name.
    #[serde(default)]
    pub name: Option<String>,
}

/// One event as the provider reports it. Raw: no filtering or
/// interpretation has happened yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderEvent {
    /// Provider identifier.
    pub id: String,
    /// Calendar the event belongs to.
    #[serde(default)]
    pub calendar_id: String,
    /// Event title.
    #[serde(default)]
    pub title: Option<String>,
    /// Event description.
    #[serde(default)]
    pub description: Option<String>,
    /// Free-form location, often a meeting URL.
    #[serde(default)]
    pub location: Option<String>,
    /// Whether the event blocks time. Providers that omit it mean busy.
    #[serde(default = "default_busy")]
    pub busy: bool,
    /// Provider status string, e.g. `"confirmed"`.
    #[serde(default)]
    pub status: Option<String>,
    /// When the event occupies time.
    #[serde(default = "unrecognized_when")]
    pub when: EventWhen,
    /// Invitees.
    #[serde(default)]
    pub participants: Vec<Participant>,
    /// Organizer, when reported.
    #[serde(default)]
    pub organizer: Option<Organizer>,
}

fn default_busy() -> bool {
    true
}

impl ProviderEvent {
    /// Creates an event with the given id and time shape.
    pub fn new(id: impl Into<String>, when: EventWhen) -> Self {
        Self {
            id: id.into(),
            calendar_id: String::new(),
            title: None,
            description: None,
            location: None,
            busy: true,
            status: None,
            when,
            participants: Vec::new(),
            organizer: None,
        }
    }

    /// Builder: set the owning calendar.
    #[must_use]
    pub fn with_calendar_id(mut self, calendar_id: impl Into<String>) -> Self {
        self.calendar_id = calendar_id.into();
        self
    }

    /// Builder: set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder: set the busy flag.
    #[must_use]
    pub fn with_busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }
}

/// An outbound event, submitted when a visitor books a slot.
///
/// Serializes to the provider's create-event body. Start and end always
/// carry the same zone identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventDraft {
    /// Event title.
    pub title: String,
    /// Event description.
    pub description: String,
    /// Meeting location, usually a conference URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Always a timespan; bookings have concrete instants.
    pub when: EventWhen,
    /// Invitees.
    pub participants: Vec<Participant>,
    /// Booked slots always block time.
    pub busy: bool,
}

impl EventDraft {
    /// Creates a draft spanning `[start_time, end_time)` Unix seconds, with
    /// the same zone identifier on both ends.
    pub fn new(
        title: impl Into<String>,
        start_time: i64,
        end_time: i64,
        timezone: impl Into<String>,
    ) -> Self {
        let zone = timezone.into();
        Self {
            title: title.into(),
            description: String::new(),
            location: None,
            when: EventWhen::Timespan {
                start_time,
                end_time,
                start_timezone: Some(zone.clone()),
                end_timezone: Some(zone),
            },
            participants: Vec::new(),
            busy: true,
        }
    }

    /// Builder: set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder: set the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Builder: add an invitee.
    #[must_use]
    pub fn with_participant(mut self, email: impl Into<String>) -> Self {
        self.participants.push(Participant::new(email));
        self
    }

    /// The draft's start and end instants.
    pub fn span(&self) -> Option<(i64, i64)> {
        match self.when {
            EventWhen::Timespan {
                start_time,
                end_time,
                ..
            } => Some((start_time, end_time)),
            _ => None,
        }
    }

    /// The zone identifier carried on both ends.
    pub fn timezone(&self) -> Option<&str> {
        match &self.when {
            EventWhen::Timespan { start_timezone, .. } => start_timezone.as_deref(),
            _ => None,
        }
    }
}
