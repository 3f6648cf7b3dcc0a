//! Availability slots and the policy that generates them.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::{LABEL_SEPARATOR, format_clock};
use crate::error::InputError;
use crate::interval::BusyInterval;
use crate::zones::civil_instant;

/// A bookable opening shown to visitors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableSlot {
    /// Absolute start instant.
    pub start: DateTime<Utc>,
    /// Absolute end instant.
    pub end: DateTime<Utc>,
    /// Civil start in the scheduling zone, `"09:00 AM"`.
    pub display_start: String,
    /// Civil end in the scheduling zone, `"09:30 AM"`.
    pub display_end: String,
}

impl AvailableSlot {
    /// The menu label, `"09:00 AM - 09:30 AM"`.
    ///
    /// Round-trips through [`crate::clock::parse_slot_label`].
    pub fn label(&self) -> String {
        format!(
            "{}{}{}",
            self.display_start, LABEL_SEPARATOR, self.display_end
        )
    }
}

/// How long a slot lasts and which hours of the day are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotPolicy {
    /// Length of each slot in minutes.
    pub duration_minutes: u32,
    /// First offered hour, 24-hour clock.
    pub start_hour: u32,
    /// Hour the grid stops at; no slot may end past it.
    pub end_hour: u32,
}

impl Default for SlotPolicy {
    /// Half-hour slots across a nine-to-five day.
    fn default() -> Self {
        Self {
            duration_minutes: 30,
            start_hour: 9,
            end_hour: 17,
        }
    }
}

impl SlotPolicy {
    /// Creates a policy.
    pub fn new(duration_minutes: u32, start_hour: u32, end_hour: u32) -> Self {
        Self {
            duration_minutes,
            start_hour,
            end_hour,
        }
    }

    /// Builder: set the slot length in minutes.
    #[must_use]
    pub fn with_duration_minutes(mut self, minutes: u32) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Builder: set the offered hour range, 24-hour clock.
    #[must_use]
    pub fn with_hours(mut self, start_hour: u32, end_hour: u32) -> Self {
        self.start_hour = start_hour;
        self.end_hour = end_hour;
        self
    }

    /// Rejects zero durations and unusable hour ranges.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.duration_minutes == 0 {
            return Err(InputError::InvalidPolicy {
                reason: "slot duration must be at least one minute".to_string(),
            });
        }
        if self.end_hour > 24 {
            return Err(InputError::InvalidPolicy {
                reason: format!("end hour {} is past midnight", self.end_hour),
            });
        }
        if self.start_hour >= self.end_hour {
            return Err(InputError::InvalidPolicy {
                reason: format!(
                    "start hour {} is not before end hour {}",
                    self.start_hour, self.end_hour
                ),
            });
        }
        Ok(())
    }
}

/// Date-level gate: the page only offers current-or-future weekdays.
pub fn is_bookable_date(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today && !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Walks the day's candidate grid and keeps slots free of every busy
/// interval.
///
/// Candidates are civil times in `zone` stepped by the policy's duration;
/// one is emitted only when its end still fits the policy's hour range and
/// it overlaps no entry of `busy`. Boundary contact with a busy interval
/// does not block a slot. Candidates whose civil start or end the zone's
/// clock skips (spring-forward gap) are dropped.
pub fn slot_grid(
    date: NaiveDate,
    zone: Tz,
    policy: &SlotPolicy,
    busy: &[BusyInterval],
) -> Vec<AvailableSlot> {
    let step = Duration::minutes(i64::from(policy.duration_minutes));
    let Some(first) = grid_bound(date, policy.start_hour) else {
        return Vec::new();
    };
    let Some(last) = grid_bound(date, policy.end_hour) else {
        return Vec::new();
    };

    let mut slots = Vec::new();
    let mut cursor = first;
    while cursor + step <= last {
        let slot_end = cursor + step;
        match (civil_instant(zone, cursor), civil_instant(zone, slot_end)) {
            (Some(start), Some(end)) => {
                if !busy.iter().any(|b| b.overlaps(start, end)) {
                    slots.push(AvailableSlot {
                        start,
                        end,
                        display_start: format_clock(cursor.time()),
                        display_end: format_clock(slot_end.time()),
                    });
                }
            }
            _ => debug!(candidate = %cursor, zone = %zone, "slot skipped by the zone's clock"),
        }
        cursor = slot_end;
    }
    slots
}

fn grid_bound(date: NaiveDate, hour: u32) -> Option<NaiveDateTime> {
    if hour == 24 {
        date.succ_opt()?.and_hms_opt(0, 0, 0)
    } else {
        date.and_hms_opt(hour, 0, 0)
    }
}
