//! Timezone abbreviation resolution.
//!
//! Visitors pick their timezone from a fixed menu of abbreviations. Each
//! abbreviation resolves to a [`ZoneEntry`]: the IANA zone that governs the
//! actual civil-to-UTC conversion (with that date's standard or daylight
//! rule) plus the nominal fixed offset the abbreviation itself names, which
//! is what confirmations display. EST and EDT both convert through
//! America/New_York; their nominal labels differ.
//!
//! The table is plain configuration handed to the engine, not a process
//! global. Deployments can extend or replace it.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::InputError;

/// Resolution target for one timezone abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneEntry {
    /// IANA zone used for civil-to-UTC conversion.
    pub zone: Tz,
    /// Fixed offset the abbreviation names, e.g. EST names UTC-05:00.
    pub nominal_offset: FixedOffset,
}

impl ZoneEntry {
    /// Creates an entry from a zone and the abbreviation's nominal offset.
    pub fn new(zone: Tz, nominal_offset: FixedOffset) -> Self {
        Self {
            zone,
            nominal_offset,
        }
    }

    /// The offset label shown to visitors, `"UTC-05:00"` style.
    pub fn offset_label(&self) -> String {
        format!("UTC{}", self.nominal_offset)
    }

    /// Interprets a calendar date and wall-clock time in this entry's zone
    /// and converts to UTC.
    ///
    /// The zone's real rules for that date decide the offset; the nominal
    /// offset plays no part here. Ambiguous times (clocks rolled back) take
    /// the earlier instant; times the clock skips are rejected.
    pub fn civil_to_utc(
        &self,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<DateTime<Utc>, InputError> {
        civil_instant(self.zone, date.and_time(time)).ok_or_else(|| {
            InputError::NonexistentLocalTime {
                date,
                time,
                zone: self.zone.name().to_string(),
            }
        })
    }
}

/// Resolves a civil datetime in a zone to a UTC instant.
///
/// Ambiguous readings take the earlier instant. Returns `None` when the
/// zone's clock skips the time entirely (spring-forward gap).
pub fn civil_instant(zone: Tz, civil: NaiveDateTime) -> Option<DateTime<Utc>> {
    match zone.from_local_datetime(&civil) {
        LocalResult::Single(instant) => Some(instant.with_timezone(&Utc)),
        LocalResult::Ambiguous(earlier, _) => Some(earlier.with_timezone(&Utc)),
        LocalResult::None => None,
    }
}

/// Abbreviation table handed to the availability engine as configuration.
#[derive(Debug, Clone)]
pub struct ZoneTable {
    entries: BTreeMap<String, ZoneEntry>,
}

impl ZoneTable {
    /// Empty table; callers add their own labels.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Builder: adds or replaces a label.
    pub fn with_entry(mut self, label: impl Into<String>, entry: ZoneEntry) -> Self {
        self.entries.insert(label.into(), entry);
        self
    }

    /// Looks a label up, exact match.
    pub fn resolve(&self, label: &str) -> Result<ZoneEntry, InputError> {
        self.entries
            .get(label)
            .copied()
            .ok_or_else(|| InputError::unknown_timezone(label))
    }

    /// All labels in the menu, sorted.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of labels in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no labels at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ZoneTable {
    /// The standard menu: common abbreviations for North America, Europe,
    /// Africa, and Asia/Pacific. `CST_CHINA` disambiguates from US Central.
    fn default() -> Self {
        let entries: &[(&str, Tz, i32)] = &[
            // North America
            ("MST", Tz::America__Denver, -7 * 60),
            ("MDT", Tz::America__Denver, -6 * 60),
            ("EST", Tz::America__New_York, -5 * 60),
            ("EDT", Tz::America__New_York, -4 * 60),
            ("CST", Tz::America__Chicago, -6 * 60),
            ("CDT", Tz::America__Chicago, -5 * 60),
            ("PST", Tz::America__Los_Angeles, -8 * 60),
            ("PDT", Tz::America__Los_Angeles, -7 * 60),
            ("AKST", Tz::America__Anchorage, -9 * 60),
            ("AKDT", Tz::America__Anchorage, -8 * 60),
            ("HST", Tz::Pacific__Honolulu, -10 * 60),
            // Europe
            ("GMT", Tz::GMT, 0),
            ("UTC", Tz::UTC, 0),
            ("WET", Tz::Europe__London, 0),
            ("WEST", Tz::Europe__London, 60),
            ("BST", Tz::Europe__London, 60),
            ("CET", Tz::Europe__Paris, 60),
            ("CEST", Tz::Europe__Paris, 2 * 60),
            ("EET", Tz::Europe__Athens, 2 * 60),
            ("EEST", Tz::Europe__Athens, 3 * 60),
            // Asia/Pacific
            ("IST", Tz::Asia__Kolkata, 5 * 60 + 30),
            ("JST", Tz::Asia__Tokyo, 9 * 60),
            ("CST_CHINA", Tz::Asia__Shanghai, 8 * 60),
            ("HKT", Tz::Asia__Hong_Kong, 8 * 60),
            ("SGT", Tz::Asia__Singapore, 8 * 60),
            ("AEST", Tz::Australia__Sydney, 10 * 60),
            ("AEDT", Tz::Australia__Sydney, 11 * 60),
            ("AWST", Tz::Australia__Perth, 8 * 60),
            ("NZST", Tz::Pacific__Auckland, 12 * 60),
            ("NZDT", Tz::Pacific__Auckland, 13 * 60),
            // Africa
            ("WAT", Tz::Africa__Lagos, 60),
            ("CAT", Tz::Africa__Maputo, 2 * 60),
            ("EAT", Tz::Africa__Nairobi, 3 * 60),
        ];

        let mut table = Self::empty();
        for &(label, zone, minutes) in entries {
            table = table.with_entry(label, ZoneEntry::new(zone, nominal(minutes)));
        }
        table
    }
}

fn nominal(minutes: i32) -> FixedOffset {
    FixedOffset::east_opt(minutes * 60).expect("offset within range")
}
