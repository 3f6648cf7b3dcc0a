//! Busy intervals and day windows.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::zones::civil_instant;

/// A half-open `[start, end)` span during which the owner is unavailable.
///
/// Intervals are produced one per calendar event and clipped to the day they
/// were computed for. Overlapping intervals are kept unmerged; the slot
/// overlap test does not need merging and the unmerged list keeps one
/// interval per event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyInterval {
    /// Start of the interval (inclusive).
    pub start: DateTime<Utc>,
    /// End of the interval (exclusive).
    pub end: DateTime<Utc>,
}

impl BusyInterval {
    /// Creates a busy interval.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// True when the interval intersects the candidate span `[s, e)`.
    ///
    /// Boundary contact is not overlap: a slot ending exactly at
    /// `self.start`, or starting exactly at `self.end`, stays free.
    pub fn overlaps(&self, s: DateTime<Utc>, e: DateTime<Utc>) -> bool {
        self.start < e && s < self.end
    }

    /// Clips the interval to `[lo, hi)`; `None` when nothing remains.
    pub fn clip(&self, lo: DateTime<Utc>, hi: DateTime<Utc>) -> Option<Self> {
        let start = self.start.max(lo);
        let end = self.end.min(hi);
        (start < end).then_some(Self { start, end })
    }
}

/// The UTC bounds of one calendar date in a scheduling zone.
///
/// Half-open `[start, end)`: local midnight up to the next local midnight.
/// On daylight-saving transition days the window is 23 or 25 hours long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    /// The calendar date the window covers.
    pub date: NaiveDate,
    /// Zone whose midnights bound the window.
    pub zone: Tz,
    /// First instant of the date (inclusive).
    pub start: DateTime<Utc>,
    /// First instant of the next date (exclusive).
    pub end: DateTime<Utc>,
}

impl DayWindow {
    /// Builds the window for `date` in `zone`.
    pub fn for_date(date: NaiveDate, zone: Tz) -> Self {
        let start = local_midnight(zone, date);
        let end = local_midnight(zone, date.succ_opt().expect("valid successor date"));
        Self {
            date,
            zone,
            start,
            end,
        }
    }

    /// True when the span `[s, e)` touches the window.
    pub fn overlaps(&self, s: DateTime<Utc>, e: DateTime<Utc>) -> bool {
        s < self.end && e > self.start
    }
}

/// The instant a calendar date begins in a zone.
///
/// A few zones skip midnight on spring-forward days; the day then begins at
/// the first wall-clock time that exists, probed in half-hour steps.
pub fn local_midnight(zone: Tz, date: NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_hms_opt(0, 0, 0).expect("valid time");
    for half_hour in 0..8 {
        if let Some(instant) = civil_instant(zone, midnight + Duration::minutes(30 * half_hour)) {
            return instant;
        }
    }
    // Transition gaps top out around two hours; past the probe range, read
    // the naive time as UTC.
    midnight.and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn overlap_is_exclusive_at_the_boundaries() {
        let busy = BusyInterval::new(utc(2025, 7, 7, 10, 0), utc(2025, 7, 7, 10, 30));

        assert!(busy.overlaps(utc(2025, 7, 7, 10, 0), utc(2025, 7, 7, 10, 30)));
        assert!(busy.overlaps(utc(2025, 7, 7, 9, 45), utc(2025, 7, 7, 10, 15)));
        assert!(busy.overlaps(utc(2025, 7, 7, 10, 15), utc(2025, 7, 7, 10, 45)));

        // Touching either edge leaves the candidate free.
        assert!(!busy.overlaps(utc(2025, 7, 7, 9, 30), utc(2025, 7, 7, 10, 0)));
        assert!(!busy.overlaps(utc(2025, 7, 7, 10, 30), utc(2025, 7, 7, 11, 0)));
    }

    #[test]
    fn clip_trims_to_the_bounds() {
        let busy = BusyInterval::new(utc(2025, 7, 6, 22, 0), utc(2025, 7, 7, 2, 0));
        let clipped = busy.clip(utc(2025, 7, 7, 0, 0), utc(2025, 7, 8, 0, 0)).unwrap();
        assert_eq!(clipped.start, utc(2025, 7, 7, 0, 0));
        assert_eq!(clipped.end, utc(2025, 7, 7, 2, 0));
    }

    #[test]
    fn clip_drops_disjoint_and_degenerate_results() {
        let busy = BusyInterval::new(utc(2025, 7, 6, 22, 0), utc(2025, 7, 7, 0, 0));
        assert_eq!(busy.clip(utc(2025, 7, 7, 0, 0), utc(2025, 7, 8, 0, 0)), None);

        let inside = BusyInterval::new(utc(2025, 7, 7, 10, 0), utc(2025, 7, 7, 10, 30));
        assert_eq!(
            inside.clip(utc(2025, 7, 7, 0, 0), utc(2025, 7, 8, 0, 0)),
            Some(inside)
        );
    }

    #[test]
    fn day_window_in_utc_is_exactly_one_day() {
        let window = DayWindow::for_date(date(2025, 7, 7), Tz::UTC);
        assert_eq!(window.start, utc(2025, 7, 7, 0, 0));
        assert_eq!(window.end, utc(2025, 7, 8, 0, 0));
    }

    #[test]
    fn day_window_follows_the_zone_offset() {
        let window = DayWindow::for_date(date(2025, 7, 7), Tz::America__New_York);
        assert_eq!(window.start, utc(2025, 7, 7, 4, 0));
        assert_eq!(window.end, utc(2025, 7, 8, 4, 0));
    }

    #[test]
    fn transition_days_are_short_or_long() {
        let spring = DayWindow::for_date(date(2025, 3, 9), Tz::America__New_York);
        assert_eq!(spring.end - spring.start, Duration::hours(23));

        let fall = DayWindow::for_date(date(2025, 11, 2), Tz::America__New_York);
        assert_eq!(fall.end - fall.start, Duration::hours(25));
    }

    #[test]
    fn window_overlap_uses_half_open_bounds() {
        let window = DayWindow::for_date(date(2025, 7, 7), Tz::UTC);

        assert!(window.overlaps(utc(2025, 7, 6, 23, 0), utc(2025, 7, 7, 1, 0)));
        assert!(window.overlaps(utc(2025, 7, 7, 23, 0), utc(2025, 7, 8, 1, 0)));

        // Ending exactly at the window start, or starting at its end, misses.
        assert!(!window.overlaps(utc(2025, 7, 6, 23, 0), utc(2025, 7, 7, 0, 0)));
        assert!(!window.overlaps(utc(2025, 7, 8, 0, 0), utc(2025, 7, 8, 1, 0)));
    }

    #[test]
    fn skipped_midnight_starts_the_day_at_the_first_existing_time() {
        // Santiago springs forward at midnight; 2024-09-08 begins at 01:00.
        let begin = local_midnight(Tz::America__Santiago, date(2024, 9, 8));
        let expected = Tz::America__Santiago
            .with_ymd_and_hms(2024, 9, 8, 1, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(begin, expected);
    }
}
