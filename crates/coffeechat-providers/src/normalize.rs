//! Raw events to busy intervals.
//!
//! Listing returns whatever the provider reported; this module decides
//! what blocks time on a given day. Free events, unrecognized `when`
//! shapes, and events outside the day drop out here, with a debug trace
//! for anything skipped.

use chrono::{DateTime, Utc};
use tracing::debug;

use coffeechat_core::{BusyInterval, DayWindow, local_midnight};

use crate::event::{EventWhen, ProviderEvent};

/// The portion of `event` that blocks `window`, clipped to the window.
///
/// `None` when the event is free, outside the day, or has a `when` shape
/// that does not resolve to instants. Datespan events begin and end at
/// the window zone's local midnights, the end date exclusive.
pub fn busy_interval_on(event: &ProviderEvent, window: &DayWindow) -> Option<BusyInterval> {
    if !event.busy {
        debug!(event_id = %event.id, "skipping free event");
        return None;
    }

    let (start, end): (DateTime<Utc>, DateTime<Utc>) = match &event.when {
        EventWhen::Timespan {
            start_time,
            end_time,
            ..
        } => {
            let parsed = DateTime::from_timestamp(*start_time, 0)
                .zip(DateTime::from_timestamp(*end_time, 0));
            match parsed {
                Some(span) => span,
                None => {
                    debug!(
                        event_id = %event.id,
                        start_time, end_time,
                        "skipping event with out-of-range timestamps"
                    );
                    return None;
                }
            }
        }
        EventWhen::Datespan {
            start_date,
            end_date,
        } => (
            local_midnight(window.zone, *start_date),
            local_midnight(window.zone, *end_date),
        ),
        EventWhen::Unrecognized(_) => {
            debug!(event_id = %event.id, "skipping event with unrecognized when shape");
            return None;
        }
    };

    if !window.overlaps(start, end) {
        return None;
    }
    BusyInterval::new(start, end).clip(window.start, window.end)
}

/// Busy intervals for every event that blocks `window`, ordered by start.
///
/// One interval per blocking event; overlapping intervals stay separate.
pub fn busy_intervals(events: &[ProviderEvent], window: &DayWindow) -> Vec<BusyInterval> {
    let mut intervals: Vec<BusyInterval> = events
        .iter()
        .filter_map(|event| busy_interval_on(event, window))
        .collect();
    intervals.sort_by_key(|interval| interval.start);
    intervals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use chrono_tz::Tz;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn timespan_event(id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> ProviderEvent {
        ProviderEvent::new(
            id,
            EventWhen::Timespan {
                start_time: start.timestamp(),
                end_time: end.timestamp(),
                start_timezone: None,
                end_timezone: None,
            },
        )
    }

    fn monday_window() -> DayWindow {
        DayWindow::for_date(date(2025, 7, 7), Tz::UTC)
    }

    #[test]
    fn event_inside_the_day_keeps_its_span() {
        let event = timespan_event("evt", utc(2025, 7, 7, 10, 0), utc(2025, 7, 7, 10, 30));
        let interval = busy_interval_on(&event, &monday_window()).unwrap();
        assert_eq!(interval.start, utc(2025, 7, 7, 10, 0));
        assert_eq!(interval.end, utc(2025, 7, 7, 10, 30));
    }

    #[test]
    fn event_straddling_midnight_is_clipped() {
        let event = timespan_event("evt", utc(2025, 7, 6, 22, 0), utc(2025, 7, 7, 2, 0));
        let interval = busy_interval_on(&event, &monday_window()).unwrap();
        assert_eq!(interval.start, utc(2025, 7, 7, 0, 0));
        assert_eq!(interval.end, utc(2025, 7, 7, 2, 0));

        let event = timespan_event("evt", utc(2025, 7, 7, 23, 0), utc(2025, 7, 8, 1, 0));
        let interval = busy_interval_on(&event, &monday_window()).unwrap();
        assert_eq!(interval.end, utc(2025, 7, 8, 0, 0));
    }

    #[test]
    fn event_on_another_day_is_dropped() {
        let event = timespan_event("evt", utc(2025, 7, 8, 10, 0), utc(2025, 7, 8, 11, 0));
        assert_eq!(busy_interval_on(&event, &monday_window()), None);

        // Ending exactly at the day start does not touch the day.
        let event = timespan_event("evt", utc(2025, 7, 6, 23, 0), utc(2025, 7, 7, 0, 0));
        assert_eq!(busy_interval_on(&event, &monday_window()), None);
    }

    #[test]
    fn free_events_do_not_block() {
        let event = timespan_event("evt", utc(2025, 7, 7, 10, 0), utc(2025, 7, 7, 11, 0))
            .with_busy(false);
        assert_eq!(busy_interval_on(&event, &monday_window()), None);
    }

    #[test]
    fn unrecognized_shapes_do_not_block() {
        let event = ProviderEvent::new(
            "evt",
            EventWhen::Unrecognized(serde_json::json!({ "date": "2025-07-07" })),
        );
        assert_eq!(busy_interval_on(&event, &monday_window()), None);
    }

    #[test]
    fn out_of_range_timestamps_are_skipped() {
        let event = ProviderEvent::new(
            "evt",
            EventWhen::Timespan {
                start_time: i64::MAX,
                end_time: i64::MAX,
                start_timezone: None,
                end_timezone: None,
            },
        );
        assert_eq!(busy_interval_on(&event, &monday_window()), None);
    }

    #[test]
    fn datespan_covers_whole_local_days() {
        let event = ProviderEvent::new(
            "evt",
            EventWhen::Datespan {
                start_date: date(2025, 7, 7),
                end_date: date(2025, 7, 8),
            },
        );
        let window = monday_window();
        let interval = busy_interval_on(&event, &window).unwrap();
        assert_eq!(interval.start, window.start);
        assert_eq!(interval.end, window.end);
    }

    #[test]
    fn datespan_end_date_is_exclusive() {
        // The span is over at the morning of end_date; that day stays free.
        let event = ProviderEvent::new(
            "evt",
            EventWhen::Datespan {
                start_date: date(2025, 7, 5),
                end_date: date(2025, 7, 7),
            },
        );
        assert_eq!(busy_interval_on(&event, &monday_window()), None);
    }

    #[test]
    fn datespan_midnights_follow_the_window_zone() {
        let event = ProviderEvent::new(
            "evt",
            EventWhen::Datespan {
                start_date: date(2025, 7, 7),
                end_date: date(2025, 7, 8),
            },
        );
        let window = DayWindow::for_date(date(2025, 7, 7), Tz::America__New_York);
        let interval = busy_interval_on(&event, &window).unwrap();
        assert_eq!(interval.start, utc(2025, 7, 7, 4, 0));
        assert_eq!(interval.end, utc(2025, 7, 8, 4, 0));
    }

    #[test]
    fn intervals_are_sorted_and_never_merged() {
        let events = vec![
            timespan_event("b", utc(2025, 7, 7, 11, 0), utc(2025, 7, 7, 12, 0)),
            timespan_event("a", utc(2025, 7, 7, 9, 0), utc(2025, 7, 7, 10, 0)),
            timespan_event("c", utc(2025, 7, 7, 9, 30), utc(2025, 7, 7, 10, 30)),
            timespan_event("free", utc(2025, 7, 7, 13, 0), utc(2025, 7, 7, 14, 0))
                .with_busy(false),
        ];

        let intervals = busy_intervals(&events, &monday_window());
        assert_eq!(intervals.len(), 3);
        assert_eq!(intervals[0].start, utc(2025, 7, 7, 9, 0));
        assert_eq!(intervals[1].start, utc(2025, 7, 7, 9, 30));
        assert_eq!(intervals[2].start, utc(2025, 7, 7, 11, 0));
        // The first two overlap and are kept as-is.
        assert!(intervals[0].overlaps(intervals[1].start, intervals[1].end));
    }
}
