//! Golden tests for visitor-facing output.
//!
//! Inline insta snapshots pin the exact shapes the page shows: the slot
//! label sequence for a day and the booking confirmation. Run
//! `cargo insta review` after intentional changes.

use std::sync::Arc;

use chrono::NaiveDate;
use insta::assert_json_snapshot;

use coffeechat_providers::{Calendar, EventWhen, ProviderEvent, StaticGateway};

use crate::availability::{CalendarSelection, Scheduler};
use crate::booking::MeetingRequest;
use crate::config::SchedulerConfig;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn timespan(start_time: i64, end_time: i64) -> EventWhen {
    EventWhen::Timespan {
        start_time,
        end_time,
        start_timezone: None,
        end_timezone: None,
    }
}

fn scheduler_with(gateway: StaticGateway, config: SchedulerConfig) -> Scheduler {
    Scheduler::new(Arc::new(gateway), config).unwrap()
}

async fn labels_on(scheduler: &Scheduler, day: NaiveDate) -> Vec<String> {
    scheduler
        .available_slots_as_of(day, &CalendarSelection::All, date(2025, 7, 1))
        .await
        .iter()
        .map(|slot| slot.label())
        .collect()
}

#[tokio::test]
async fn golden_free_day_labels() {
    let gateway = StaticGateway::new().with_calendar(Calendar::new("cal-1", "Work"));
    let scheduler = scheduler_with(gateway, SchedulerConfig::default());

    let labels = labels_on(&scheduler, date(2025, 7, 7)).await;

    assert_json_snapshot!(labels, @r#"
    [
      "09:00 AM - 09:30 AM",
      "09:30 AM - 10:00 AM",
      "10:00 AM - 10:30 AM",
      "10:30 AM - 11:00 AM",
      "11:00 AM - 11:30 AM",
      "11:30 AM - 12:00 PM",
      "12:00 PM - 12:30 PM",
      "12:30 PM - 01:00 PM",
      "01:00 PM - 01:30 PM",
      "01:30 PM - 02:00 PM",
      "02:00 PM - 02:30 PM",
      "02:30 PM - 03:00 PM",
      "03:00 PM - 03:30 PM",
      "03:30 PM - 04:00 PM",
      "04:00 PM - 04:30 PM",
      "04:30 PM - 05:00 PM"
    ]
    "#);
}

#[tokio::test]
async fn golden_busy_midday_labels() {
    // 11:45-12:15 UTC knocks out the two slots it touches.
    let event = ProviderEvent::new("evt-1", timespan(1751888700, 1751890500));
    let gateway = StaticGateway::new()
        .with_calendar(Calendar::new("cal-1", "Work"))
        .with_events("cal-1", vec![event]);
    let scheduler = scheduler_with(gateway, SchedulerConfig::default());

    let labels = labels_on(&scheduler, date(2025, 7, 7)).await;

    assert_json_snapshot!(labels, @r#"
    [
      "09:00 AM - 09:30 AM",
      "09:30 AM - 10:00 AM",
      "10:00 AM - 10:30 AM",
      "10:30 AM - 11:00 AM",
      "11:00 AM - 11:30 AM",
      "12:30 PM - 01:00 PM",
      "01:00 PM - 01:30 PM",
      "01:30 PM - 02:00 PM",
      "02:00 PM - 02:30 PM",
      "02:30 PM - 03:00 PM",
      "03:00 PM - 03:30 PM",
      "03:30 PM - 04:00 PM",
      "04:00 PM - 04:30 PM",
      "04:30 PM - 05:00 PM"
    ]
    "#);
}

#[tokio::test]
async fn golden_booking_confirmation() {
    let gateway = StaticGateway::new().with_calendar(Calendar::new("cal-1", "Work"));
    let config = SchedulerConfig::default().with_location("https://meet.example.com/grace");
    let scheduler = scheduler_with(gateway, config);

    let request = MeetingRequest::new(
        date(2025, 7, 7),
        "09:00 AM - 09:30 AM",
        "EST",
        "ada@example.com",
        "Ada Lovelace",
    );
    let summary = scheduler.book(&request).await.unwrap();

    assert_json_snapshot!(summary, @r#"
    {
      "event_id": "static-1",
      "calendar_id": "cal-1",
      "title": "Coffee Chat with Ada Lovelace",
      "date": "2025-07-07",
      "start_display": "09:00 AM",
      "end_display": "09:30 AM",
      "timezone_label": "EST",
      "offset_label": "UTC-05:00",
      "start_unix": 1751893200,
      "end_unix": 1751895000,
      "location": "https://meet.example.com/grace"
    }
    "#);
}
