//! Availability commands: busy spans and open slots.

use chrono::NaiveDate;

use coffeechat_core::{BusyInterval, SlotPolicy, format_clock};
use coffeechat_scheduler::{CalendarSelection, Scheduler};

use crate::error::CliResult;

use super::calendars::to_json;

/// Per-invocation overrides of the configured slot policy.
#[derive(Debug, Default, Clone, Copy)]
pub struct SlotOverrides {
    pub duration: Option<u32>,
    pub start_hour: Option<u32>,
    pub end_hour: Option<u32>,
}

impl SlotOverrides {
    fn is_empty(&self) -> bool {
        self.duration.is_none() && self.start_hour.is_none() && self.end_hour.is_none()
    }

    fn apply(&self, base: SlotPolicy) -> SlotPolicy {
        SlotPolicy::new(
            self.duration.unwrap_or(base.duration_minutes),
            self.start_hour.unwrap_or(base.start_hour),
            self.end_hour.unwrap_or(base.end_hour),
        )
    }
}

/// Show the busy spans of a date, in the owner's scheduling zone.
pub async fn busy(
    scheduler: &Scheduler,
    date: NaiveDate,
    calendar: Option<&str>,
    json: bool,
) -> CliResult<()> {
    let selection = selection(calendar);
    let intervals = scheduler.busy_times(date, &selection).await?;

    if json {
        println!("{}", to_json(&intervals)?);
        return Ok(());
    }

    let timezone = scheduler.config().timezone;
    if intervals.is_empty() {
        println!("No busy spans on {} ({}).", date, timezone);
        return Ok(());
    }
    println!("Busy on {} ({}):", date, timezone);
    for interval in &intervals {
        println!("  {}", interval_line(interval, timezone));
    }
    Ok(())
}

/// Show the open slots of a date.
pub async fn slots(
    scheduler: &Scheduler,
    date: NaiveDate,
    calendar: Option<&str>,
    overrides: SlotOverrides,
    json: bool,
) -> CliResult<()> {
    let selection = selection(calendar);
    let slots = if overrides.is_empty() {
        scheduler.available_slots(date, &selection).await
    } else {
        let policy = overrides.apply(scheduler.config().policy);
        scheduler.available_slots_with(date, &selection, &policy).await?
    };

    if json {
        println!("{}", to_json(&slots)?);
        return Ok(());
    }

    let timezone = scheduler.config().timezone;
    if slots.is_empty() {
        println!("No open slots on {} ({}).", date, timezone);
        return Ok(());
    }
    println!("Open slots on {} ({}):", date, timezone);
    for slot in &slots {
        println!("  {}", slot.label());
    }
    Ok(())
}

fn selection(calendar: Option<&str>) -> CalendarSelection {
    match calendar {
        Some(id) => CalendarSelection::one(id),
        None => CalendarSelection::All,
    }
}

fn interval_line(interval: &BusyInterval, timezone: chrono_tz::Tz) -> String {
    let start = interval.start.with_timezone(&timezone);
    let end = interval.end.with_timezone(&timezone);
    format!("{} - {}", format_clock(start.time()), format_clock(end.time()))
}
