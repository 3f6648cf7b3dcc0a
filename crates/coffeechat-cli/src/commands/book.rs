//! The booking command.

use chrono::NaiveDate;

use coffeechat_scheduler::{MeetingRequest, Scheduler};

use crate::error::CliResult;

use super::calendars::to_json;

/// Arguments of a booking, straight from the command line.
pub struct BookArgs {
    pub date: NaiveDate,
    pub slot: String,
    pub timezone: String,
    pub email: String,
    pub name: String,
    pub title: String,
    pub description: Option<String>,
}

/// Book a slot and print the confirmation.
pub async fn run(scheduler: &Scheduler, args: BookArgs, json: bool) -> CliResult<()> {
    let mut request = MeetingRequest::new(
        args.date,
        args.slot,
        args.timezone,
        args.email,
        args.name,
    )
    .with_title(args.title);
    if let Some(description) = args.description {
        request = request.with_description(description);
    }

    let summary = scheduler.book(&request).await?;

    if json {
        println!("{}", to_json(&summary)?);
        return Ok(());
    }

    println!("Booked: {}", summary.title);
    println!(
        "  {} {} - {} {} ({})",
        summary.date,
        summary.start_display,
        summary.end_display,
        summary.timezone_label,
        summary.offset_label
    );
    if let Some(ref location) = summary.location {
        println!("  {}", location);
    }
    println!("  event {} on calendar {}", summary.event_id, summary.calendar_id);
    Ok(())
}
