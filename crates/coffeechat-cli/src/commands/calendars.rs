//! Calendar and event listing commands.

use chrono::DateTime;

use coffeechat_providers::{Calendar, CalendarGateway, EventWhen, ProviderEvent};

use crate::error::{CliError, CliResult};

/// List the calendars on the account.
pub async fn list(gateway: &dyn CalendarGateway, json: bool) -> CliResult<()> {
    let calendars = gateway.list_calendars().await?;

    if json {
        println!("{}", to_json(&calendars)?);
        return Ok(());
    }

    if calendars.is_empty() {
        println!("No calendars on this account.");
        return Ok(());
    }
    for calendar in &calendars {
        println!("{}", calendar_line(calendar));
    }
    Ok(())
}

/// List raw events from one calendar.
pub async fn events(gateway: &dyn CalendarGateway, calendar_id: &str, json: bool) -> CliResult<()> {
    let events = gateway.list_events(calendar_id).await?;

    if json {
        println!("{}", to_json(&events)?);
        return Ok(());
    }

    if events.is_empty() {
        println!("No events on calendar {}.", calendar_id);
        return Ok(());
    }
    for event in &events {
        println!("{}", event_line(event));
    }
    Ok(())
}

fn calendar_line(calendar: &Calendar) -> String {
    let mut line = format!("{}  {}", calendar.id, calendar.name);
    if calendar.is_primary {
        line.push_str("  (primary)");
    }
    if calendar.read_only {
        line.push_str("  (read-only)");
    }
    if let Some(ref timezone) = calendar.timezone {
        line.push_str(&format!("  [{}]", timezone));
    }
    line
}

fn event_line(event: &ProviderEvent) -> String {
    let title = event.title.as_deref().unwrap_or("(untitled)");
    let free = if event.busy { "" } else { "  (free)" };
    format!("{}  {}  {}{}", event.id, when_text(&event.when), title, free)
}

fn when_text(when: &EventWhen) -> String {
    match when {
        EventWhen::Timespan {
            start_time,
            end_time,
            ..
        } => match (
            DateTime::from_timestamp(*start_time, 0),
            DateTime::from_timestamp(*end_time, 0),
        ) {
            (Some(start), Some(end)) => format!(
                "{} .. {}",
                start.format("%Y-%m-%d %H:%M UTC"),
                end.format("%Y-%m-%d %H:%M UTC")
            ),
            _ => format!("{} .. {} (out of range)", start_time, end_time),
        },
        EventWhen::Datespan {
            start_date,
            end_date,
        } => format!("{} .. {} (all day)", start_date, end_date),
        EventWhen::Unrecognized(_) => "(unrecognized time shape)".to_string(),
    }
}

pub(crate) fn to_json<T: serde::Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::Config(format!("failed to serialize output: {}", e)))
}
