//! Command-line interface definition.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// coffeechat - availability and booking for your scheduling page
#[derive(Debug, Parser)]
#[command(name = "coffeechat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "COFFEECHAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Nylas API key
    #[arg(long, env = "NYLAS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Nylas grant id of the connected calendar account
    #[arg(long, env = "NYLAS_GRANT_ID")]
    pub grant_id: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the calendars on the account
    Calendars,

    /// List raw events from one calendar
    Events {
        /// Calendar id to list from
        #[arg(long)]
        calendar: String,
    },

    /// Show the busy spans of a date
    Busy {
        /// Date to inspect, e.g. 2025-07-07
        #[arg(long)]
        date: NaiveDate,

        /// Restrict to one calendar id (default: all calendars)
        #[arg(long)]
        calendar: Option<String>,
    },

    /// Show the open slots of a date
    Slots {
        /// Date to offer, e.g. 2025-07-07
        #[arg(long)]
        date: NaiveDate,

        /// Restrict to one calendar id (default: all calendars)
        #[arg(long)]
        calendar: Option<String>,

        /// Slot length in minutes (default: from configuration)
        #[arg(long)]
        duration: Option<u32>,

        /// First offered hour, 24-hour clock
        #[arg(long)]
        start_hour: Option<u32>,

        /// Hour the offered window closes, 24-hour clock
        #[arg(long)]
        end_hour: Option<u32>,
    },

    /// Book a slot and invite an attendee
    Book {
        /// Date of the slot, e.g. 2025-07-07
        #[arg(long)]
        date: NaiveDate,

        /// Slot label as listed, e.g. "09:00 AM - 09:30 AM"
        #[arg(long)]
        slot: String,

        /// Attendee timezone abbreviation, e.g. EST
        #[arg(long, short = 't')]
        timezone: String,

        /// Attendee email, invited to the event
        #[arg(long, short = 'e')]
        email: String,

        /// Attendee name, woven into the event title
        #[arg(long, short = 'n')]
        name: String,

        /// Base event title
        #[arg(long, default_value = coffeechat_scheduler::DEFAULT_TITLE)]
        title: String,

        /// Free-form note copied into the event body
        #[arg(long)]
        description: Option<String>,
    },

    /// Show the timezone menu offered to visitors
    Zones,

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slots_with_overrides() {
        let cli = Cli::parse_from([
            "coffeechat",
            "slots",
            "--date",
            "2025-07-07",
            "--duration",
            "45",
        ]);
        match cli.command {
            Command::Slots {
                date,
                duration,
                start_hour,
                ..
            } => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2025, 7, 7).unwrap());
                assert_eq!(duration, Some(45));
                assert_eq!(start_hour, None);
            }
            _ => panic!("wrong command"),
        }
    }

    #[test]
    fn parses_book_with_short_flags() {
        let cli = Cli::parse_from([
            "coffeechat",
            "book",
            "--date",
            "2025-07-07",
            "--slot",
            "09:00 AM - 09:30 AM",
            "-t",
            "EST",
            "-e",
            "ada@example.com",
            "-n",
            "Ada Lovelace",
        ]);
        match cli.command {
            Command::Book {
                slot,
                timezone,
                title,
                description,
                ..
            } => {
                assert_eq!(slot, "09:00 AM - 09:30 AM");
                assert_eq!(timezone, "EST");
                assert_eq!(title, coffeechat_scheduler::DEFAULT_TITLE);
                assert_eq!(description, None);
            }
            _ => panic!("wrong command"),
        }
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
