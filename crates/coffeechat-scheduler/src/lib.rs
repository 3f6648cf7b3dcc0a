//! Availability engine and booking flow over a calendar gateway

pub mod availability;
pub mod booking;
pub mod config;
pub mod error;

#[cfg(test)]
mod golden_tests;

pub use availability::{CalendarSelection, Scheduler};
pub use booking::{CreatedEventSummary, DEFAULT_TITLE, MeetingRequest, SlotRange};
pub use config::SchedulerConfig;
pub use error::{ScheduleError, ScheduleResult};
