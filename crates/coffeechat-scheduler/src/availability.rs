//! The availability engine.
//!
//! Computes, for one calendar date, the spans that are taken and the slots
//! still open. Errors split by surface: [`Scheduler::busy_times`] reports
//! backend failures to the owner, while [`Scheduler::available_slots`] is
//! visitor-facing and degrades to an empty day.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, warn};

use coffeechat_core::{
    AvailableSlot, BusyInterval, DayWindow, SlotPolicy, is_bookable_date, slot_grid,
};
use coffeechat_providers::{CalendarGateway, ProviderEvent, busy_intervals};

use crate::config::SchedulerConfig;
use crate::error::ScheduleResult;

/// Which calendars feed an availability computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarSelection {
    /// Every calendar on the account.
    All,
    /// One calendar by id.
    One(String),
}

impl CalendarSelection {
    /// Selects a single calendar.
    pub fn one(calendar_id: impl Into<String>) -> Self {
        Self::One(calendar_id.into())
    }
}

/// Availability engine over a calendar gateway.
pub struct Scheduler {
    gateway: Arc<dyn CalendarGateway>,
    config: SchedulerConfig,
}

impl Scheduler {
    /// Creates a scheduler after validating the configuration.
    pub fn new(gateway: Arc<dyn CalendarGateway>, config: SchedulerConfig) -> ScheduleResult<Self> {
        config.validate()?;
        Ok(Self { gateway, config })
    }

    /// The active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub(crate) fn gateway(&self) -> &dyn CalendarGateway {
        self.gateway.as_ref()
    }

    /// The spans of `date` that are taken, in the scheduling zone's day
    /// window, sorted by start and never merged.
    ///
    /// Unlike slot listing this is an owner-facing view: backend failures
    /// propagate instead of degrading.
    pub async fn busy_times(
        &self,
        date: NaiveDate,
        selection: &CalendarSelection,
    ) -> ScheduleResult<Vec<BusyInterval>> {
        let window = DayWindow::for_date(date, self.config.timezone);
        let events = self.fetch_events(selection).await?;
        Ok(busy_intervals(&events, &window))
    }

    /// The slots of `date` still open for booking.
    ///
    /// Empty for past dates, weekends, fully booked days, and whenever the
    /// backend fails; a visitor sees no availability rather than an error.
    pub async fn available_slots(
        &self,
        date: NaiveDate,
        selection: &CalendarSelection,
    ) -> Vec<AvailableSlot> {
        self.available_slots_as_of(date, selection, self.today()).await
    }

    /// [`Scheduler::available_slots`] under a one-off policy override.
    ///
    /// The override is validated like the configured policy; an unusable
    /// one surfaces as an input error rather than a silently empty day.
    /// Backend failures still degrade to no slots.
    pub async fn available_slots_with(
        &self,
        date: NaiveDate,
        selection: &CalendarSelection,
        policy: &SlotPolicy,
    ) -> ScheduleResult<Vec<AvailableSlot>> {
        policy.validate()?;
        Ok(self.grid_as_of(date, selection, self.today(), policy).await)
    }

    /// [`Scheduler::available_slots`] as seen from an explicit `today`.
    pub async fn available_slots_as_of(
        &self,
        date: NaiveDate,
        selection: &CalendarSelection,
        today: NaiveDate,
    ) -> Vec<AvailableSlot> {
        self.grid_as_of(date, selection, today, &self.config.policy)
            .await
    }

    async fn grid_as_of(
        &self,
        date: NaiveDate,
        selection: &CalendarSelection,
        today: NaiveDate,
        policy: &SlotPolicy,
    ) -> Vec<AvailableSlot> {
        if !is_bookable_date(date, today) {
            debug!(%date, %today, "date is not bookable");
            return Vec::new();
        }

        let busy = match self.busy_times(date, selection).await {
            Ok(busy) => busy,
            Err(e) => {
                warn!(error = %e, %date, "availability fetch failed, showing no slots");
                return Vec::new();
            }
        };

        slot_grid(date, self.config.timezone, policy, &busy)
    }

    /// Today's date on the scheduling zone's calendar.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.config.timezone).date_naive()
    }

    async fn fetch_events(
        &self,
        selection: &CalendarSelection,
    ) -> ScheduleResult<Vec<ProviderEvent>> {
        match selection {
            CalendarSelection::One(calendar_id) => {
                Ok(self.gateway.list_events(calendar_id).await?)
            }
            CalendarSelection::All => {
                let calendars = self.gateway.list_calendars().await?;
                let mut events = Vec::new();
                for calendar in &calendars {
                    events.extend(self.gateway.list_events(&calendar.id).await?);
                }
                Ok(events)
            }
        }
    }
}
