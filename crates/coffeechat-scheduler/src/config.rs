//! Scheduler configuration.

use chrono_tz::Tz;

use coffeechat_core::{SlotPolicy, ZoneTable};

use crate::error::{ScheduleError, ScheduleResult};

/// Configuration for the availability engine and booking flow.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Scheduling zone of the page owner.
    ///
    /// Decides what "today" means, where a date's day window falls, and
    /// which civil times the slot grid walks. Visitors convert their own
    /// input through the zone table instead.
    pub timezone: Tz,

    /// Slot length and offered hours.
    pub policy: SlotPolicy,

    /// Timezone abbreviations offered to visitors.
    pub zones: ZoneTable,

    /// Meeting location attached to booked events, usually a conference
    /// URL.
    pub location: Option<String>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            timezone: Tz::UTC,
            policy: SlotPolicy::default(),
            zones: ZoneTable::default(),
            location: None,
        }
    }
}

impl SchedulerConfig {
    /// Creates a configuration with the defaults: UTC scheduling zone,
    /// half-hour slots nine to five, the standard abbreviation menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the scheduling zone.
    #[must_use]
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Builder: set the slot policy.
    #[must_use]
    pub fn with_policy(mut self, policy: SlotPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builder: replace the abbreviation menu.
    #[must_use]
    pub fn with_zones(mut self, zones: ZoneTable) -> Self {
        self.zones = zones;
        self
    }

    /// Builder: set the meeting location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ScheduleResult<()> {
        self.policy.validate()?;
        if self.zones.is_empty() {
            return Err(ScheduleError::configuration(
                "the timezone menu has no entries",
            ));
        }
        Ok(())
    }
}
