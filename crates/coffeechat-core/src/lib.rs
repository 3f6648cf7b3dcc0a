//! Core scheduling types: intervals, slots, clock labels, timezones

pub mod clock;
pub mod error;
pub mod interval;
pub mod slot;
pub mod tracing;
pub mod zones;

pub use clock::{
    CLOCK_FORMAT, LABEL_SEPARATOR, end_is_next_midnight, format_clock, parse_clock,
    parse_slot_label, slot_label,
};
pub use error::InputError;
pub use interval::{BusyInterval, DayWindow, local_midnight};
pub use slot::{AvailableSlot, SlotPolicy, is_bookable_date, slot_grid};
pub use tracing::{LOG_ENV, TracingConfig, TracingError, TracingOutputFormat, init_tracing};
pub use zones::{ZoneEntry, ZoneTable, civil_instant};
