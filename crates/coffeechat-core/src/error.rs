//! Input validation errors.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// Errors produced while validating booking-page input.
///
/// Everything here is a caller mistake: a label the page never generated,
/// an abbreviation missing from the configured table, a civil time the
/// target zone's clock skips. Provider failures live elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Slot label was not of the form `"09:00 AM - 09:30 AM"`.
    #[error("malformed slot label {label:?}, expected \"HH:MM AM - HH:MM PM\"")]
    MalformedSlotLabel {
        /// The label as received.
        label: String,
    },

    /// Timezone abbreviation not present in the configured zone table.
    #[error("unknown timezone abbreviation {label:?}")]
    UnknownTimezone {
        /// The abbreviation as received.
        label: String,
    },

    /// Civil time skipped by a daylight-saving transition in the target zone.
    #[error("{time} on {date} does not exist on the {zone} clock")]
    NonexistentLocalTime {
        /// Requested calendar date.
        date: NaiveDate,
        /// Requested wall-clock time.
        time: NaiveTime,
        /// IANA zone identifier.
        zone: String,
    },

    /// Slot policy with a zero duration or an unusable hour range.
    #[error("invalid slot policy: {reason}")]
    InvalidPolicy {
        /// What made the policy unusable.
        reason: String,
    },
}

impl InputError {
    /// Convenience constructor for [`InputError::MalformedSlotLabel`].
    pub fn malformed_slot_label(label: impl Into<String>) -> Self {
        Self::MalformedSlotLabel {
            label: label.into(),
        }
    }

    /// Convenience constructor for [`InputError::UnknownTimezone`].
    pub fn unknown_timezone(label: impl Into<String>) -> Self {
        Self::UnknownTimezone {
            label: label.into(),
        }
    }
}
