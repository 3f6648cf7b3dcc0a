//! The 12-hour clock used for slot labels.
//!
//! The booking page shows openings as `"09:00 AM - 09:30 AM"`: zero-padded
//! hour, uppercase meridiem, ends joined by `" - "`. Labels produced here
//! must survive a round trip through [`parse_slot_label`], because the page
//! hands the picked label back verbatim when the visitor books.

use chrono::NaiveTime;

use crate::error::InputError;

/// Strftime pattern for one end of a slot label.
pub const CLOCK_FORMAT: &str = "%I:%M %p";

/// Separator between the two ends of a slot label.
pub const LABEL_SEPARATOR: &str = " - ";

/// Formats a time of day as `"09:00 AM"`.
pub fn format_clock(time: NaiveTime) -> String {
    time.format(CLOCK_FORMAT).to_string()
}

/// Parses `"09:00 AM"` back into a time of day.
pub fn parse_clock(text: &str) -> Result<NaiveTime, InputError> {
    NaiveTime::parse_from_str(text.trim(), CLOCK_FORMAT)
        .map_err(|_| InputError::malformed_slot_label(text))
}

/// Builds the label for a slot from its two ends.
pub fn slot_label(start: NaiveTime, end: NaiveTime) -> String {
    format!(
        "{}{}{}",
        format_clock(start),
        LABEL_SEPARATOR,
        format_clock(end)
    )
}

/// Splits a label such as `"09:00 AM - 09:30 AM"` into its two ends.
///
/// The end must be strictly after the start, with one exception: an end of
/// `"12:00 AM"` names the following midnight, so labels from grids that
/// run to the end of the day stay parseable. Any other deviation reports
/// the whole label as malformed.
pub fn parse_slot_label(label: &str) -> Result<(NaiveTime, NaiveTime), InputError> {
    let (left, right) = label
        .split_once(LABEL_SEPARATOR)
        .ok_or_else(|| InputError::malformed_slot_label(label))?;
    let start = NaiveTime::parse_from_str(left.trim(), CLOCK_FORMAT)
        .map_err(|_| InputError::malformed_slot_label(label))?;
    let end = NaiveTime::parse_from_str(right.trim(), CLOCK_FORMAT)
        .map_err(|_| InputError::malformed_slot_label(label))?;
    if end <= start && !end_is_next_midnight(end) {
        return Err(InputError::malformed_slot_label(label));
    }
    Ok((start, end))
}

/// True when a parsed slot end names the following midnight.
///
/// [`parse_slot_label`] reports a `"12:00 AM"` end as [`NaiveTime::MIN`];
/// callers turning the pair into instants must place such an end on the
/// next calendar date.
pub fn end_is_next_midnight(end: NaiveTime) -> bool {
    end == NaiveTime::MIN
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn formats_with_zero_padded_hour() {
        assert_eq!(format_clock(time(9, 0)), "09:00 AM");
        assert_eq!(format_clock(time(13, 30)), "01:30 PM");
        assert_eq!(format_clock(time(0, 0)), "12:00 AM");
        assert_eq!(format_clock(time(12, 0)), "12:00 PM");
    }

    #[test]
    fn parses_what_it_formats() {
        for (h, m) in [(9, 0), (0, 0), (12, 0), (16, 30), (23, 30)] {
            let t = time(h, m);
            assert_eq!(parse_clock(&format_clock(t)).unwrap(), t);
        }
    }

    #[test]
    fn label_round_trips() {
        let label = slot_label(time(9, 0), time(9, 30));
        assert_eq!(label, "09:00 AM - 09:30 AM");
        assert_eq!(parse_slot_label(&label).unwrap(), (time(9, 0), time(9, 30)));
    }

    #[test]
    fn afternoon_label_round_trips() {
        let label = slot_label(time(16, 30), time(17, 0));
        assert_eq!(label, "04:30 PM - 05:00 PM");
        assert_eq!(
            parse_slot_label(&label).unwrap(),
            (time(16, 30), time(17, 0))
        );
    }

    #[test]
    fn rejects_missing_separator() {
        let err = parse_slot_label("9:00AM-9:30AM").unwrap_err();
        assert_eq!(
            err,
            InputError::MalformedSlotLabel {
                label: "9:00AM-9:30AM".to_string()
            }
        );
    }

    #[test]
    fn rejects_unparseable_ends() {
        assert!(parse_slot_label("nine - half past nine").is_err());
        assert!(parse_slot_label("09:00 AM - ").is_err());
        assert!(parse_slot_label(" - 09:30 AM").is_err());
        assert!(parse_slot_label("").is_err());
    }

    #[test]
    fn rejects_inverted_or_empty_ranges() {
        assert!(parse_slot_label("09:30 AM - 09:00 AM").is_err());
        assert!(parse_slot_label("09:00 AM - 09:00 AM").is_err());
        assert!(parse_slot_label("11:30 PM - 11:00 PM").is_err());
    }

    #[test]
    fn midnight_end_reads_as_day_end() {
        let label = slot_label(time(23, 0), time(0, 0));
        assert_eq!(label, "11:00 PM - 12:00 AM");

        let (start, end) = parse_slot_label(&label).unwrap();
        assert_eq!(start, time(23, 0));
        assert!(end_is_next_midnight(end));

        // A grid of one full-day slot labels both ends midnight.
        assert!(parse_slot_label("12:00 AM - 12:00 AM").is_ok());
    }

    #[test]
    fn tolerates_stray_whitespace_around_ends() {
        assert_eq!(
            parse_slot_label("09:00 AM -  09:30 AM").unwrap(),
            (time(9, 0), time(9, 30))
        );
    }
}
