//! Availability time-range normalization
//!
//! Raw cells look like "4 PM – 9 AM", "All day", "All day (rain only)" or
//! "NA". Output is a 24-hour "HHMM-HHMM" window, "*" for all-day
//! availability, or "" when the month carries no window at all.

use once_cell::sync::Lazy;
use regex::Regex;

use super::text::clean;

static TIME_RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})(AM|PM)-(\d{1,2})(AM|PM)").expect("invalid time range pattern"));

/// Error when a cell matches none of the recognized time-range shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeRangeError {
    /// Not "All day", not "NA", not a 12-hour range
    Unrecognized(String),
}

impl std::fmt::Display for TimeRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeRangeError::Unrecognized(raw) => {
                write!(f, "unrecognized time range: '{}'", raw)
            }
        }
    }
}

impl std::error::Error for TimeRangeError {}

/// Normalize a raw availability cell to its canonical form
///
/// - "All day" (any suffix) -> "*"
/// - "NA" (any suffix) -> ""
/// - empty / whitespace-only -> ""
/// - "4PM-9AM" style ranges -> "1600-0900"
pub fn process_time(raw: &str) -> Result<String, TimeRangeError> {
    if raw.starts_with("All day") {
        return Ok("*".to_string());
    }
    if raw.starts_with("NA") {
        return Ok(String::new());
    }

    let compact = clean(raw);
    if compact.is_empty() {
        return Ok(String::new());
    }

    let caps = TIME_RANGE_RE
        .captures(&compact)
        .ok_or_else(|| TimeRangeError::Unrecognized(raw.to_string()))?;

    let start_hour: u32 = caps[1]
        .parse()
        .map_err(|_| TimeRangeError::Unrecognized(raw.to_string()))?;
    let end_hour: u32 = caps[3]
        .parse()
        .map_err(|_| TimeRangeError::Unrecognized(raw.to_string()))?;

    let start = convert_12_to_24(start_hour, &caps[2] == "PM");
    let end = convert_12_to_24(end_hour, &caps[4] == "PM");
    Ok(format!("{}-{}", start, end))
}

/// 12-hour clock value to zero-padded 24-hour "HHMM"
///
/// The arithmetic is kept bit-for-bit compatible with the published data:
/// 12AM maps to "1200" and 12PM to "2400", not "0000"/"1200".
fn convert_12_to_24(hour: u32, is_pm: bool) -> String {
    let hour = if is_pm { hour + 12 } else { hour };
    format!("{:04}", hour * 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_range() {
        assert_eq!(process_time("4PM-9AM").unwrap(), "1600-0900");
        assert_eq!(process_time("9AM-4PM").unwrap(), "0900-1600");
    }

    #[test]
    fn test_single_digit_hours_zero_pad() {
        assert_eq!(process_time("1AM-9PM").unwrap(), "0100-2100");
    }

    #[test]
    fn test_spaces_and_en_dash() {
        assert_eq!(process_time("4 PM – 9 AM").unwrap(), "1600-0900");
        assert_eq!(process_time("4\u{a0}PM\u{a0}–\u{a0}9\u{a0}AM").unwrap(), "1600-0900");
    }

    #[test]
    fn test_midnight_and_noon_keep_source_arithmetic() {
        // Not a bug here: the published dataset encodes 12AM as 1200 and
        // 12PM as 2400, so the converter must too.
        assert_eq!(process_time("12AM-12PM").unwrap(), "1200-2400");
    }

    #[test]
    fn test_all_day_is_wildcard() {
        assert_eq!(process_time("All day").unwrap(), "*");
        assert_eq!(process_time("All day (rain only)").unwrap(), "*");
    }

    #[test]
    fn test_na_is_empty() {
        assert_eq!(process_time("NA").unwrap(), "");
        assert_eq!(process_time("NA (not spawnable)").unwrap(), "");
    }

    #[test]
    fn test_empty_is_empty() {
        assert_eq!(process_time("").unwrap(), "");
        assert_eq!(process_time("   ").unwrap(), "");
    }

    #[test]
    fn test_unrecognized_input_errors() {
        assert!(matches!(
            process_time("sometimes"),
            Err(TimeRangeError::Unrecognized(_))
        ));
        assert!(matches!(
            process_time("9-17"),
            Err(TimeRangeError::Unrecognized(_))
        ));
    }
}
