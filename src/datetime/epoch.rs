//! Timestamp string to instant conversion.
//!
//! Upstream timestamps arrive without a timezone suffix but already denote UTC
//! instants. Strings carrying `Z` or `±HH:MM` are parsed with their offset;
//! naive `YYYY-MM-DD[T ]HH:mm[:ss]` strings have their fields read as UTC
//! fields and never see the host's local offset.

use std::sync::LazyLock;

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use regex::{Captures, Regex};
use tracing::trace;

/// Trailing `Z` or `±HH:MM` offset.
static TIMEZONE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:Z|[+-]\d{2}:\d{2})$").expect("Invalid timezone suffix regex")
});

/// Naive `YYYY-MM-DD[T ]HH:mm[:ss]` prefix. Anything after the seconds
/// (fractions, stray text) is ignored.
static NAIVE_DATE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})[T ](\d{2}):(\d{2})(?::(\d{2}))?")
        .expect("Invalid naive date-time regex")
});

/// Layouts accepted for offset-qualified strings once `Z` is rewritten to `+00:00`.
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// Offset layouts with a space before the offset, tried by the generic fallback.
const SPACED_OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f %:z",
    "%Y-%m-%d %H:%M:%S%.f %:z",
    "%Y-%m-%d %H:%M %:z",
    "%Y/%m/%d %H:%M:%S %:z",
];

/// Naive layouts read in host local time by the generic fallback.
const LOCAL_DATE_TIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Builds a date from numeric fields, rolling overflow into the next unit.
///
/// Month 13 becomes January of the following year and day 0 becomes the last
/// day of the previous month, matching what a field-based date constructor
/// does. Returns `None` only when the result leaves chrono's supported range.
pub(crate) fn rolled_over_date(year: i64, month: i64, day: i64) -> Option<NaiveDate> {
    let month_index = month - 1;
    let year = i32::try_from(year + month_index.div_euclid(12)).ok()?;
    let month = u32::try_from(month_index.rem_euclid(12) + 1).ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)?.checked_add_signed(Duration::days(day - 1))
}

/// Reads capture group `index` as an integer, defaulting to zero when absent.
pub(crate) fn numeric_field(captures: &Captures<'_>, index: usize) -> i64 {
    captures
        .get(index)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Treats an empty string like a missing value.
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Parses an offset-qualified string, falling back to generic parsing when
/// none of the ISO layouts fit.
fn parse_with_offset(value: &str) -> Option<DateTime<Utc>> {
    let normalized = match value.strip_suffix('Z') {
        Some(rest) => format!("{rest}+00:00"),
        None => value.to_string(),
    };

    OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(&normalized, format).ok())
        .map(|instant| instant.with_timezone(&Utc))
        .or_else(|| generic_instant(&normalized))
}

fn naive_fields_as_utc(captures: &Captures<'_>) -> Option<DateTime<Utc>> {
    let date = rolled_over_date(
        numeric_field(captures, 1),
        numeric_field(captures, 2),
        numeric_field(captures, 3),
    )?;

    let time_of_day = Duration::hours(numeric_field(captures, 4))
        + Duration::minutes(numeric_field(captures, 5))
        + Duration::seconds(numeric_field(captures, 6));

    date.and_hms_opt(0, 0, 0)?
        .checked_add_signed(time_of_day)
        .map(|naive| naive.and_utc())
}

fn local_instant(naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

/// Lenient parsing used when a string fits neither of the strict shapes.
///
/// Accepts RFC 3339, RFC 2822, offsets separated by a space, ISO date-only
/// (UTC midnight) and a handful of naive layouts that are read in host local time.
pub(crate) fn generic_instant(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Ok(instant) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Some(instant) = SPACED_OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(trimmed, format).ok())
    {
        return Some(instant.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    if let Some(naive) = LOCAL_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
    {
        return local_instant(naive);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y/%m/%d") {
        return date.and_hms_opt(0, 0, 0).and_then(local_instant);
    }

    trace!(value = %value, "Timestamp did not match any known layout");
    None
}

/// Converts a timestamp string to a UTC instant under the naive-as-UTC policy.
pub(crate) fn instant_from_str(value: &str) -> Option<DateTime<Utc>> {
    if TIMEZONE_SUFFIX.is_match(value) {
        let parsed = parse_with_offset(value);
        if parsed.is_none() {
            trace!(value = %value, "Offset-qualified timestamp failed to parse");
        }
        return parsed;
    }

    if let Some(captures) = NAIVE_DATE_TIME.captures(value) {
        return naive_fields_as_utc(&captures);
    }

    trace!(value = %value, "Falling back to generic timestamp parsing");
    generic_instant(value)
}

/// Converts a timestamp string to epoch milliseconds.
pub(crate) fn epoch_ms_from_str(value: &str) -> Option<i64> {
    instant_from_str(value).map(|instant| instant.timestamp_millis())
}

/// Converts a timestamp string to milliseconds since the Unix epoch.
///
/// Naive strings are read as UTC fields; strings ending in `Z` or `±HH:MM`
/// honour their offset. Missing, empty or unparsable input yields `None`
/// instead of an error.
///
/// # Example
///
/// ```
/// use shift_datetime::datetime::to_date_time_epoch_ms;
///
/// // 2024-03-01T09:30:00Z
/// assert_eq!(to_date_time_epoch_ms(Some("2024-03-01 09:30:00")), Some(1_709_285_400_000));
/// // Same wall clock in KST is nine hours earlier
/// assert_eq!(
///     to_date_time_epoch_ms(Some("2024-03-01T09:30:00+09:00")),
///     Some(1_709_253_000_000)
/// );
/// assert_eq!(to_date_time_epoch_ms(None), None);
/// ```
pub fn to_date_time_epoch_ms(value: Option<&str>) -> Option<i64> {
    present(value).and_then(epoch_ms_from_str)
}

/// Same conversion as [`to_date_time_epoch_ms`], returning a typed instant.
pub fn to_date_time_utc(value: Option<&str>) -> Option<DateTime<Utc>> {
    present(value).and_then(instant_from_str)
}
