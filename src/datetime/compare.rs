//! Duration and ordering arithmetic over timestamp strings.

use std::cmp::Ordering;

use super::epoch::{epoch_ms_from_str, present, to_date_time_epoch_ms};

const MS_PER_MINUTE: i64 = 60_000;

/// Whole minutes from `start` to `end`, rounded toward negative infinity.
///
/// Returns 0 when either value is missing or unparsable. The result is
/// negative when `end` precedes `start`.
///
/// # Example
///
/// ```
/// use shift_datetime::datetime::diff_date_time_minutes;
///
/// assert_eq!(diff_date_time_minutes(Some("2024-03-01 09:00"), Some("2024-03-01 10:30")), 90);
/// assert_eq!(diff_date_time_minutes(None, Some("2024-03-01 10:30")), 0);
/// ```
pub fn diff_date_time_minutes(start: Option<&str>, end: Option<&str>) -> i64 {
    let (Some(start_ms), Some(end_ms)) = (to_date_time_epoch_ms(start), to_date_time_epoch_ms(end))
    else {
        return 0;
    };
    (end_ms - start_ms).div_euclid(MS_PER_MINUTE)
}

/// Three-way comparison of two timestamp strings.
///
/// Missing values sort first. When both parse, their instants are compared;
/// if either fails to parse the raw strings are compared lexicographically.
/// Suitable as a `sort_by` comparator.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use shift_datetime::datetime::compare_date_times;
///
/// assert_eq!(compare_date_times(None, None), Ordering::Equal);
/// assert_eq!(compare_date_times(None, Some("2024-01-01")), Ordering::Less);
/// assert_eq!(compare_date_times(Some("2024-01-02"), Some("2024-01-01")), Ordering::Greater);
/// ```
pub fn compare_date_times(left: Option<&str>, right: Option<&str>) -> Ordering {
    match (present(left), present(right)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(left), Some(right)) => match (epoch_ms_from_str(left), epoch_ms_from_str(right)) {
            (Some(left_ms), Some(right_ms)) => left_ms.cmp(&right_ms),
            _ => left.cmp(right),
        },
    }
}
