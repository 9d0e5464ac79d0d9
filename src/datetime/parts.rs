//! Slicing timestamp strings into their date and time-of-day parts.

/// Characters that separate the date from the time of day.
const SEPARATORS: [char; 2] = ['T', ' '];

fn first_chars(value: &str, count: usize) -> &str {
    match value.char_indices().nth(count) {
        Some((index, _)) => &value[..index],
        None => value,
    }
}

/// Returns the text before the first `T` or space.
///
/// A string without a separator is returned whole; a missing value yields
/// an empty string.
///
/// ```
/// use shift_datetime::datetime::get_date_part;
///
/// assert_eq!(get_date_part(Some("2024-03-01T09:30:00")), "2024-03-01");
/// assert_eq!(get_date_part(None), "");
/// ```
pub fn get_date_part(value: Option<&str>) -> &str {
    let Some(value) = value else {
        return "";
    };
    match value.split_once(SEPARATORS) {
        Some((date, _)) => date,
        None => value,
    }
}

/// Returns the `HH:mm` portion of a timestamp.
///
/// Takes the first five characters after the first separator, or of the
/// whole string when there is no separator.
///
/// ```
/// use shift_datetime::datetime::get_time_part;
///
/// assert_eq!(get_time_part(Some("2024-03-01T09:30:00")), "09:30");
/// assert_eq!(get_time_part(Some("18:45:00")), "18:45");
/// ```
pub fn get_time_part(value: Option<&str>) -> &str {
    let Some(value) = value else {
        return "";
    };
    let time = value.split_once(SEPARATORS).map_or(value, |(_, time)| time);
    first_chars(time, 5)
}

/// Returns the hour of a timestamp, or 0 when it cannot be read.
pub fn get_hour_from_date_time(value: Option<&str>) -> u32 {
    get_time_part(value)
        .split(':')
        .next()
        .and_then(|hour| hour.parse().ok())
        .unwrap_or(0)
}
