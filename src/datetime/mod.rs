//! Timestamp normalization, comparison and date-key utilities.
//!
//! Every function here is total: missing or malformed input produces `None`,
//! zero or an empty string rather than an error, so display code can pass
//! API data straight through.
//!
//! Naive timestamps (no `Z` or `±HH:MM`) are read as UTC fields. Offset
//! qualified timestamps are parsed with their offset. The two rules are
//! deliberately asymmetric and must not be unified.
//!
//! # Example
//!
//! ```
//! use shift_datetime::datetime::{compare_date_times, diff_date_time_minutes, get_time_part};
//!
//! let start = Some("2024-03-01 09:00");
//! let end = Some("2024-03-01T18:00:00");
//! assert_eq!(diff_date_time_minutes(start, end), 540);
//! assert!(compare_date_times(start, end).is_lt());
//! assert_eq!(get_time_part(end), "18:00");
//! ```

mod compare;
mod date_key;
mod epoch;
mod parts;

pub use compare::{compare_date_times, diff_date_time_minutes};
pub use date_key::{
    DATE_KEY_FORMAT, KST, ZonedDateKeyFormatter, date_key_in_kst, diff_date_keys,
    format_date_key, get_today_date_key_in, get_today_date_key_in_kst, kst_date_key_formatter,
    parse_date_only,
};
pub use epoch::{to_date_time_epoch_ms, to_date_time_utc};
pub use parts::{get_date_part, get_hour_from_date_time, get_time_part};
