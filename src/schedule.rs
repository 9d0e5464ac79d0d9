//! Ordering and per-day grouping of schedule records.
//!
//! Works over anything with a start timestamp through the [`Scheduled`]
//! trait, using the same comparison rules as [`crate::datetime`].

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::datetime::{compare_date_times, get_date_part, to_date_time_epoch_ms};
use crate::models::{AttendanceRecord, OpenShiftPosting, Shift, SubstituteRequest};

/// A record that can be placed on a timeline.
pub trait Scheduled {
    /// The timestamp the record is ordered by, if it has one.
    fn starts_at(&self) -> Option<&str>;
}

impl Scheduled for Shift {
    fn starts_at(&self) -> Option<&str> {
        Some(&self.start_time)
    }
}

impl Scheduled for AttendanceRecord {
    fn starts_at(&self) -> Option<&str> {
        self.clock_in.as_deref()
    }
}

impl Scheduled for OpenShiftPosting {
    fn starts_at(&self) -> Option<&str> {
        Some(&self.shift.start_time)
    }
}

impl Scheduled for SubstituteRequest {
    fn starts_at(&self) -> Option<&str> {
        Some(&self.created_at)
    }
}

/// Sort key for a record's start.
///
/// `compare_date_times` mixes instant and text comparison, which is not a
/// total order once readable and unreadable starts meet. Sorting uses this
/// key instead: missing starts, then readable starts by instant, then
/// unreadable starts by text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum StartKey {
    Missing,
    Instant(i64),
    Unreadable(String),
}

impl StartKey {
    fn of<T: Scheduled>(record: &T) -> Self {
        match record.starts_at().filter(|start| !start.is_empty()) {
            None => StartKey::Missing,
            Some(start) => match to_date_time_epoch_ms(Some(start)) {
                Some(epoch_ms) => StartKey::Instant(epoch_ms),
                None => StartKey::Unreadable(start.to_string()),
            },
        }
    }
}

/// Sorts records by start time.
///
/// Records without a start come first and records whose start cannot be
/// read come last, ordered by their raw text. The sort is stable, so records
/// with equal starts keep their order.
pub fn sort_chronologically<T: Scheduled>(records: &mut [T]) {
    records.sort_by_cached_key(StartKey::of);
}

/// Groups records by the `YYYY-MM-DD` day they start on.
///
/// Records without a start, or whose start has no date part, are skipped.
/// Within a day, records keep their input order.
///
/// # Example
///
/// ```
/// use shift_datetime::models::{Shift, ShiftStatus};
/// use shift_datetime::schedule::group_by_date_key;
///
/// let shift = |id: &str, start: &str| Shift {
///     id: id.to_string(),
///     store_id: "store_01".to_string(),
///     employee_id: None,
///     start_time: start.to_string(),
///     end_time: start.to_string(),
///     status: ShiftStatus::Open,
/// };
/// let shifts = vec![
///     shift("a", "2026-01-15 09:00"),
///     shift("b", "2026-01-16T09:00"),
///     shift("c", "2026-01-15 18:00"),
/// ];
///
/// let days = group_by_date_key(&shifts);
/// assert_eq!(days.len(), 2);
/// assert_eq!(days["2026-01-15"].len(), 2);
/// ```
pub fn group_by_date_key<T: Scheduled>(records: &[T]) -> BTreeMap<String, Vec<&T>> {
    let mut days: BTreeMap<String, Vec<&T>> = BTreeMap::new();
    for record in records {
        let date_key = get_date_part(record.starts_at());
        if date_key.is_empty() {
            continue;
        }
        days.entry(date_key.to_string()).or_default().push(record);
    }
    days
}

/// Returns the records that start on `date_key`, in input order.
pub fn on_date<'a, T: Scheduled>(records: &'a [T], date_key: &str) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| get_date_part(record.starts_at()) == date_key)
        .collect()
}

/// Returns the records starting at or after `now`, earliest first.
pub fn upcoming_from<'a, T: Scheduled>(records: &'a [T], now: &str) -> Vec<&'a T> {
    let mut upcoming: Vec<&T> = records
        .iter()
        .filter(|record| {
            record.starts_at().is_some()
                && compare_date_times(record.starts_at(), Some(now)) != Ordering::Less
        })
        .collect();
    upcoming.sort_by_cached_key(|record| StartKey::of(*record));
    upcoming
}
