//! Calendar date keys (`YYYY-MM-DD`) used to group and look up records by day.

use std::sync::LazyLock;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use regex::Regex;
use tracing::trace;

use super::epoch::{generic_instant, numeric_field, rolled_over_date};

/// Layout of a date key.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Zone used for "today" throughout the store UI.
pub const KST: Tz = chrono_tz::Asia::Seoul;

static DATE_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("Invalid date-only regex"));

static KST_DATE_KEY_FORMATTER: LazyLock<ZonedDateKeyFormatter> =
    LazyLock::new(|| ZonedDateKeyFormatter::new(KST));

/// Formats instants as date keys in a fixed timezone.
///
/// The format items are parsed once at construction, so a single formatter
/// can be shared and reused for every call. The date key ordering comes from
/// the [`DATE_KEY_FORMAT`] layout, not from the zone.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use shift_datetime::datetime::ZonedDateKeyFormatter;
///
/// let formatter = ZonedDateKeyFormatter::new(chrono_tz::Asia::Seoul);
/// // 16:00 UTC is already the next day in Seoul
/// let instant = Utc.with_ymd_and_hms(2024, 3, 1, 16, 0, 0).unwrap();
/// assert_eq!(formatter.format(&instant), "2024-03-02");
/// ```
#[derive(Debug, Clone)]
pub struct ZonedDateKeyFormatter {
    timezone: Tz,
    items: Vec<Item<'static>>,
}

impl ZonedDateKeyFormatter {
    /// Creates a formatter for the given zone.
    pub fn new(timezone: Tz) -> Self {
        Self {
            timezone,
            items: StrftimeItems::new(DATE_KEY_FORMAT).collect(),
        }
    }

    /// Returns the zone this formatter renders in.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Renders the calendar date of `instant` as observed in this zone.
    pub fn format<Z: TimeZone>(&self, instant: &DateTime<Z>) -> String {
        instant
            .with_timezone(&self.timezone)
            .format_with_items(self.items.iter())
            .to_string()
    }

    /// Renders the current date in this zone.
    pub fn today(&self) -> String {
        self.format(&Utc::now())
    }
}

/// Returns the process-wide Asia/Seoul formatter.
pub fn kst_date_key_formatter() -> &'static ZonedDateKeyFormatter {
    &KST_DATE_KEY_FORMATTER
}

/// Parses a `YYYY-MM-DD` string into a local calendar date.
///
/// Matching strings are built from their numeric fields without calendar
/// validation, so `2024-02-31` rolls over to `2024-03-02`. Anything else goes
/// through lenient generic parsing and yields the local calendar date of the
/// parsed instant, or `None` when nothing fits.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use shift_datetime::datetime::parse_date_only;
///
/// assert_eq!(parse_date_only("2024-03-01"), NaiveDate::from_ymd_opt(2024, 3, 1));
/// assert_eq!(parse_date_only("2024-02-31"), NaiveDate::from_ymd_opt(2024, 3, 2));
/// assert_eq!(parse_date_only("no date"), None);
/// ```
pub fn parse_date_only(date_string: &str) -> Option<NaiveDate> {
    if let Some(captures) = DATE_ONLY.captures(date_string) {
        return rolled_over_date(
            numeric_field(&captures, 1),
            numeric_field(&captures, 2),
            numeric_field(&captures, 3),
        );
    }

    trace!(value = %date_string, "Date key did not match YYYY-MM-DD, using generic parsing");
    generic_instant(date_string).map(|instant| instant.with_timezone(&Local).date_naive())
}

/// Formats the calendar fields of `date` as `YYYY-MM-DD`.
///
/// The fields are taken as the value presents them: pass a
/// `DateTime<Local>` or a `NaiveDate` for local calendar days. A
/// `DateTime<Utc>` yields the UTC day.
pub fn format_date_key<D: Datelike>(date: &D) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Returns today's date key in Asia/Seoul, whatever the host timezone.
pub fn get_today_date_key_in_kst() -> String {
    KST_DATE_KEY_FORMATTER.today()
}

/// Returns the Asia/Seoul date key for a given instant.
pub fn date_key_in_kst<Z: TimeZone>(instant: &DateTime<Z>) -> String {
    KST_DATE_KEY_FORMATTER.format(instant)
}

/// Returns today's date key in an arbitrary zone.
///
/// Asia/Seoul reuses the shared formatter; other zones build one per call.
pub fn get_today_date_key_in(timezone: Tz) -> String {
    if timezone == KST {
        return get_today_date_key_in_kst();
    }
    ZonedDateKeyFormatter::new(timezone).today()
}

/// Counts whole days from `start_date_key` to `end_date_key`.
///
/// Negative when the end precedes the start; `None` when either key cannot
/// be parsed.
///
/// # Example
///
/// ```
/// use shift_datetime::datetime::diff_date_keys;
///
/// assert_eq!(diff_date_keys("2024-01-01", "2024-01-31"), Some(30));
/// assert_eq!(diff_date_keys("2024-03-01", "2024-02-28"), Some(-2));
/// ```
pub fn diff_date_keys(start_date_key: &str, end_date_key: &str) -> Option<i64> {
    let start = parse_date_only(start_date_key)?;
    let end = parse_date_only(end_date_key)?;
    Some((end - start).num_days())
}
