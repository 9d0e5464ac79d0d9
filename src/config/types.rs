//! Configuration types for a store.
//!
//! [`StoreFile`] mirrors the YAML written by the store-setup wizard;
//! [`StoreConfig`] is the validated, strongly-typed form.

use chrono::NaiveTime;
use chrono_tz::Tz;
use serde::Deserialize;

use crate::datetime::{KST, get_today_date_key_in, to_date_time_utc};
use crate::error::{ScheduleError, ScheduleResult};

/// Layout of opening and closing times.
const TIME_OF_DAY_FORMAT: &str = "%H:%M";

fn default_timezone() -> String {
    KST.name().to_string()
}

/// Store settings file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreFile {
    /// Display name of the store.
    pub name: String,
    /// IANA zone name, Asia/Seoul when omitted.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Opening time as `HH:mm`.
    pub opening_time: String,
    /// Closing time as `HH:mm`.
    pub closing_time: String,
    /// Minutes after shift start before a clock-in counts as late.
    #[serde(default)]
    pub late_grace_minutes: u32,
}

/// Validated store settings.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    name: String,
    timezone: Tz,
    opening_time: NaiveTime,
    closing_time: NaiveTime,
    late_grace_minutes: u32,
}

fn parse_time_of_day(value: &str) -> ScheduleResult<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_OF_DAY_FORMAT).map_err(|_| {
        ScheduleError::InvalidTimeOfDay {
            value: value.to_string(),
        }
    })
}

impl TryFrom<StoreFile> for StoreConfig {
    type Error = ScheduleError;

    fn try_from(file: StoreFile) -> ScheduleResult<Self> {
        let timezone: Tz = file
            .timezone
            .parse()
            .map_err(|_| ScheduleError::InvalidTimezone {
                name: file.timezone.clone(),
            })?;

        Ok(Self {
            opening_time: parse_time_of_day(&file.opening_time)?,
            closing_time: parse_time_of_day(&file.closing_time)?,
            name: file.name,
            timezone,
            late_grace_minutes: file.late_grace_minutes,
        })
    }
}

impl StoreConfig {
    /// Returns the store's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the store's timezone.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Returns the opening time.
    pub fn opening_time(&self) -> NaiveTime {
        self.opening_time
    }

    /// Returns the closing time.
    pub fn closing_time(&self) -> NaiveTime {
        self.closing_time
    }

    /// Returns the clock-in grace period in minutes.
    pub fn late_grace_minutes(&self) -> u32 {
        self.late_grace_minutes
    }

    /// True when the store closes after midnight.
    pub fn is_overnight(&self) -> bool {
        self.closing_time < self.opening_time
    }

    /// Returns today's date key in the store's timezone.
    pub fn today_date_key(&self) -> String {
        get_today_date_key_in(self.timezone)
    }

    /// Returns true if the store is open at the given local time of day.
    ///
    /// Opening time is inclusive, closing time exclusive. Equal opening and
    /// closing times mean the store never closes.
    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        if self.opening_time == self.closing_time {
            return true;
        }
        if self.is_overnight() {
            time >= self.opening_time || time < self.closing_time
        } else {
            time >= self.opening_time && time < self.closing_time
        }
    }

    /// Returns true if the store is open at the instant `timestamp` denotes.
    ///
    /// The timestamp is read under the usual naive-as-UTC rule and then
    /// converted to the store's zone. Unreadable timestamps are never open.
    pub fn is_open_at_timestamp(&self, timestamp: &str) -> bool {
        to_date_time_utc(Some(timestamp))
            .map(|instant| self.is_open_at(instant.with_timezone(&self.timezone).time()))
            .unwrap_or(false)
    }
}
