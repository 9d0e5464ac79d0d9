//! Shift model and related types.
//!
//! Shift timestamps are kept exactly as the API sends them and are read
//! through [`crate::datetime`], so naive values are treated as UTC.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::datetime::{
    diff_date_time_minutes, get_date_part, get_hour_from_date_time, to_date_time_epoch_ms,
};
use crate::error::{ScheduleError, ScheduleResult};

/// Lifecycle state of a shift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    /// Assigned to an employee and upcoming or in progress.
    #[default]
    Scheduled,
    /// Posted without an assignee.
    Open,
    /// Worked and closed out.
    Completed,
    /// Called off.
    Cancelled,
}

/// A scheduled block of work at a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The store the shift belongs to.
    pub store_id: String,
    /// The assigned employee, if any.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Start timestamp as sent by the API.
    pub start_time: String,
    /// End timestamp as sent by the API.
    pub end_time: String,
    /// Current status.
    #[serde(default)]
    pub status: ShiftStatus,
}

impl Shift {
    /// Returns the `YYYY-MM-DD` day the shift starts on.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_datetime::models::{Shift, ShiftStatus};
    ///
    /// let shift = Shift {
    ///     id: "shift_001".to_string(),
    ///     store_id: "store_01".to_string(),
    ///     employee_id: None,
    ///     start_time: "2026-01-15T22:00:00".to_string(),
    ///     end_time: "2026-01-16T06:00:00".to_string(),
    ///     status: ShiftStatus::Open,
    /// };
    /// assert_eq!(shift.date_key(), "2026-01-15");
    /// assert_eq!(shift.duration_minutes(), 480);
    /// ```
    pub fn date_key(&self) -> &str {
        get_date_part(Some(&self.start_time))
    }

    /// Returns the hour the shift starts at.
    pub fn start_hour(&self) -> u32 {
        get_hour_from_date_time(Some(&self.start_time))
    }

    /// Returns the scheduled length in whole minutes, or 0 when unreadable.
    pub fn duration_minutes(&self) -> i64 {
        diff_date_time_minutes(Some(&self.start_time), Some(&self.end_time))
    }

    /// Returns the scheduled length in hours.
    pub fn scheduled_hours(&self) -> Decimal {
        Decimal::new(self.duration_minutes(), 0) / Decimal::new(60, 0)
    }

    /// Returns true if an employee is assigned.
    pub fn is_assigned(&self) -> bool {
        self.employee_id.is_some()
    }

    /// Checks that both timestamps parse and the shift ends after it starts.
    pub fn validate(&self) -> ScheduleResult<()> {
        let start = to_date_time_epoch_ms(Some(&self.start_time)).ok_or_else(|| {
            ScheduleError::InvalidTimestamp {
                field: "start_time".to_string(),
                value: self.start_time.clone(),
            }
        })?;
        let end = to_date_time_epoch_ms(Some(&self.end_time)).ok_or_else(|| {
            ScheduleError::InvalidTimestamp {
                field: "end_time".to_string(),
                value: self.end_time.clone(),
            }
        })?;

        if end <= start {
            warn!(shift_id = %self.id, start = %self.start_time, end = %self.end_time, "Shift ends before it starts");
            return Err(ScheduleError::InvalidShift {
                shift_id: self.id.clone(),
                message: "end time must be after start time".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_shift(id: &str, start: &str, end: &str) -> Shift {
        Shift {
            id: id.to_string(),
            store_id: "store_01".to_string(),
            employee_id: Some("emp_001".to_string()),
            start_time: start.to_string(),
            end_time: end.to_string(),
            status: ShiftStatus::Scheduled,
        }
    }

    #[test]
    fn test_8_hour_shift() {
        let shift = make_shift("SH-001", "2026-01-15 09:00:00", "2026-01-15 17:00:00");
        assert_eq!(shift.duration_minutes(), 480);
        assert_eq!(shift.scheduled_hours(), Decimal::new(80, 1)); // 8.0
    }

    #[test]
    fn test_partial_hour_shift() {
        let shift = make_shift("SH-002", "2026-01-15T09:00", "2026-01-15T13:15");
        assert_eq!(shift.scheduled_hours(), Decimal::new(425, 2)); // 4.25
    }

    #[test]
    fn test_overnight_shift() {
        let shift = make_shift("SH-003", "2026-01-15 22:00", "2026-01-16 06:00");
        assert_eq!(shift.scheduled_hours(), Decimal::new(80, 1));
        assert_eq!(shift.date_key(), "2026-01-15");
        assert_eq!(shift.start_hour(), 22);
    }

    #[test]
    fn test_unreadable_shift_has_zero_duration() {
        let shift = make_shift("SH-004", "soon", "2026-01-16 06:00");
        assert_eq!(shift.duration_minutes(), 0);
        assert_eq!(shift.scheduled_hours(), Decimal::ZERO);
    }

    #[test]
    fn test_validate_accepts_well_formed_shift() {
        let shift = make_shift("SH-005", "2026-01-15 09:00", "2026-01-15 17:00");
        assert!(shift.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_end_before_start() {
        let shift = make_shift("SH-006", "2026-01-15 17:00", "2026-01-15 09:00");
        let err = shift.validate().unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidShift { ref shift_id, .. } if shift_id == "SH-006"));
    }

    #[test]
    fn test_validate_rejects_zero_length() {
        let shift = make_shift("SH-007", "2026-01-15 09:00", "2026-01-15T09:00:00");
        assert!(matches!(
            shift.validate(),
            Err(ScheduleError::InvalidShift { .. })
        ));
    }

    #[test]
    fn test_validate_reports_unparsable_field() {
        let shift = make_shift("SH-008", "2026-01-15 09:00", "late");
        match shift.validate() {
            Err(ScheduleError::InvalidTimestamp { field, value }) => {
                assert_eq!(field, "end_time");
                assert_eq!(value, "late");
            }
            other => panic!("expected InvalidTimestamp, got {other:?}"),
        }
    }

    #[test]
    fn test_shift_deserialization_defaults() {
        let json = r#"{
            "id": "shift_001",
            "store_id": "store_01",
            "start_time": "2026-01-15T09:00:00",
            "end_time": "2026-01-15T17:00:00"
        }"#;

        let shift: Shift = serde_json::from_str(json).unwrap();
        assert_eq!(shift.status, ShiftStatus::Scheduled);
        assert!(!shift.is_assigned());
    }

    #[test]
    fn test_shift_status_serializes_snake_case() {
        let json = serde_json::to_string(&ShiftStatus::Cancelled).unwrap();
        assert_eq!(json, "\"cancelled\"");
    }
}
