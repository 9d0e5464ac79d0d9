//! Attendance (clock-in / clock-out) records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::datetime::diff_date_time_minutes;

use super::Shift;

/// Outcome of comparing an attendance record against its shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Clocked in within the grace period and stayed to the end.
    Normal,
    /// Clocked in after the grace period.
    Late,
    /// Clocked out before the shift ended.
    EarlyLeave,
    /// Never clocked in.
    Absent,
}

/// A clock-in / clock-out pair for one shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The shift being attended.
    pub shift_id: String,
    /// The employee who clocked in.
    pub employee_id: String,
    /// Clock-in timestamp, if any.
    #[serde(default)]
    pub clock_in: Option<String>,
    /// Clock-out timestamp, if any.
    #[serde(default)]
    pub clock_out: Option<String>,
    /// Status as last stored by the API.
    #[serde(default)]
    pub status: Option<AttendanceStatus>,
}

impl AttendanceRecord {
    /// Minutes between clock-in and clock-out; 0 while either is missing.
    pub fn worked_minutes(&self) -> i64 {
        diff_date_time_minutes(self.clock_in.as_deref(), self.clock_out.as_deref()).max(0)
    }

    /// Worked time in hours.
    pub fn worked_hours(&self) -> Decimal {
        Decimal::new(self.worked_minutes(), 0) / Decimal::new(60, 0)
    }

    /// Minutes between shift start and clock-in, never negative.
    pub fn late_minutes(&self, shift: &Shift) -> i64 {
        if self.clock_in.is_none() {
            return 0;
        }
        diff_date_time_minutes(Some(&shift.start_time), self.clock_in.as_deref()).max(0)
    }

    /// Minutes between clock-out and shift end, never negative.
    pub fn early_leave_minutes(&self, shift: &Shift) -> i64 {
        if self.clock_out.is_none() {
            return 0;
        }
        diff_date_time_minutes(self.clock_out.as_deref(), Some(&shift.end_time)).max(0)
    }

    /// Classifies the record against its shift.
    ///
    /// Lateness wins over leaving early when both apply.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_datetime::models::{AttendanceRecord, AttendanceStatus, Shift, ShiftStatus};
    ///
    /// let shift = Shift {
    ///     id: "shift_001".to_string(),
    ///     store_id: "store_01".to_string(),
    ///     employee_id: Some("emp_001".to_string()),
    ///     start_time: "2026-01-15 09:00".to_string(),
    ///     end_time: "2026-01-15 17:00".to_string(),
    ///     status: ShiftStatus::Scheduled,
    /// };
    /// let record = AttendanceRecord {
    ///     id: "att_001".to_string(),
    ///     shift_id: "shift_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     clock_in: Some("2026-01-15 09:04".to_string()),
    ///     clock_out: Some("2026-01-15 17:00".to_string()),
    ///     status: None,
    /// };
    /// assert_eq!(record.evaluate(&shift, 5), AttendanceStatus::Normal);
    /// assert_eq!(record.evaluate(&shift, 0), AttendanceStatus::Late);
    /// ```
    pub fn evaluate(&self, shift: &Shift, grace_minutes: i64) -> AttendanceStatus {
        if self.clock_in.is_none() {
            return AttendanceStatus::Absent;
        }
        if self.late_minutes(shift) > grace_minutes {
            return AttendanceStatus::Late;
        }
        if self.early_leave_minutes(shift) > 0 {
            return AttendanceStatus::EarlyLeave;
        }
        AttendanceStatus::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftStatus;

    fn make_shift() -> Shift {
        Shift {
            id: "shift_001".to_string(),
            store_id: "store_01".to_string(),
            employee_id: Some("emp_001".to_string()),
            start_time: "2026-01-15T09:00:00".to_string(),
            end_time: "2026-01-15T17:00:00".to_string(),
            status: ShiftStatus::Scheduled,
        }
    }

    fn make_record(clock_in: Option<&str>, clock_out: Option<&str>) -> AttendanceRecord {
        AttendanceRecord {
            id: "att_001".to_string(),
            shift_id: "shift_001".to_string(),
            employee_id: "emp_001".to_string(),
            clock_in: clock_in.map(str::to_string),
            clock_out: clock_out.map(str::to_string),
            status: None,
        }
    }

    #[test]
    fn test_worked_minutes_full_day() {
        let record = make_record(Some("2026-01-15 08:55"), Some("2026-01-15 17:05"));
        assert_eq!(record.worked_minutes(), 490);
    }

    #[test]
    fn test_worked_minutes_still_clocked_in() {
        let record = make_record(Some("2026-01-15 08:55"), None);
        assert_eq!(record.worked_minutes(), 0);
        assert_eq!(record.worked_hours(), Decimal::ZERO);
    }

    #[test]
    fn test_worked_hours() {
        let record = make_record(Some("2026-01-15 09:00"), Some("2026-01-15 12:30"));
        assert_eq!(record.worked_hours(), Decimal::new(35, 1)); // 3.5
    }

    #[test]
    fn test_early_arrival_is_not_negative_lateness() {
        let record = make_record(Some("2026-01-15 08:30"), None);
        assert_eq!(record.late_minutes(&make_shift()), 0);
    }

    #[test]
    fn test_late_minutes() {
        let record = make_record(Some("2026-01-15 09:12:30"), None);
        assert_eq!(record.late_minutes(&make_shift()), 12);
    }

    #[test]
    fn test_offset_clock_in_is_compared_as_instant() {
        // 18:10 KST is 09:10 UTC
        let record = make_record(Some("2026-01-15T18:10:00+09:00"), None);
        assert_eq!(record.late_minutes(&make_shift()), 10);
    }

    #[test]
    fn test_evaluate_absent() {
        let record = make_record(None, None);
        assert_eq!(record.evaluate(&make_shift(), 5), AttendanceStatus::Absent);
    }

    #[test]
    fn test_evaluate_late_beyond_grace() {
        let record = make_record(Some("2026-01-15 09:06"), Some("2026-01-15 17:00"));
        assert_eq!(record.evaluate(&make_shift(), 5), AttendanceStatus::Late);
    }

    #[test]
    fn test_evaluate_early_leave() {
        let record = make_record(Some("2026-01-15 09:00"), Some("2026-01-15 16:30"));
        assert_eq!(record.evaluate(&make_shift(), 5), AttendanceStatus::EarlyLeave);
        assert_eq!(record.early_leave_minutes(&make_shift()), 30);
    }

    #[test]
    fn test_evaluate_late_takes_precedence_over_early_leave() {
        let record = make_record(Some("2026-01-15 09:30"), Some("2026-01-15 16:30"));
        assert_eq!(record.evaluate(&make_shift(), 5), AttendanceStatus::Late);
    }

    #[test]
    fn test_evaluate_still_on_shift_is_normal() {
        let record = make_record(Some("2026-01-15 09:00"), None);
        assert_eq!(record.evaluate(&make_shift(), 0), AttendanceStatus::Normal);
    }

    #[test]
    fn test_record_deserialization() {
        let json = r#"{
            "id": "att_001",
            "shift_id": "shift_001",
            "employee_id": "emp_001",
            "clock_in": "2026-01-15 09:00:00",
            "status": "early_leave"
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.clock_out, None);
        assert_eq!(record.status, Some(AttendanceStatus::EarlyLeave));
    }
}
