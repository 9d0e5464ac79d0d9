//! Open-shift postings: unassigned shifts advertised to staff.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::datetime::compare_date_times;
use crate::error::{ScheduleError, ScheduleResult};

use super::{Shift, ShiftStatus};

/// State of an open-shift posting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostingStatus {
    /// Taking applicants.
    #[default]
    Open,
    /// Someone took the shift.
    Filled,
    /// Withdrawn without being filled.
    Closed,
}

impl fmt::Display for PostingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostingStatus::Open => write!(f, "open"),
            PostingStatus::Filled => write!(f, "filled"),
            PostingStatus::Closed => write!(f, "closed"),
        }
    }
}

/// A shift offered to any eligible employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenShiftPosting {
    /// Unique identifier for the posting.
    pub id: String,
    /// The shift on offer.
    pub shift: Shift,
    /// Current status.
    #[serde(default)]
    pub status: PostingStatus,
    /// When the posting went up.
    pub posted_at: String,
    /// Last moment applications are taken. No deadline means no expiry.
    #[serde(default)]
    pub deadline: Option<String>,
}

impl OpenShiftPosting {
    /// Returns true if the posting is open and its deadline has not passed at `now`.
    ///
    /// The deadline itself still counts as accepting.
    pub fn is_accepting_at(&self, now: &str) -> bool {
        if self.status != PostingStatus::Open {
            return false;
        }
        match self.deadline.as_deref() {
            Some(deadline) => compare_date_times(Some(now), Some(deadline)) != Ordering::Greater,
            None => true,
        }
    }

    /// Assigns the shift to `employee_id` and marks the posting filled.
    pub fn fill(&mut self, employee_id: &str) -> ScheduleResult<()> {
        self.transition(PostingStatus::Filled)?;
        self.shift.employee_id = Some(employee_id.to_string());
        self.shift.status = ShiftStatus::Scheduled;
        Ok(())
    }

    /// Withdraws an unfilled posting.
    pub fn close(&mut self) -> ScheduleResult<()> {
        self.transition(PostingStatus::Closed)
    }

    fn transition(&mut self, to: PostingStatus) -> ScheduleResult<()> {
        if self.status != PostingStatus::Open {
            warn!(posting_id = %self.id, from = %self.status, to = %to, "Rejected posting transition");
            return Err(ScheduleError::InvalidTransition {
                entity: "open shift posting".to_string(),
                from: self.status.to_string(),
                to: to.to_string(),
            });
        }
        self.status = to;
        Ok(())
    }
}
