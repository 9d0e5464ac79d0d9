//! Substitute requests: an employee asking someone else to cover a shift.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ScheduleError, ScheduleResult};

/// Where a substitute request is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstituteStatus {
    /// Waiting for a colleague to volunteer.
    #[default]
    Pending,
    /// A colleague volunteered; waiting for the manager.
    Accepted,
    /// Manager confirmed the swap.
    Approved,
    /// Manager declined the swap.
    Rejected,
    /// Requester withdrew the request.
    Cancelled,
}

impl fmt::Display for SubstituteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubstituteStatus::Pending => write!(f, "pending"),
            SubstituteStatus::Accepted => write!(f, "accepted"),
            SubstituteStatus::Approved => write!(f, "approved"),
            SubstituteStatus::Rejected => write!(f, "rejected"),
            SubstituteStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A request to hand a shift to a substitute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstituteRequest {
    /// Unique identifier for the request.
    pub id: String,
    /// The shift to be covered.
    pub shift_id: String,
    /// The employee giving up the shift.
    pub requester_id: String,
    /// The employee who volunteered, once someone has.
    #[serde(default)]
    pub substitute_id: Option<String>,
    /// Free-text reason shown to colleagues.
    #[serde(default)]
    pub reason: Option<String>,
    /// Current status.
    #[serde(default)]
    pub status: SubstituteStatus,
    /// When the request was created.
    pub created_at: String,
}

impl SubstituteRequest {
    /// Returns true while the request can still change hands.
    pub fn is_open(&self) -> bool {
        matches!(
            self.status,
            SubstituteStatus::Pending | SubstituteStatus::Accepted
        )
    }

    /// Records a volunteer. Only pending requests can be accepted.
    pub fn accept(&mut self, substitute_id: &str) -> ScheduleResult<()> {
        self.transition(SubstituteStatus::Accepted, &[SubstituteStatus::Pending])?;
        self.substitute_id = Some(substitute_id.to_string());
        Ok(())
    }

    /// Confirms an accepted swap.
    pub fn approve(&mut self) -> ScheduleResult<()> {
        self.transition(SubstituteStatus::Approved, &[SubstituteStatus::Accepted])
    }

    /// Declines an open request.
    pub fn reject(&mut self) -> ScheduleResult<()> {
        self.transition(
            SubstituteStatus::Rejected,
            &[SubstituteStatus::Pending, SubstituteStatus::Accepted],
        )
    }

    /// Withdraws an open request.
    pub fn cancel(&mut self) -> ScheduleResult<()> {
        self.transition(
            SubstituteStatus::Cancelled,
            &[SubstituteStatus::Pending, SubstituteStatus::Accepted],
        )
    }

    fn transition(
        &mut self,
        to: SubstituteStatus,
        allowed_from: &[SubstituteStatus],
    ) -> ScheduleResult<()> {
        if !allowed_from.contains(&self.status) {
            warn!(request_id = %self.id, from = %self.status, to = %to, "Rejected substitute transition");
            return Err(ScheduleError::InvalidTransition {
                entity: "substitute request".to_string(),
                from: self.status.to_string(),
                to: to.to_string(),
            });
        }
        self.status = to;
        Ok(())
    }
}
