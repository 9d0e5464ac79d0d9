//! Domain records exchanged with the scheduling API.
//!
//! Timestamps are kept as the strings the API sends and are interpreted
//! through [`crate::datetime`].

mod attendance;
mod open_shift;
mod shift;
mod substitute;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use open_shift::{OpenShiftPosting, PostingStatus};
pub use shift::{Shift, ShiftStatus};
pub use substitute::{SubstituteRequest, SubstituteStatus};
