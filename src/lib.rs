//! Date/time normalization for a staff shift-management front end.
//!
//! This crate converts the timestamp strings exchanged with the scheduling
//! API into comparable instants, durations and calendar date keys, and
//! provides the shift, attendance, substitute and open-shift records that
//! are ordered and grouped with them.

#![warn(missing_docs)]

pub mod config;
pub mod datetime;
pub mod error;
pub mod models;
pub mod schedule;
