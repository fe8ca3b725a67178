//! weekplan-scheduler — weekly project scheduling.
//!
//! Assigns pipeline projects to the five working days so that the revenue
//! of the scheduled projects is as large as possible, with at most one
//! project per day and no project placed after its deadline.
//!
//! # Architecture
//!
//! ```text
//! Scheduler (serializes runs)
//!   └── StateStore::replace_schedule (one write transaction)
//!         ├── read every project
//!         ├── sequencing::compute_schedule (pure)
//!         └── clear all days, write the new week, commit
//! ```

pub mod error;
pub mod scheduler;
pub mod sequencing;

pub use error::{SchedulerError, SchedulerResult};
pub use scheduler::{ScheduleReport, Scheduler};
pub use sequencing::{Candidate, WeekSchedule, compute_schedule, compute_schedule_for};
