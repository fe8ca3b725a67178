//! Scheduler error types.

use thiserror::Error;

/// Errors that can occur while generating a schedule.
///
/// The computation itself cannot fail; every variant comes from the
/// surrounding read/commit, and in every case the previously committed
/// week is left untouched.
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("state store error: {0}")]
    State(#[from] weekplan_state::StateError),

    #[error("schedule task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type SchedulerResult<T> = Result<T, SchedulerError>;
