//! Scheduler — fetches the pipeline, computes the week, commits it.
//!
//! The whole fetch → compute → commit sequence runs inside one store write
//! transaction (see [`StateStore::replace_schedule`]), so a run is either
//! fully applied or not applied at all. Runs are also serialized through
//! an async mutex.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{error, info};
use weekplan_state::{Project, StateStore};

use crate::error::SchedulerResult;
use crate::sequencing::{WeekSchedule, compute_schedule_for};

/// Outcome of a committed schedule run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleReport {
    /// Every project as committed, ordered by id.
    pub projects: Vec<Project>,
    /// The week that was committed.
    pub week: WeekSchedule,
}

/// Drives schedule generation against the state store.
#[derive(Clone)]
pub struct Scheduler {
    state: StateStore,
    /// Held for the duration of a generate run.
    run_lock: Arc<Mutex<()>>,
}

impl Scheduler {
    pub fn new(state: StateStore) -> Self {
        Self {
            state,
            run_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Recompute and commit the week for the current pipeline.
    ///
    /// Every project's day is reset and the new assignment written in one
    /// transaction. On error nothing has been written and the previously
    /// committed week is still in place.
    pub async fn generate(&self) -> SchedulerResult<ScheduleReport> {
        let _run = self.run_lock.lock().await;
        let state = self.state.clone();

        let result = tokio::task::spawn_blocking(move || {
            let mut week = WeekSchedule::default();
            let projects = state.replace_schedule(|projects| {
                week = compute_schedule_for(projects);
                week.days()
            })?;
            Ok::<_, weekplan_state::StateError>(ScheduleReport { projects, week })
        })
        .await;

        let report = match result {
            Ok(Ok(report)) => report,
            Ok(Err(e)) => {
                error!(error = %e, "schedule commit failed, previous week kept");
                return Err(e.into());
            }
            Err(e) => {
                error!(error = %e, "schedule task failed, previous week kept");
                return Err(e.into());
            }
        };

        info!(
            projects = report.projects.len(),
            scheduled = report.week.scheduled_count(),
            unscheduled = report.week.unscheduled().len(),
            total_revenue = report.week.total_revenue(),
            "schedule generated"
        );
        Ok(report)
    }

    /// Compute the week for the current pipeline without committing it.
    pub async fn preview(&self) -> SchedulerResult<WeekSchedule> {
        let state = self.state.clone();
        let projects = tokio::task::spawn_blocking(move || state.list_projects()).await??;
        Ok(compute_schedule_for(&projects))
    }
}
