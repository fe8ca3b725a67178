//! Domain types for the weekplan state store.
//!
//! `Project` is both the stored row and the wire record, so its serde
//! shape is the cross-boundary contract:
//! `{ id, title, deadlineDays, revenue, scheduledDay: 1..=5 | null }`.

use serde::{Deserialize, Serialize};
use weekplan_core::{Day, ProjectId, ValidProject};

/// A candidate project in the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    /// Latest working day (1-based) by which the project must be done.
    ///
    /// Signed so rows written before validation existed still load; the
    /// scheduler clamps it to the horizon.
    pub deadline_days: i64,
    /// Revenue realized only if the project gets a day.
    pub revenue: u64,
    /// Day assigned by the last committed schedule, if any.
    pub scheduled_day: Option<Day>,
}

impl Project {
    /// Build the row for a freshly created project. New projects start
    /// unscheduled.
    pub fn from_valid(id: ProjectId, valid: &ValidProject) -> Self {
        Self {
            id,
            title: valid.title().to_string(),
            deadline_days: i64::from(valid.deadline_days()),
            revenue: valid.revenue(),
            scheduled_day: None,
        }
    }
}

/// Headline numbers for the pipeline.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSummary {
    pub total_projects: usize,
    pub scheduled_projects: usize,
    /// Revenue of every project in the pipeline.
    pub pipeline_revenue: u64,
    /// Revenue of the projects holding a day this week.
    pub scheduled_revenue: u64,
}

impl PipelineSummary {
    pub fn from_projects(projects: &[Project]) -> Self {
        projects.iter().fold(Self::default(), |mut acc, p| {
            acc.total_projects += 1;
            acc.pipeline_revenue = acc.pipeline_revenue.saturating_add(p.revenue);
            if p.scheduled_day.is_some() {
                acc.scheduled_projects += 1;
                acc.scheduled_revenue = acc.scheduled_revenue.saturating_add(p.revenue);
            }
            acc
        })
    }
}
