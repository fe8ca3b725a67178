//! Weighted job sequencing with deadlines over the five-day week.
//!
//! # Algorithm
//!
//! 1. Order candidates by revenue, highest first. Equal revenue is broken
//!    by the lower project id, which makes the order total and independent
//!    of how the caller happened to list the projects.
//! 2. Walk the order. For each candidate, scan the days from its (clamped)
//!    deadline back towards Monday and take the first free one. If every
//!    day up to the deadline is taken, the candidate stays unscheduled.
//!
//! Placing each project on its latest feasible day keeps the early days
//! open for tighter deadlines met later in the walk. With unit-length jobs
//! this greedy yields a maximum-revenue set of projects.
//!
//! # Complexity
//! O(n log n) for the sort plus O(n * 5) for the scan.
//!
//! # Reference
//! Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms",
//! Ch. 4.4: Job Sequencing with Deadlines

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};
use weekplan_core::{Day, HORIZON_DAYS, Placement, ProjectId};
use weekplan_state::Project;

/// The scheduling-relevant view of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub id: ProjectId,
    pub deadline_days: i64,
    pub revenue: u64,
}

impl Candidate {
    pub fn new(id: ProjectId, deadline_days: i64, revenue: u64) -> Self {
        Self {
            id,
            deadline_days,
            revenue,
        }
    }

    /// Latest day this candidate may occupy, `None` if no day can meet
    /// its deadline.
    pub fn latest_day(&self) -> Option<Day> {
        Day::latest_for_deadline(self.deadline_days)
    }
}

impl From<&Project> for Candidate {
    fn from(project: &Project) -> Self {
        Self::new(project.id, project.deadline_days, project.revenue)
    }
}

/// One computed week: who works on which day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSchedule {
    /// Project held by each day, Monday first.
    slots: [Option<ProjectId>; HORIZON_DAYS as usize],
    /// Outcome for every input project.
    placements: BTreeMap<ProjectId, Placement>,
    total_revenue: u64,
}

impl WeekSchedule {
    /// Project occupying `day`, if any.
    pub fn slot(&self, day: Day) -> Option<ProjectId> {
        self.slots[day.index()]
    }

    /// Days and their occupants, Monday first.
    pub fn slots(&self) -> impl Iterator<Item = (Day, Option<ProjectId>)> + '_ {
        Day::ALL.iter().map(|&day| (day, self.slot(day)))
    }

    /// Outcome for a project, `None` if it was not part of the input.
    pub fn placement(&self, id: ProjectId) -> Option<Placement> {
        self.placements.get(&id).copied()
    }

    pub fn placements(&self) -> &BTreeMap<ProjectId, Placement> {
        &self.placements
    }

    /// Day for every scheduled project; the shape the store commits.
    pub fn days(&self) -> BTreeMap<ProjectId, Day> {
        self.placements
            .iter()
            .filter_map(|(&id, placement)| placement.day().map(|day| (id, day)))
            .collect()
    }

    /// Ids of projects left without a day, ascending.
    pub fn unscheduled(&self) -> Vec<ProjectId> {
        self.placements
            .iter()
            .filter(|(_, placement)| !placement.is_scheduled())
            .map(|(&id, _)| id)
            .collect()
    }

    pub fn scheduled_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Sum of revenue over the scheduled projects.
    pub fn total_revenue(&self) -> u64 {
        self.total_revenue
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Compute the revenue-maximizing week for `candidates`.
///
/// Total and deterministic: never fails, never panics, and returns the same
/// week for the same set of candidates in any order. Deadlines beyond
/// Friday count as Friday; deadlines below 1 leave the candidate
/// unscheduled.
pub fn compute_schedule(candidates: &[Candidate]) -> WeekSchedule {
    let mut order: Vec<&Candidate> = candidates.iter().collect();
    order.sort_by(|a, b| b.revenue.cmp(&a.revenue).then_with(|| a.id.cmp(&b.id)));

    let mut week = WeekSchedule::default();

    for candidate in order {
        if week.placements.contains_key(&candidate.id) {
            warn!(id = candidate.id, "duplicate project id in scheduling input, ignoring");
            continue;
        }

        let day = candidate.latest_day().and_then(|latest| {
            Day::ALL[..=latest.index()]
                .iter()
                .rev()
                .copied()
                .find(|day| week.slots[day.index()].is_none())
        });

        match day {
            Some(day) => {
                week.slots[day.index()] = Some(candidate.id);
                week.total_revenue = week.total_revenue.saturating_add(candidate.revenue);
                week.placements.insert(candidate.id, Placement::Scheduled(day));
                debug!(id = candidate.id, %day, revenue = candidate.revenue, "project placed");
            }
            None => {
                week.placements.insert(candidate.id, Placement::Unscheduled);
                debug!(
                    id = candidate.id,
                    deadline = candidate.deadline_days,
                    "no free day before deadline"
                );
            }
        }
    }

    week
}

/// [`compute_schedule`] over stored projects.
pub fn compute_schedule_for(projects: &[Project]) -> WeekSchedule {
    let candidates: Vec<Candidate> = projects.iter().map(Candidate::from).collect();
    compute_schedule(&candidates)
}
