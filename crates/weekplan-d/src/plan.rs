//! Plan mode — one-shot scheduling against the stored pipeline.

use std::collections::HashMap;
use std::fmt::Write as _;

use tracing::info;
use weekplan_core::{DaemonConfig, ProjectId};
use weekplan_scheduler::{Scheduler, WeekSchedule};
use weekplan_state::{Project, StateStore};

/// Compute (and optionally commit) the week, then print it.
pub async fn run_plan(config: DaemonConfig, commit: bool, json: bool) -> anyhow::Result<()> {
    std::fs::create_dir_all(&config.storage.data_dir)?;
    let db_path = config.storage.db_path();
    let store = StateStore::open(&db_path)?;
    info!(path = ?db_path, commit, "planning week");

    let scheduler = Scheduler::new(store.clone());
    let (week, projects) = if commit {
        let report = scheduler.generate().await?;
        (report.week, report.projects)
    } else {
        (scheduler.preview().await?, store.list_projects()?)
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&week)?);
    } else {
        print!("{}", render_week(&week, &projects));
    }
    Ok(())
}

/// Human-readable table of the week.
fn render_week(week: &WeekSchedule, projects: &[Project]) -> String {
    let by_id: HashMap<ProjectId, &Project> = projects.iter().map(|p| (p.id, p)).collect();
    let describe = |id: ProjectId| match by_id.get(&id) {
        Some(p) => format!("{} (#{}, revenue {})", p.title, p.id, p.revenue),
        None => format!("#{id}"),
    };

    let mut out = String::new();
    for (day, occupant) in week.slots() {
        let entry = occupant.map_or_else(|| "-".to_string(), describe);
        let _ = writeln!(out, "{:<10} {entry}", day.name());
    }

    let unscheduled = week.unscheduled();
    if !unscheduled.is_empty() {
        let _ = writeln!(out, "\nunscheduled:");
        for id in unscheduled {
            let _ = writeln!(out, "  {}", describe(id));
        }
    }
    let _ = writeln!(out, "\ntotal revenue: {}", week.total_revenue());
    out
}
