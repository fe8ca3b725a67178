//! StateStore — redb-backed persistence for the project pipeline.
//!
//! Provides typed CRUD over projects plus the all-or-nothing schedule
//! replacement. All values are JSON-serialized into redb's `&[u8]` value
//! column. The store supports both on-disk and in-memory backends (the
//! latter for testing).

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable, Table};
use tracing::debug;
use weekplan_core::{Day, ProjectId, ValidProject};

use crate::error::{StateError, StateResult};
use crate::tables::*;
use crate::types::*;

/// Convert any `Display` error into a `StateError` variant via a closure factory.
macro_rules! map_err {
    ($variant:ident) => {
        |e| StateError::$variant(e.to_string())
    };
}

/// Thread-safe project store backed by redb.
#[derive(Clone)]
pub struct StateStore {
    db: Arc<Database>,
}

impl StateStore {
    /// Open (or create) a persistent store at the given path.
    pub fn open(path: &Path) -> StateResult<Self> {
        let db = Database::create(path).map_err(map_err!(Open))?;
        let store = Self { db: Arc::new(db) };
        store.ensure_tables()?;
        debug!(?path, "state store opened");
        Ok(store)
    }

    /// Create an ephemeral in-memory store (for testing).
    pub fn open_in_memory() -> StateResult<Self> {
        let backend = redb::backends::InMemoryBackend::new();
        let db = Database::builder()
            .create_with_backend(backend)
            .map_err(map_err!(Open))?;
        let store = Self { db: Arc::new(db) };
        store.ensure_tables()?;
        debug!("in-memory state store opened");
        Ok(store)
    }

    /// Create all tables if they don't exist yet.
    fn ensure_tables(&self) -> StateResult<()> {
        let txn = self.db.begin_write().map_err(map_err!(Transaction))?;
        // Opening a table in a write transaction creates it if absent.
        txn.open_table(PROJECTS).map_err(map_err!(Table))?;
        txn.open_table(META).map_err(map_err!(Table))?;
        txn.commit().map_err(map_err!(Transaction))?;
        Ok(())
    }

    // ── Projects ───────────────────────────────────────────────────

    /// Store a new, unscheduled project and return it with its id.
    ///
    /// The id comes from a counter bumped in the same transaction, so ids
    /// are never reused, even after deletes.
    pub fn create_project(&self, valid: &ValidProject) -> StateResult<Project> {
        let txn = self.db.begin_write().map_err(map_err!(Transaction))?;
        let project;
        {
            let mut meta = txn.open_table(META).map_err(map_err!(Table))?;
            let id = meta
                .get(NEXT_PROJECT_ID)
                .map_err(map_err!(Read))?
                .map(|guard| guard.value())
                .unwrap_or(1);
            meta.insert(NEXT_PROJECT_ID, id + 1)
                .map_err(map_err!(Write))?;

            project = Project::from_valid(id, valid);
            let mut table = txn.open_table(PROJECTS).map_err(map_err!(Table))?;
            write_project(&mut table, &project)?;
        }
        txn.commit().map_err(map_err!(Transaction))?;
        debug!(id = project.id, title = %project.title, "project created");
        Ok(project)
    }

    /// Insert or replace a raw project row as-is.
    ///
    /// Bypasses validation; used to load rows from older data sets. The id
    /// counter is moved past the row's id.
    pub fn put_project(&self, project: &Project) -> StateResult<()> {
        let txn = self.db.begin_write().map_err(map_err!(Transaction))?;
        {
            let mut meta = txn.open_table(META).map_err(map_err!(Table))?;
            let next = meta
                .get(NEXT_PROJECT_ID)
                .map_err(map_err!(Read))?
                .map(|guard| guard.value())
                .unwrap_or(1);
            if project.id >= next {
                let after = project
                    .id
                    .checked_add(1)
                    .ok_or(StateError::IdExhausted(project.id))?;
                meta.insert(NEXT_PROJECT_ID, after).map_err(map_err!(Write))?;
            }
            let mut table = txn.open_table(PROJECTS).map_err(map_err!(Table))?;
            write_project(&mut table, project)?;
        }
        txn.commit().map_err(map_err!(Transaction))?;
        debug!(id = project.id, "project stored");
        Ok(())
    }

    /// Get a project by id.
    pub fn get_project(&self, id: ProjectId) -> StateResult<Option<Project>> {
        let txn = self.db.begin_read().map_err(map_err!(Transaction))?;
        let table = txn.open_table(PROJECTS).map_err(map_err!(Table))?;
        match table.get(id).map_err(map_err!(Read))? {
            Some(guard) => {
                let project: Project =
                    serde_json::from_slice(guard.value()).map_err(map_err!(Deserialize))?;
                Ok(Some(project))
            }
            None => Ok(None),
        }
    }

    /// List all projects, ordered by id.
    ///
    /// Reads from a single snapshot, so the list always reflects one
    /// committed schedule.
    pub fn list_projects(&self) -> StateResult<Vec<Project>> {
        let txn = self.db.begin_read().map_err(map_err!(Transaction))?;
        let table = txn.open_table(PROJECTS).map_err(map_err!(Table))?;
        read_projects(&table)
    }

    /// Whether the store holds no projects at all.
    pub fn is_empty(&self) -> StateResult<bool> {
        let txn = self.db.begin_read().map_err(map_err!(Transaction))?;
        let table = txn.open_table(PROJECTS).map_err(map_err!(Table))?;
        let mut iter = table.iter().map_err(map_err!(Read))?;
        Ok(iter.next().is_none())
    }

    /// Delete a project by id. Returns true if it existed.
    pub fn delete_project(&self, id: ProjectId) -> StateResult<bool> {
        let txn = self.db.begin_write().map_err(map_err!(Transaction))?;
        let existed;
        {
            let mut table = txn.open_table(PROJECTS).map_err(map_err!(Table))?;
            existed = table.remove(id).map_err(map_err!(Write))?.is_some();
        }
        txn.commit().map_err(map_err!(Transaction))?;
        debug!(id, existed, "project deleted");
        Ok(existed)
    }

    // ── Schedule ───────────────────────────────────────────────────

    /// Replace the committed week in one write transaction.
    ///
    /// `plan` receives every stored project (ordered by id) and returns the
    /// days to assign. Every project's day is cleared, then the planned days
    /// are written, and the whole change commits at once. If the plan names
    /// a project that does not exist or puts two projects on one day, the
    /// transaction is dropped uncommitted and the previous week is left
    /// exactly as it was.
    ///
    /// Returns the full project list as committed.
    pub fn replace_schedule<F>(&self, plan: F) -> StateResult<Vec<Project>>
    where
        F: FnOnce(&[Project]) -> BTreeMap<ProjectId, Day>,
    {
        let txn = self.db.begin_write().map_err(map_err!(Transaction))?;
        let committed;
        {
            let mut table = txn.open_table(PROJECTS).map_err(map_err!(Table))?;
            let projects = read_projects(&table)?;
            let days = plan(&projects);
            check_plan(&projects, &days)?;

            let mut updated = Vec::with_capacity(projects.len());
            for mut project in projects {
                let day = days.get(&project.id).copied();
                if project.scheduled_day != day {
                    project.scheduled_day = day;
                    write_project(&mut table, &project)?;
                }
                updated.push(project);
            }
            committed = updated;
        }
        txn.commit().map_err(map_err!(Transaction))?;
        debug!(
            projects = committed.len(),
            scheduled = committed.iter().filter(|p| p.scheduled_day.is_some()).count(),
            "schedule committed"
        );
        Ok(committed)
    }
}

/// Read every project row from a table, in key order.
fn read_projects<T>(table: &T) -> StateResult<Vec<Project>>
where
    T: ReadableTable<u64, &'static [u8]>,
{
    let mut results = Vec::new();
    for entry in table.iter().map_err(map_err!(Read))? {
        let (_, value) = entry.map_err(map_err!(Read))?;
        let project: Project =
            serde_json::from_slice(value.value()).map_err(map_err!(Deserialize))?;
        results.push(project);
    }
    Ok(results)
}

fn write_project(table: &mut Table<'_, u64, &'static [u8]>, project: &Project) -> StateResult<()> {
    let value = serde_json::to_vec(project).map_err(map_err!(Serialize))?;
    table
        .insert(project.id, value.as_slice())
        .map_err(map_err!(Write))?;
    Ok(())
}

/// Reject plans that reference unknown projects or double-book a day.
fn check_plan(projects: &[Project], days: &BTreeMap<ProjectId, Day>) -> StateResult<()> {
    let mut taken: BTreeMap<Day, ProjectId> = BTreeMap::new();
    for (&id, &day) in days {
        if !projects.iter().any(|p| p.id == id) {
            return Err(StateError::UnknownProject(id));
        }
        if let Some(first) = taken.insert(day, id) {
            return Err(StateError::SlotConflict {
                day,
                first,
                second: id,
            });
        }
    }
    Ok(())
}
