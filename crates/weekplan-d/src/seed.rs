//! Sample pipeline inserted into a fresh store.

use weekplan_core::NewProject;
use weekplan_state::StateStore;

/// (title, deadline in days, revenue)
const SAMPLE_PROJECTS: [(&str, i64, i64); 7] = [
    ("UI Redesign for TechCorp", 2, 150_000),
    ("Backend API for ShopApp", 4, 250_000),
    ("Testing Suite for FinTech", 3, 95_000),
    ("Cloud Migration", 5, 300_000),
    ("Mobile App MVP", 2, 200_000),
    ("SEO Optimization", 1, 50_000),
    ("Database Architecture", 3, 120_000),
];

/// Insert the sample pipeline if the store has no projects.
///
/// Returns the number of projects inserted.
pub fn seed_if_empty(store: &StateStore) -> anyhow::Result<usize> {
    if !store.is_empty()? {
        return Ok(0);
    }
    for (title, deadline_days, revenue) in SAMPLE_PROJECTS {
        let valid = NewProject::new(title, deadline_days, revenue).validate()?;
        store.create_project(&valid)?;
    }
    Ok(SAMPLE_PROJECTS.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_fresh_store_once() {
        let store = StateStore::open_in_memory().unwrap();

        assert_eq!(seed_if_empty(&store).unwrap(), 7);
        assert_eq!(seed_if_empty(&store).unwrap(), 0);

        let projects = store.list_projects().unwrap();
        assert_eq!(projects.len(), 7);
        assert_eq!(projects[3].title, "Cloud Migration");
        assert!(projects.iter().all(|p| p.scheduled_day.is_none()));
    }

    #[test]
    fn leaves_existing_pipeline_alone() {
        let store = StateStore::open_in_memory().unwrap();
        let valid = NewProject::new("Existing", 1, 1).validate().unwrap();
        store.create_project(&valid).unwrap();

        assert_eq!(seed_if_empty(&store).unwrap(), 0);
        assert_eq!(store.list_projects().unwrap().len(), 1);
    }
}
