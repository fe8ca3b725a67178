//! redb table definitions for the weekplan state store.

use redb::TableDefinition;

/// Projects keyed by id, values are JSON-serialized `Project`s.
pub const PROJECTS: TableDefinition<u64, &[u8]> = TableDefinition::new("projects");

/// Store metadata (counters) keyed by name.
pub const META: TableDefinition<&str, u64> = TableDefinition::new("meta");

/// `META` key holding the id the next created project receives.
pub const NEXT_PROJECT_ID: &str = "next_project_id";
