//! Error types for the weekplan state store.

use thiserror::Error;
use weekplan_core::{Day, ProjectId};

/// Result type alias for state store operations.
pub type StateResult<T> = Result<T, StateError>;

/// Errors that can occur during state store operations.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("failed to open database: {0}")]
    Open(String),

    #[error("transaction error: {0}")]
    Transaction(String),

    #[error("table error: {0}")]
    Table(String),

    #[error("read error: {0}")]
    Read(String),

    #[error("write error: {0}")]
    Write(String),

    #[error("serialization error: {0}")]
    Serialize(String),

    #[error("deserialization error: {0}")]
    Deserialize(String),

    /// No id is left after this one for the next project.
    #[error("project id {0} exhausts the id space")]
    IdExhausted(ProjectId),

    /// A schedule named a project that is not in the store.
    #[error("schedule references unknown project {0}")]
    UnknownProject(ProjectId),

    /// A schedule put two projects on the same day.
    #[error("schedule puts projects {first} and {second} on {day}")]
    SlotConflict {
        day: Day,
        first: ProjectId,
        second: ProjectId,
    },
}
