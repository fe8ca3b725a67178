//! Validation of project creation input.
//!
//! Bad deadlines and negative revenue are rejected here, before a
//! project is ever stored, so the scheduler only sees well-formed rows
//! (it still clamps deadlines for rows written by older builds).

use serde::{Deserialize, Serialize};

use crate::types::HORIZON_DAYS;

/// A rejected field of a project creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Name of the offending field, as it appears on the wire.
    pub field: &'static str,
    /// Human-readable description.
    pub message: &'static str,
}

impl ValidationError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Request body for creating a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub deadline_days: i64,
    pub revenue: i64,
}

/// A project creation request that passed validation.
///
/// Only obtainable through [`NewProject::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProject {
    title: String,
    deadline_days: u8,
    revenue: u64,
}

impl ValidProject {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn deadline_days(&self) -> u8 {
        self.deadline_days
    }

    pub fn revenue(&self) -> u64 {
        self.revenue
    }
}

impl NewProject {
    pub fn new(title: impl Into<String>, deadline_days: i64, revenue: i64) -> Self {
        Self {
            title: title.into(),
            deadline_days,
            revenue,
        }
    }

    /// Check the request, reporting the first offending field.
    ///
    /// Fields are checked in wire order: title, deadline, revenue.
    pub fn validate(self) -> Result<ValidProject, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::new("title", "Title is required"));
        }
        if self.deadline_days < 1 {
            return Err(ValidationError::new(
                "deadlineDays",
                "Deadline must be at least 1 day",
            ));
        }
        if self.deadline_days > i64::from(HORIZON_DAYS) {
            return Err(ValidationError::new(
                "deadlineDays",
                "Max deadline for a week is 5 days",
            ));
        }
        let revenue = u64::try_from(self.revenue)
            .map_err(|_| ValidationError::new("revenue", "Revenue must be positive"))?;

        Ok(ValidProject {
            title: title.to_string(),
            deadline_days: self.deadline_days as u8,
            revenue,
        })
    }
}
