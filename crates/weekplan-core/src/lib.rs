//! weekplan-core — shared domain primitives for weekplan.
//!
//! Holds the types every other crate agrees on: the five-day working
//! horizon, [`Day`], [`Placement`], project creation input and its
//! validation, and the daemon's TOML configuration.

pub mod config;
pub mod types;
pub mod validation;

pub use config::{ConfigError, DaemonConfig};
pub use types::*;
pub use validation::{NewProject, ValidProject, ValidationError};
