//! weekplan-state — embedded project store for weekplan.
//!
//! Backed by [redb](https://docs.rs/redb), provides persistent and in-memory
//! storage for the project pipeline.
//!
//! # Architecture
//!
//! Projects are JSON-serialized into redb's `&[u8]` value column, keyed by
//! their numeric id so a table scan yields them in id order. A metadata
//! table holds the id counter.
//!
//! Schedule generation goes through [`StateStore::replace_schedule`], which
//! reads the pipeline, clears every scheduled day and writes the new week
//! inside a single write transaction. redb admits one writer at a time and
//! readers work on snapshots, so a reader sees either the previous week or
//! the new one, never a blend.
//!
//! The `StateStore` is `Clone` + `Send` + `Sync` (backed by `Arc<Database>`)
//! and can be shared across async tasks.

pub mod error;
pub mod store;
pub mod tables;
pub mod types;

pub use error::{StateError, StateResult};
pub use store::StateStore;
pub use types::*;
