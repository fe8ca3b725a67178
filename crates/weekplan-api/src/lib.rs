//! weekplan-api — REST API for weekplan.
//!
//! Provides axum route handlers for managing the project pipeline and
//! generating the weekly schedule.
//!
//! # API Routes
//!
//! | Method | Path | Description |
//! |---|---|---|
//! | GET | `/api/projects` | List all projects |
//! | POST | `/api/projects` | Create a project |
//! | GET | `/api/projects/{id}` | Get a project |
//! | DELETE | `/api/projects/{id}` | Delete a project |
//! | POST | `/api/projects/schedule` | Generate and commit the week |
//! | GET | `/api/projects/schedule/preview` | Compute the week without committing |
//! | GET | `/api/summary` | Pipeline totals |
//! | GET | `/healthz` | Liveness probe |

pub mod handlers;

use axum::Router;
use axum::routing::{get, post};
use weekplan_scheduler::Scheduler;
use weekplan_state::StateStore;

/// Shared state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    pub store: StateStore,
    pub scheduler: Scheduler,
}

impl ApiState {
    pub fn new(store: StateStore) -> Self {
        Self {
            scheduler: Scheduler::new(store.clone()),
            store,
        }
    }
}

/// Build the complete API router.
pub fn build_router(store: StateStore) -> Router {
    let api_state = ApiState::new(store);

    let api_routes = Router::new()
        .route("/projects", get(handlers::list_projects).post(handlers::create_project))
        .route("/projects/schedule", post(handlers::generate_schedule))
        .route("/projects/schedule/preview", get(handlers::preview_schedule))
        .route("/projects/{id}", get(handlers::get_project).delete(handlers::delete_project))
        .route("/summary", get(handlers::summary))
        .with_state(api_state);

    Router::new()
        .nest("/api", api_routes)
        .route("/healthz", get(handlers::healthz))
}
