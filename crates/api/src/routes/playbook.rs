//! Route definitions for the `/playbooks` resource, including the run
//! action and the per-playbook job listing.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{job, playbook, run};
use crate::state::AppState;

/// Routes mounted at `/playbooks`.
///
/// ```text
/// GET    /             -> list
/// POST   /             -> create
/// GET    /{id}         -> get_by_id
/// PUT    /{id}         -> update
/// DELETE /{id}         -> delete
/// POST   /{id}/run     -> run_playbook
/// GET    /{id}/jobs    -> list_by_playbook
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(playbook::list).post(playbook::create))
        .route(
            "/{id}",
            get(playbook::get_by_id)
                .put(playbook::update)
                .delete(playbook::delete),
        )
        .route("/{id}/run", post(run::run_playbook))
        .route("/{id}/jobs", get(job::list_by_playbook))
}
