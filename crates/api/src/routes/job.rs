//! Route definitions for the read-only `/jobs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::job;
use crate::state::AppState;

/// Routes mounted at `/jobs`. There is no write route: jobs come from
/// `POST /playbooks/{id}/run`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(job::list))
        .route("/{id}", get(job::get_by_id))
}
