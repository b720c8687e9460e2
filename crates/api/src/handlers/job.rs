//! Read-only handlers for the `/jobs` resource.
//!
//! Jobs are only ever created by [`run`](super::run::run_playbook).

use autosim_core::error::CoreError;
use autosim_core::types::DbId;
use autosim_db::models::job::Job;
use autosim_db::repositories::JobRepo;
use axum::extract::State;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::AppPath;
use crate::handlers::playbook::find_playbook;
use crate::state::AppState;

/// GET /jobs
///
/// Newest job first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Job>>> {
    let jobs = JobRepo::list(&state.pool).await?;
    Ok(Json(jobs))
}

/// GET /jobs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Job>> {
    let job = JobRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Job", id }))?;
    Ok(Json(job))
}

/// GET /playbooks/{id}/jobs
pub async fn list_by_playbook(
    State(state): State<AppState>,
    AppPath(playbook_id): AppPath<DbId>,
) -> AppResult<Json<Vec<Job>>> {
    find_playbook(&state.pool, playbook_id).await?;
    let jobs = JobRepo::list_by_playbook(&state.pool, playbook_id).await?;
    Ok(Json(jobs))
}
