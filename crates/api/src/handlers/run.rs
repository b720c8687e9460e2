//! The run workflow: `POST /playbooks/{id}/run`.
//!
//! Looks up the playbook, fabricates a successful result and records it as
//! a job. Each step is a separate statement on the shared pool; nothing is
//! queued and nothing is retried.

use autosim_core::document::Document;
use autosim_core::error::CoreError;
use autosim_core::simulation::{resolve_organization, simulate_run};
use autosim_core::types::DbId;
use autosim_db::models::job::{CreateJob, Job, RunPlaybook};
use autosim_db::repositories::{InventoryRepo, JobRepo};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use crate::error::{AppError, AppResult};
use crate::extract::{optional_json, AppPath};
use crate::handlers::playbook::find_playbook;
use crate::state::AppState;

/// POST /playbooks/{id}/run
///
/// The body is optional; an empty body behaves like `{}`. A malformed
/// `extra_vars` is recorded as `{}`.
pub async fn run_playbook(
    State(state): State<AppState>,
    AppPath(playbook_id): AppPath<DbId>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Job>)> {
    let input: RunPlaybook = optional_json(&body)?;

    let playbook = find_playbook(&state.pool, playbook_id).await?;

    if let Some(inventory_id) = input.inventory_id {
        InventoryRepo::find_by_id(&state.pool, inventory_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Inventory",
                id: inventory_id,
            }))?;
    }

    let run = simulate_run(Utc::now());
    let job = JobRepo::create(
        &state.pool,
        &CreateJob {
            organization_id: resolve_organization(input.organization_id, playbook.organization_id),
            playbook_id: playbook.id,
            inventory_id: input.inventory_id,
            status: run.status,
            started_at: run.started_at,
            finished_at: run.finished_at,
            extra_vars: Document::or_empty(input.extra_vars),
            result: run.result,
        },
    )
    .await?;

    tracing::info!(
        job_id = job.id,
        playbook_id = job.playbook_id,
        organization_id = job.organization_id,
        inventory_id = ?job.inventory_id,
        status = %job.status,
        "Playbook run recorded",
    );

    Ok((StatusCode::CREATED, Json(job)))
}
