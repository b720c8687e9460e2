//! Handlers for the `/playbooks` resource.

use autosim_core::error::CoreError;
use autosim_core::types::DbId;
use autosim_core::validation;
use autosim_db::models::playbook::{CreatePlaybook, Playbook, UpdatePlaybook};
use autosim_db::repositories::PlaybookRepo;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{optional_json, AppJson, AppPath};
use crate::state::AppState;

/// POST /playbooks
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePlaybook>,
) -> AppResult<(StatusCode, Json<Playbook>)> {
    validation::check(&input)?;
    let playbook = PlaybookRepo::create(&state.pool, &input).await?;
    tracing::info!(
        playbook_id = playbook.id,
        organization_id = playbook.organization_id,
        "Playbook created",
    );
    Ok((StatusCode::CREATED, Json(playbook)))
}

/// GET /playbooks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Playbook>>> {
    let playbooks = PlaybookRepo::list(&state.pool).await?;
    Ok(Json(playbooks))
}

/// GET /playbooks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Playbook>> {
    let playbook = find_playbook(&state.pool, id).await?;
    Ok(Json(playbook))
}

/// PUT /playbooks/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    body: Bytes,
) -> AppResult<Json<Playbook>> {
    let input: UpdatePlaybook = optional_json(&body)?;
    let playbook = PlaybookRepo::update(&state.pool, id, &input.normalized())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Playbook",
            id,
        }))?;
    Ok(Json(playbook))
}

/// DELETE /playbooks/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PlaybookRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(playbook_id = id, "Playbook deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Playbook",
            id,
        }))
    }
}

/// Fetch a playbook or fail with `NotFound`.
pub(crate) async fn find_playbook(pool: &sqlx::PgPool, id: DbId) -> AppResult<Playbook> {
    PlaybookRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Playbook",
            id,
        }))
}
