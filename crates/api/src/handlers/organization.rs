//! Handlers for the `/orgs` resource.

use autosim_core::error::CoreError;
use autosim_core::types::DbId;
use autosim_core::validation;
use autosim_db::models::organization::{CreateOrganization, Organization, UpdateOrganization};
use autosim_db::repositories::OrganizationRepo;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{optional_json, AppJson, AppPath};
use crate::state::AppState;

/// POST /orgs
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateOrganization>,
) -> AppResult<(StatusCode, Json<Organization>)> {
    validation::check(&input)?;
    let org = OrganizationRepo::create(&state.pool, &input).await?;
    tracing::info!(organization_id = org.id, "Organization created");
    Ok((StatusCode::CREATED, Json(org)))
}

/// GET /orgs
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Organization>>> {
    let orgs = OrganizationRepo::list(&state.pool).await?;
    Ok(Json(orgs))
}

/// GET /orgs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Organization>> {
    let org = OrganizationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Organization",
            id,
        }))?;
    Ok(Json(org))
}

/// PUT /orgs/{id}
///
/// A missing body is treated as `{}` and returns the row unchanged.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    body: Bytes,
) -> AppResult<Json<Organization>> {
    let input: UpdateOrganization = optional_json(&body)?;
    let org = OrganizationRepo::update(&state.pool, id, &input.normalized())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Organization",
            id,
        }))?;
    Ok(Json(org))
}

/// DELETE /orgs/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = OrganizationRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(organization_id = id, "Organization deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Organization",
            id,
        }))
    }
}
