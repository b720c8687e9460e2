//! Handlers for the `/inventories` resource.

use autosim_core::error::CoreError;
use autosim_core::types::DbId;
use autosim_core::validation;
use autosim_db::models::inventory::{CreateInventory, Inventory, UpdateInventory};
use autosim_db::repositories::InventoryRepo;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{optional_json, AppJson, AppPath};
use crate::state::AppState;

/// POST /inventories
///
/// `variables` must be a JSON object (or a string encoding one) when given.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateInventory>,
) -> AppResult<(StatusCode, Json<Inventory>)> {
    validation::check(&input)?;
    let input = input.normalized()?;
    let inventory = InventoryRepo::create(&state.pool, &input).await?;
    tracing::info!(
        inventory_id = inventory.id,
        organization_id = inventory.organization_id,
        "Inventory created",
    );
    Ok((StatusCode::CREATED, Json(inventory)))
}

/// GET /inventories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Inventory>>> {
    let inventories = InventoryRepo::list(&state.pool).await?;
    Ok(Json(inventories))
}

/// GET /inventories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Inventory>> {
    let inventory = InventoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Inventory",
            id,
        }))?;
    Ok(Json(inventory))
}

/// PUT /inventories/{id}
///
/// Malformed `variables` are ignored rather than rejected.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    body: Bytes,
) -> AppResult<Json<Inventory>> {
    let input: UpdateInventory = optional_json(&body)?;
    let inventory = InventoryRepo::update(&state.pool, id, &input.normalized())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Inventory",
            id,
        }))?;
    Ok(Json(inventory))
}

/// DELETE /inventories/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = InventoryRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(inventory_id = id, "Inventory deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Inventory",
            id,
        }))
    }
}
