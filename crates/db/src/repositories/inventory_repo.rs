//! Repository for the `inventories` table.

use autosim_core::types::DbId;
use sqlx::PgPool;

use crate::models::inventory::{CreateInventory, Inventory, UpdateInventory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, organization_id, name, description, variables, created_at, updated_at";

/// Provides CRUD operations for inventories.
pub struct InventoryRepo;

impl InventoryRepo {
    /// Insert a new inventory, returning the created row.
    ///
    /// If `variables` is `None` in the input, defaults to `{}`.
    pub async fn create(pool: &PgPool, input: &CreateInventory) -> Result<Inventory, sqlx::Error> {
        let query = format!(
            "INSERT INTO inventories (organization_id, name, description, variables)
             VALUES ($1, $2, $3, COALESCE($4, '{{}}'::jsonb))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inventory>(&query)
            .bind(input.organization_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.variables)
            .fetch_one(pool)
            .await
    }

    /// Find an inventory by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Inventory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventories WHERE id = $1");
        sqlx::query_as::<_, Inventory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all inventories in ascending ID order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Inventory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventories ORDER BY id ASC");
        sqlx::query_as::<_, Inventory>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update an inventory. Only non-`None` fields in `input` are applied;
    /// `variables` replaces the stored map wholesale.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInventory,
    ) -> Result<Option<Inventory>, sqlx::Error> {
        let query = format!(
            "UPDATE inventories SET
                organization_id = COALESCE($2, organization_id),
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                variables = COALESCE($5, variables)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inventory>(&query)
            .bind(id)
            .bind(input.organization_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.variables)
            .fetch_optional(pool)
            .await
    }

    /// Delete an inventory by ID. Returns `true` if a row was removed.
    ///
    /// Jobs that referenced the inventory keep their row with
    /// `inventory_id` set to NULL.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM inventories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
