//! Repository for the `playbooks` table.

use autosim_core::types::DbId;
use sqlx::PgPool;

use crate::models::playbook::{CreatePlaybook, Playbook, UpdatePlaybook};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, organization_id, name, description, content, created_at, updated_at";

/// Provides CRUD operations for playbooks.
pub struct PlaybookRepo;

impl PlaybookRepo {
    /// Insert a new playbook, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePlaybook) -> Result<Playbook, sqlx::Error> {
        let query = format!(
            "INSERT INTO playbooks (organization_id, name, description, content)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Playbook>(&query)
            .bind(input.organization_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Find a playbook by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Playbook>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM playbooks WHERE id = $1");
        sqlx::query_as::<_, Playbook>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all playbooks in ascending ID order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Playbook>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM playbooks ORDER BY id ASC");
        sqlx::query_as::<_, Playbook>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a playbook. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePlaybook,
    ) -> Result<Option<Playbook>, sqlx::Error> {
        let query = format!(
            "UPDATE playbooks SET
                organization_id = COALESCE($2, organization_id),
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                content = COALESCE($5, content)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Playbook>(&query)
            .bind(id)
            .bind(input.organization_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// Delete a playbook by ID. Returns `true` if a row was removed.
    ///
    /// Jobs recorded against the playbook cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM playbooks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
