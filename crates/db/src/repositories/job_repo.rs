//! Repository for the `jobs` table.
//!
//! Jobs are append-only: there is no update or delete here.

use autosim_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::job::{CreateJob, Job};

/// Column list for `jobs` queries.
const COLUMNS: &str = "\
    id, organization_id, playbook_id, inventory_id, status, \
    started_at, finished_at, extra_vars, result, \
    created_at, updated_at";

/// Provides insert and read operations for jobs.
pub struct JobRepo;

impl JobRepo {
    /// Record a finished job, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateJob) -> Result<Job, sqlx::Error> {
        let query = format!(
            "INSERT INTO jobs \
                (organization_id, playbook_id, inventory_id, status, \
                 started_at, finished_at, extra_vars, result) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(input.organization_id)
            .bind(input.playbook_id)
            .bind(input.inventory_id)
            .bind(input.status.as_str())
            .bind(input.started_at)
            .bind(input.finished_at)
            .bind(Json(&input.extra_vars))
            .bind(Json(&input.result))
            .fetch_one(pool)
            .await
    }

    /// Find a job by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Job>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM jobs WHERE id = $1");
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all jobs, newest (highest ID) first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Job>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM jobs ORDER BY id DESC");
        sqlx::query_as::<_, Job>(&query).fetch_all(pool).await
    }

    /// List the jobs recorded for one playbook, newest first.
    pub async fn list_by_playbook(
        pool: &PgPool,
        playbook_id: DbId,
    ) -> Result<Vec<Job>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM jobs WHERE playbook_id = $1 ORDER BY id DESC");
        sqlx::query_as::<_, Job>(&query)
            .bind(playbook_id)
            .fetch_all(pool)
            .await
    }
}
