//! Job entity model and DTOs for the simulated run workflow.

use autosim_core::document::Document;
use autosim_core::simulation::{JobStatus, SimulatedResult};
use autosim_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `jobs` table. Jobs are never updated after insert.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Job {
    pub id: DbId,
    pub organization_id: DbId,
    pub playbook_id: DbId,
    pub inventory_id: Option<DbId>,
    #[sqlx(try_from = "String")]
    pub status: JobStatus,
    pub started_at: Timestamp,
    pub finished_at: Timestamp,
    pub extra_vars: serde_json::Value,
    pub result: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `POST /playbooks/{id}/run`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunPlaybook {
    pub inventory_id: Option<DbId>,
    pub organization_id: Option<DbId>,
    pub extra_vars: Option<serde_json::Value>,
}

/// Fully resolved job row, ready to insert.
#[derive(Debug, Clone)]
pub struct CreateJob {
    pub organization_id: DbId,
    pub playbook_id: DbId,
    pub inventory_id: Option<DbId>,
    pub status: JobStatus,
    pub started_at: Timestamp,
    pub finished_at: Timestamp,
    pub extra_vars: Document,
    pub result: SimulatedResult,
}
