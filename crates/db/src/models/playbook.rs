//! Playbook entity model and DTOs.

use autosim_core::types::{DbId, Timestamp};
use autosim_core::validation::non_empty;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `playbooks` table. `content` is opaque to this service.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Playbook {
    pub id: DbId,
    pub organization_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new playbook.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreatePlaybook {
    #[validate(required(message = "organization_id is required"))]
    pub organization_id: Option<DbId>,
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name is required")
    )]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(
        required(message = "content is required"),
        length(min = 1, message = "content is required")
    )]
    pub content: Option<String>,
}

/// DTO for updating an existing playbook. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePlaybook {
    pub organization_id: Option<DbId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
}

impl UpdatePlaybook {
    /// Drop empty strings so they leave the stored value untouched.
    pub fn normalized(self) -> Self {
        Self {
            organization_id: self.organization_id,
            name: non_empty(self.name),
            description: non_empty(self.description),
            content: non_empty(self.content),
        }
    }
}
