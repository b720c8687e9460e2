//! Organization entity model and DTOs.

use autosim_core::types::{DbId, Timestamp};
use autosim_core::validation::non_empty;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `organizations` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Organization {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new organization.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateOrganization {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name is required")
    )]
    pub name: Option<String>,
    pub description: Option<String>,
}

/// DTO for updating an existing organization. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOrganization {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateOrganization {
    /// Drop empty strings so they leave the stored value untouched.
    pub fn normalized(self) -> Self {
        Self {
            name: non_empty(self.name),
            description: non_empty(self.description),
        }
    }
}
