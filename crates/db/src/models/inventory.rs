//! Inventory entity model and DTOs.

use autosim_core::document::Document;
use autosim_core::error::CoreError;
use autosim_core::types::{DbId, Timestamp};
use autosim_core::validation::non_empty;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `inventories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Inventory {
    pub id: DbId,
    pub organization_id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// NOT NULL in the database; defaults to `{}`.
    pub variables: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new inventory.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateInventory {
    #[validate(required(message = "organization_id is required"))]
    pub organization_id: Option<DbId>,
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name is required")
    )]
    pub name: Option<String>,
    pub description: Option<String>,
    pub variables: Option<serde_json::Value>,
}

impl CreateInventory {
    /// Coerce `variables` into a JSON object, rejecting anything that is not
    /// one. Absent variables stay `None` and default to `{}` on insert.
    pub fn normalized(self) -> Result<Self, CoreError> {
        let variables = self
            .variables
            .map(|v| Document::parse("variables", v).map(Document::into_value))
            .transpose()?;
        Ok(Self { variables, ..self })
    }
}

/// DTO for updating an existing inventory. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInventory {
    pub organization_id: Option<DbId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub variables: Option<serde_json::Value>,
}

impl UpdateInventory {
    /// Drop empty strings and malformed `variables` so they leave the stored
    /// value untouched. Well-formed variables replace the stored map.
    pub fn normalized(self) -> Self {
        Self {
            organization_id: self.organization_id,
            name: non_empty(self.name),
            description: non_empty(self.description),
            variables: Document::parse_lenient(self.variables).map(Document::into_value),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn create_decodes_string_variables() {
        let input = CreateInventory {
            organization_id: Some(1),
            name: Some("web".into()),
            description: None,
            variables: Some(json!("{\"port\": 80}")),
        };
        let input = input.normalized().unwrap();
        assert_eq!(input.variables, Some(json!({"port": 80})));
    }

    #[test]
    fn create_rejects_non_object_variables() {
        let input = CreateInventory {
            organization_id: Some(1),
            name: Some("web".into()),
            description: None,
            variables: Some(json!([1, 2, 3])),
        };
        assert_matches!(input.normalized(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn update_ignores_malformed_variables() {
        let input = UpdateInventory {
            name: Some(String::new()),
            variables: Some(json!(17)),
            ..Default::default()
        };
        let input = input.normalized();
        assert_eq!(input.name, None);
        assert_eq!(input.variables, None);
    }
}
