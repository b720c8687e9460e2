//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO, validated before insert
//! - A `Deserialize` update DTO (all `Option` fields) for partial updates

pub mod inventory;
pub mod job;
pub mod organization;
pub mod playbook;
