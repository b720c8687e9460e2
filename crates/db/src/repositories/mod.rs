//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod inventory_repo;
pub mod job_repo;
pub mod organization_repo;
pub mod playbook_repo;

pub use inventory_repo::InventoryRepo;
pub use job_repo::JobRepo;
pub use organization_repo::OrganizationRepo;
pub use playbook_repo::PlaybookRepo;
