//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `autosim_db` and
//! map errors via [`AppError`](crate::error::AppError).

pub mod inventory;
pub mod job;
pub mod organization;
pub mod playbook;
pub mod run;
