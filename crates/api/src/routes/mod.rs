pub mod health;
pub mod inventory;
pub mod job;
pub mod organization;
pub mod playbook;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /orgs                          list, create
/// /orgs/{id}                     get, update, delete
///
/// /inventories                   list, create
/// /inventories/{id}              get, update, delete
///
/// /playbooks                     list, create
/// /playbooks/{id}                get, update, delete
/// /playbooks/{id}/run            simulate a run, record a job (POST)
/// /playbooks/{id}/jobs           jobs recorded for the playbook (GET)
///
/// /jobs                          list (newest first)
/// /jobs/{id}                     get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/orgs", organization::router())
        .nest("/inventories", inventory::router())
        .nest("/playbooks", playbook::router())
        .nest("/jobs", job::router())
}
