//! Simulated playbook execution.
//!
//! No playbook is actually executed. Every run finishes instantly with the
//! same successful outcome, which is what gets recorded on the job row.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Summary text recorded on every simulated run.
pub const SIMULATED_SUMMARY: &str = "Simulated run completed successfully";

/// Task counters reported by every simulated run.
pub const SIMULATED_CHANGED: u32 = 1;
pub const SIMULATED_FAILED: u32 = 0;
pub const SIMULATED_OK: u32 = 3;

/// Job outcome. Stored as lowercase TEXT in `jobs.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Successful,
}

impl JobStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Successful => "successful",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for JobStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "successful" => Ok(JobStatus::Successful),
            other => Err(CoreError::Internal(format!("unknown job status '{other}'"))),
        }
    }
}

/// The `result` document attached to a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatedResult {
    pub summary: String,
    pub changed: u32,
    pub failed: u32,
    pub ok: u32,
}

/// Everything a run produces before it is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedRun {
    pub status: JobStatus,
    pub started_at: Timestamp,
    pub finished_at: Timestamp,
    pub result: SimulatedResult,
}

/// Run a playbook, in the loosest sense of the word.
///
/// The run is synchronous and instantaneous, so both timestamps are `now`.
pub fn simulate_run(now: Timestamp) -> SimulatedRun {
    SimulatedRun {
        status: JobStatus::Successful,
        started_at: now,
        finished_at: now,
        result: SimulatedResult {
            summary: SIMULATED_SUMMARY.to_string(),
            changed: SIMULATED_CHANGED,
            failed: SIMULATED_FAILED,
            ok: SIMULATED_OK,
        },
    }
}

/// The organization a job is recorded under: the explicit override if the
/// caller gave one, otherwise the playbook's own organization.
pub fn resolve_organization(override_id: Option<DbId>, playbook_org: DbId) -> DbId {
    override_id.unwrap_or(playbook_org)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Utc;
    use serde_json::json;

    use super::*;

    #[test]
    fn run_is_instantaneous_and_successful() {
        let now = Utc::now();
        let run = simulate_run(now);
        assert_eq!(run.status, JobStatus::Successful);
        assert_eq!(run.started_at, now);
        assert_eq!(run.finished_at, now);
    }

    #[test]
    fn result_has_fixed_counters() {
        let run = simulate_run(Utc::now());
        assert_eq!(
            serde_json::to_value(&run.result).unwrap(),
            json!({
                "summary": "Simulated run completed successfully",
                "changed": 1,
                "failed": 0,
                "ok": 3,
            })
        );
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(JobStatus::Successful).unwrap(),
            json!("successful")
        );
        assert_eq!(JobStatus::Successful.to_string(), "successful");
    }

    #[test]
    fn status_reads_back_from_text() {
        assert_eq!(
            JobStatus::try_from("successful".to_string()).unwrap(),
            JobStatus::Successful
        );
        assert_matches!(
            JobStatus::try_from("queued".to_string()),
            Err(CoreError::Internal(msg)) if msg == "unknown job status 'queued'"
        );
    }

    #[test]
    fn organization_override_wins() {
        assert_eq!(resolve_organization(Some(7), 1), 7);
        assert_eq!(resolve_organization(None, 1), 1);
    }
}
