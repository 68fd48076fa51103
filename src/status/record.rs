//! Persisted status record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point-in-time record of one build event, success or failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// When the event happened.
    pub timestamp: DateTime<Utc>,
    /// Commit of the source repository under test.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_commit_sha: Option<String>,
    /// Commit of the dependent project under test.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependent_project_commit_sha: Option<String>,
}

/// The full status history persisted in the issue body.
///
/// Exactly one record is embedded per issue. `first_failure` marks the start
/// of the currently open failure streak and is cleared whenever a success
/// closes the issue; `last_failure` and `last_success` each track the most
/// recent event of their polarity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRecord {
    /// When this record was written.
    pub updated_at: DateTime<Utc>,
    /// Whether the run that produced this record failed.
    pub is_failure: bool,
    /// Repository whose CI produced the run.
    pub repository: String,
    /// Identifier of the CI run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<u64>,
    /// Commit of the source repository under test.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_commit_sha: Option<String>,
    /// Commit of the dependent project under test.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependent_project_commit_sha: Option<String>,
    /// Start of the current failure streak, if one is open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_failure: Option<Snapshot>,
    /// Most recent failure event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_failure: Option<Snapshot>,
    /// Most recent success event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_success: Option<Snapshot>,
}
