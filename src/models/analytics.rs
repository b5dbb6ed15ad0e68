use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Analytics response for a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Analytics {
    pub stats: Vec<AnalyticStat>,
}

/// One analytics bucket.
///
/// The server sends `project_id` and `request_count` in snake_case; the
/// aliases accept that form while the record reads and writes camelCase
/// like every other entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticStat {
    #[serde(alias = "project_id")]
    pub project_id: String,
    pub ts: DateTime<Utc>,
    #[serde(alias = "request_count")]
    pub request_count: u64,
}
