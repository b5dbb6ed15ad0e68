use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::EnvVars;

/// One versioned release of a project's code to the hosting platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub id: String,
    /// Source URL the deployment was created from
    pub url: String,
    /// Related commit, shape decided by the linked repository provider
    #[serde(default)]
    pub related_commit: Option<Value>,
    #[serde(default)]
    pub domain_mappings: Vec<DomainMapping>,
    pub project_id: String,
    #[serde(default)]
    pub env_vars: EnvVars,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Association between a deployment and a custom domain name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DomainMapping {
    pub domain: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
