use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Deployment, EnvVars};

/// Source repository descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub id: i64,
    pub owner: String,
    pub name: String,
}

/// Link between a project and its source repository.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Git {
    pub repository: Repository,
    pub entrypoint: String,
    #[serde(default)]
    pub production_branch: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A Deploy project.
///
/// List responses omit `productionDeployment`; detail responses include it
/// when one exists. One record covers both shapes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub git: Option<Git>,
    #[serde(default)]
    pub has_production_deployment: bool,
    #[serde(default)]
    pub env_vars: EnvVars,
    #[serde(default)]
    pub production_deployment: Option<Deployment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
