use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A custom domain registered with the platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub domain: String,
    /// Ownership verification token
    pub token: String,
    pub is_validated: bool,
    pub project_id: String,
    #[serde(default)]
    pub certificates: Vec<DomainCertificate>,
    #[serde(default)]
    pub provisioning_attempts: Vec<ProvisioningAttempt>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// TLS certificate issued for a custom domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DomainCertificate {
    pub cipher: String,
    pub provisioning_strategy: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One attempt at provisioning a certificate for a custom domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningAttempt {
    pub domain: String,
    pub cipher: String,
    #[serde(default)]
    pub error: Option<Value>,
    pub completed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
