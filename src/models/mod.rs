//! Value records produced by deserializing Deploy API responses.
//!
//! Every timestamp arrives from the server as a string and is parsed into
//! a [`chrono::DateTime<Utc>`] during deserialization, at every nesting
//! level. Loosely-typed server fields stay as [`serde_json::Value`].
//! Wire names are camelCase throughout.

pub mod analytics;
pub mod deployment;
pub mod domain;
pub mod project;
pub mod request;
pub mod user;

pub use analytics::{AnalyticStat, Analytics};
pub use deployment::{Deployment, DomainMapping};
pub use domain::{Domain, DomainCertificate, ProvisioningAttempt};
pub use project::{Git, Project, Repository};
pub use request::{AnalyticsInterval, Paging, ProjectEdit};
pub use user::User;

use std::collections::HashMap;

/// Environment variables attached to a project or deployment.
pub type EnvVars = HashMap<String, String>;
