//! Deploy Dash - client library and web dashboard for the Deploy API
//!
//! This library wraps the Deploy platform's HTTP API (projects, deployments,
//! analytics, user info), exposes the deployment progress stream as a typed
//! event sequence, and ships a small axum server for the browser dashboard.

pub mod adapters;
pub mod api;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod progress;
pub mod traits;

pub use api::{DeployClient, API_BASE};
pub use error::ApiError;
