//! Client for the Deploy API.
//!
//! One authenticated HTTP call per public method. The generic request path
//! attaches the bearer token, parses the body as JSON and classifies the
//! status; each method then deserializes into its typed record, which is
//! where timestamp normalization happens.

use serde_json::{json, Value};
use tracing::debug;

use crate::adapters::ReqwestHttpClient;
use crate::error::ApiError;
use crate::models::{
    Analytics, AnalyticsInterval, Deployment, EnvVars, Paging, Project, ProjectEdit, User,
};
use crate::progress::{decode_progress, ProgressStream};
use crate::traits::{ByteStream, Headers, HttpClient};

/// Default base URL for the Deploy API.
pub const API_BASE: &str = "https://dash.deno.com/api";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// Client for the Deploy API.
///
/// Holds nothing but the access token, the base URL and the transport
/// handle; safe for concurrent use across independent calls.
#[derive(Debug, Clone)]
pub struct DeployClient<C: HttpClient = ReqwestHttpClient> {
    base_url: String,
    token: String,
    http: C,
}

impl DeployClient {
    /// Create a client for the production API with the given access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_http_client(token, ReqwestHttpClient::new())
    }
}

impl<C: HttpClient> DeployClient<C> {
    /// Create a client over a custom transport.
    pub fn with_http_client(token: impl Into<String>, http: C) -> Self {
        Self {
            base_url: API_BASE.to_string(),
            token: token.into(),
            http,
        }
    }

    /// Override the base URL, e.g. to point at a mock endpoint in tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn headers(&self, has_body: bool) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Authorization".to_string(), format!("Bearer {}", self.token));
        headers.insert("Accept".to_string(), "application/json".to_string());
        if has_body {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        headers
    }

    /// Generic request: serialize the body, send, parse the response as
    /// JSON and classify the status. The returned value is untouched at
    /// this layer.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let body_text = body.map(|b| b.to_string());
        let headers = self.headers(body_text.is_some());
        debug!(method = ?method, %url, "deploy api request");

        let response = match method {
            Method::Get => self.http.get(&url, &headers).await?,
            Method::Post => self.http.post(&url, body_text.as_deref(), &headers).await?,
            Method::Patch => self.http.patch(&url, body_text.as_deref(), &headers).await?,
            Method::Delete => self.http.delete(&url, &headers).await?,
        };

        let json: Value = serde_json::from_slice(&response.body)?;
        ApiError::check_status(response.status, json)
    }

    /// Generic streaming request: the raw body chunks come back without
    /// being read or parsed, regardless of HTTP status.
    async fn request_stream(&self, path: &str, body: Value) -> Result<ByteStream, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let body_text = body.to_string();
        let headers = self.headers(true);
        debug!(%url, "deploy api streaming request");

        let stream = self
            .http
            .post_stream(&url, Some(&body_text), &headers)
            .await?;
        Ok(stream)
    }

    /// Fetch the authorized user's info.
    pub async fn fetch_user(&self) -> Result<User, ApiError> {
        let value = self.request(Method::Get, "/user", None).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Fetch the user's projects, in server order.
    pub async fn fetch_projects(&self) -> Result<Vec<Project>, ApiError> {
        let value = self.request(Method::Get, "/projects", None).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Fetch a single project by id.
    pub async fn fetch_project(&self, id: &str) -> Result<Project, ApiError> {
        let value = self
            .request(Method::Get, &format!("/projects/{}", id), None)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Fetch a project's deployments, paged. Paging values travel to the
    /// server verbatim.
    pub async fn fetch_deployments(
        &self,
        id: &str,
        paging: Paging,
    ) -> Result<Vec<Deployment>, ApiError> {
        let path = format!(
            "/projects/{}/deployments?page={}&limit={}",
            id, paging.page, paging.limit
        );
        let value = self.request(Method::Get, &path, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Fetch a project's analytics for the given interval.
    pub async fn fetch_analytics(
        &self,
        project_id: &str,
        interval: AnalyticsInterval,
    ) -> Result<Analytics, ApiError> {
        let path = format!("/projects/{}/analytics?interval={}", project_id, interval);
        let value = self.request(Method::Get, &path, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Create a new project.
    pub async fn create_project(
        &self,
        name: &str,
        env_vars: EnvVars,
    ) -> Result<Project, ApiError> {
        let body = json!({ "name": name, "envVars": env_vars });
        let value = self.request(Method::Post, "/projects", Some(body)).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Delete a project by id. Success is the absence of an error.
    pub async fn delete_project(&self, id: &str) -> Result<(), ApiError> {
        self.request(Method::Delete, &format!("/projects/{}", id), None)
            .await?;
        Ok(())
    }

    /// Edit a project. Success is the absence of an error.
    pub async fn edit_project(&self, id: &str, edit: ProjectEdit) -> Result<(), ApiError> {
        let body = serde_json::to_value(edit)?;
        self.request(Method::Patch, &format!("/projects/{}", id), Some(body))
            .await?;
        Ok(())
    }

    /// Create a deployment for a project and follow its progress.
    ///
    /// Issues one POST to the deployments_stream endpoint and returns the
    /// live event sequence. The sequence ends when the server closes the
    /// response; dropping it cancels the request.
    pub async fn deploy(
        &self,
        id: &str,
        url: &str,
        production: bool,
    ) -> Result<ProgressStream, ApiError> {
        let body = json!({ "url": url, "production": production });
        let chunks = self
            .request_stream(&format!("/projects/{}/deployments_stream", id), body)
            .await?;
        Ok(decode_progress(chunks))
    }
}
