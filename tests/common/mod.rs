//! Common test utilities for integration tests.
//!
//! Provides a mock-backed client builder and canned API response bodies
//! shared across the test binaries.
#![allow(dead_code)]

use bytes::Bytes;
use serde_json::{json, Value};

use deploy_dash::adapters::mock::{MockHttpClient, MockResponse};
use deploy_dash::traits::Response;
use deploy_dash::DeployClient;

/// Base URL used by mock-backed clients; never dialed.
pub const TEST_BASE: &str = "https://deploy.test/api";

/// Token used by every test client.
pub const TEST_TOKEN: &str = "test-token";

/// Build a client over a mock transport, returning both halves.
pub fn mock_client() -> (DeployClient<MockHttpClient>, MockHttpClient) {
    let http = MockHttpClient::new();
    let client =
        DeployClient::with_http_client(TEST_TOKEN, http.clone()).with_base_url(TEST_BASE);
    (client, http)
}

/// A mock JSON response with the given status.
pub fn json_response(status: u16, body: Value) -> MockResponse {
    MockResponse::Success(Response::new(status, Bytes::from(body.to_string())))
}

pub fn user_json() -> Value {
    json!({
        "id": "u1",
        "name": "Test User",
        "login": "testuser",
        "avatarUrl": "https://example.com/a.png",
        "githubId": 12345,
        "isAdmin": false,
        "isBlocked": false,
        "createdAt": "2023-01-01T00:00:00Z",
        "updatedAt": "2023-06-15T12:30:00Z"
    })
}

pub fn deployment_json(id: &str) -> Value {
    json!({
        "id": id,
        "url": "https://example.com/mod.ts",
        "relatedCommit": null,
        "domainMappings": [
            {
                "domain": format!("{}.deno.dev", id),
                "createdAt": "2023-02-01T00:00:00Z",
                "updatedAt": "2023-02-02T00:00:00Z"
            }
        ],
        "projectId": "p1",
        "envVars": {},
        "createdAt": "2023-01-01T00:00:00Z",
        "updatedAt": "2023-01-02T00:00:00Z"
    })
}

pub fn project_json(name: &str) -> Value {
    json!({
        "id": "p1",
        "name": name,
        "git": {
            "repository": {"id": 7, "owner": "me", "name": "repo"},
            "entrypoint": "main.ts",
            "productionBranch": null,
            "createdAt": "2022-12-01T00:00:00Z",
            "updatedAt": "2022-12-02T00:00:00Z"
        },
        "hasProductionDeployment": true,
        "envVars": {"A": "b"},
        "productionDeployment": deployment_json("d1"),
        "createdAt": "2023-01-01T00:00:00Z",
        "updatedAt": "2023-01-02T00:00:00Z"
    })
}

pub fn analytics_json() -> Value {
    json!({
        "stats": [
            {"project_id": "p1", "ts": "2023-01-01T00:00:00Z", "request_count": 10},
            {"project_id": "p1", "ts": "2023-01-01T01:00:00Z", "request_count": 25}
        ]
    })
}
