//! Dashboard server implementation.
//!
//! Routes fixed paths to embedded assets. Content types for the stylesheet
//! and scripts are set explicitly rather than inferred.

use std::net::SocketAddr;

use axum::{
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};

use super::assets::{CLIENT_JS, CODEJAR_JS, DEPLOY_API_JS, INDEX_HTML, STYLE_CSS};

/// Build the dashboard router.
pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/style.css", get(style_handler))
        .route("/deploy_api.js", get(deploy_api_handler))
        .route("/codejar.js", get(codejar_handler))
        .route("/client.js", get(client_handler))
        .layer(cors)
}

/// Start the dashboard server on the default address.
pub async fn start_dashboard_server() -> color_eyre::Result<(JoinHandle<()>, SocketAddr)> {
    start_dashboard_server_on("127.0.0.1:3030".parse().unwrap()).await
}

/// Start the dashboard server on a specific address.
///
/// Returns the serve task's JoinHandle and the actual bound address, so
/// tests can bind to port 0.
pub async fn start_dashboard_server_on(
    addr: SocketAddr,
) -> color_eyre::Result<(JoinHandle<()>, SocketAddr)> {
    let app = router();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    tracing::info!("Dashboard listening on http://{}", actual_addr);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Dashboard server error: {}", e);
        }
    });

    Ok((handle, actual_addr))
}

async fn index_handler() -> impl IntoResponse {
    Html(INDEX_HTML)
}

async fn style_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLE_CSS)
}

async fn deploy_api_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript")], DEPLOY_API_JS)
}

async fn codejar_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript")], CODEJAR_JS)
}

async fn client_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript")], CLIENT_JS)
}
