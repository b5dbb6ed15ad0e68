//! Dashboard binary entrypoint.

use std::net::SocketAddr;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use deploy_dash::dashboard::start_dashboard_server_on;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr: SocketAddr = std::env::var("DASH_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3030".to_string())
        .parse()?;

    let (handle, _addr) = start_dashboard_server_on(addr).await?;
    handle.await?;

    Ok(())
}
