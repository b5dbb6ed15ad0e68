//! Web dashboard for the Deploy API.
//!
//! Serves a single static HTML page and its fixed-path assets, with the
//! in-browser copy of the client library embedded. No server-rendered
//! dynamic content; the access token lives entirely in the browser.

pub mod assets;
pub mod server;

pub use server::{start_dashboard_server, start_dashboard_server_on};
