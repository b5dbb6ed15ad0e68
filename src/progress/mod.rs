//! Deployment progress stream decoding.
//!
//! The deployments_stream endpoint answers with a sequence of JSON-object
//! byte chunks rather than a single document. This module republishes that
//! stream as typed [`DeployProgress`] events.
//!
//! # Module structure
//! - `events` - the [`DeployProgress`] tagged union
//! - `decoder` - the per-chunk decode loop ([`decode_progress`])

mod decoder;
mod events;

pub use decoder::{decode_chunk, decode_progress, ProgressStream};
pub use events::DeployProgress;
