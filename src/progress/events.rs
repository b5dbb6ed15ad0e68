use serde::{Deserialize, Serialize};

use crate::models::Deployment;

/// One unit of streamed feedback during a deployment operation.
///
/// Tagged on the wire by the `type` field. A `success` event carries the
/// full deployment record, with its timestamps normalized like any other
/// deserialized [`Deployment`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DeployProgress {
    /// Source file load progress
    Load { url: String, seen: u64, total: u64 },
    /// The upload phase finished
    UploadComplete,
    /// Terminal event: the created deployment
    Success(Deployment),
}
