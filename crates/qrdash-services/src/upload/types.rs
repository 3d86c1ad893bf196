//! Types for the asset upload workflow

use bytes::Bytes;
use qrdash_storage::StorageError;
use serde::{Deserialize, Serialize};

/// A single upload, alive only for the duration of the call.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub payload: Bytes,
    /// Only the extension is used.
    pub original_name: String,
    /// Storage prefix, used verbatim.
    pub namespace: String,
}

impl UploadRequest {
    pub fn new(
        payload: impl Into<Bytes>,
        original_name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            payload: payload.into(),
            original_name: original_name.into(),
            namespace: namespace.into(),
        }
    }
}

/// Result of a successful upload.
///
/// The service keeps no reference to it; callers persist `public_url`
/// themselves if they need it later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAsset {
    /// Storage key, `{namespace}/{unique-name}`
    pub path: String,
    pub public_url: String,
}

/// Upload errors
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Invalid upload request: {0}")]
    InvalidRequest(String),

    #[error("Payload of {size} bytes exceeds the limit of {limit} bytes")]
    PayloadTooLarge { size: usize, limit: usize },

    /// The backing store refused or failed the write; carries its error unchanged.
    #[error("Storage write failed: {0}")]
    StorageWrite(#[source] StorageError),
}
