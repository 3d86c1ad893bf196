//! Asset upload service
//!
//! validate → name → write → resolve URL. One write per call, no retries and
//! no cleanup: a failed write leaves nothing behind on our side.

use std::sync::Arc;

use bytes::Bytes;
use qrdash_core::StorageConfig;
use qrdash_storage::keys::generate_storage_key;
use qrdash_storage::Storage;

use super::naming::{content_type_for, extension_of, Disambiguator};
use super::types::{StoredAsset, UploadError, UploadRequest};

/// Uploads payloads to a backing store and resolves their public URLs.
///
/// The store is injected at construction; clones share it.
#[derive(Clone)]
pub struct AssetUploadService {
    storage: Arc<dyn Storage>,
    max_payload_bytes: Option<usize>,
    sequence: &'static Disambiguator,
}

impl AssetUploadService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            max_payload_bytes: None,
            sequence: Disambiguator::process_wide(),
        }
    }

    /// Service with the payload limit taken from configuration.
    pub fn from_config(storage: Arc<dyn Storage>, config: &StorageConfig) -> Self {
        Self::new(storage).with_max_payload_bytes(config.max_upload_size_bytes())
    }

    /// Reject payloads larger than `limit` bytes; `None` disables the check.
    pub fn with_max_payload_bytes(mut self, limit: Option<usize>) -> Self {
        self.max_payload_bytes = limit;
        self
    }

    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// Store `payload` under `{namespace}/{disambiguator}.{extension}` and
    /// return its path and public URL.
    ///
    /// The namespace is not normalized: `"logos/"` yields `logos//{ts}.png`,
    /// which the stores reject as an invalid key.
    ///
    /// The URL is resolved only after the store acknowledged the write. Two
    /// calls with identical arguments produce two distinct assets.
    #[tracing::instrument(
        skip(self, payload),
        fields(size_bytes = payload.len(), backend = %self.storage.backend_type())
    )]
    pub async fn upload(
        &self,
        payload: Bytes,
        original_name: &str,
        namespace: &str,
    ) -> Result<StoredAsset, UploadError> {
        self.validate(&payload, namespace)?;

        let extension = extension_of(original_name);
        let path = generate_storage_key(
            namespace,
            &self.sequence.next_value().to_string(),
            extension,
        );

        self.storage
            .write(&path, payload, content_type_for(extension))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, path = %path, "Asset upload failed");
                UploadError::StorageWrite(e)
            })?;

        let public_url = self.storage.public_url(&path);

        tracing::info!(path = %path, public_url = %public_url, "Asset uploaded");

        Ok(StoredAsset { path, public_url })
    }

    /// [`upload`](Self::upload) taking the bundled request.
    pub async fn upload_request(&self, request: UploadRequest) -> Result<StoredAsset, UploadError> {
        self.upload(request.payload, &request.original_name, &request.namespace)
            .await
    }

    fn validate(&self, payload: &Bytes, namespace: &str) -> Result<(), UploadError> {
        if namespace.is_empty() {
            return Err(UploadError::InvalidRequest(
                "namespace must not be empty".to_string(),
            ));
        }

        if payload.is_empty() {
            return Err(UploadError::InvalidRequest(
                "payload must not be empty".to_string(),
            ));
        }

        if let Some(limit) = self.max_payload_bytes {
            if payload.len() > limit {
                return Err(UploadError::PayloadTooLarge {
                    size: payload.len(),
                    limit,
                });
            }
        }

        Ok(())
    }
}
