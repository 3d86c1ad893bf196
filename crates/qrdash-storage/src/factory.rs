#[cfg(feature = "storage-local")]
use crate::LocalStorage;
#[cfg(feature = "storage-rest")]
use crate::RestStorage;
#[cfg(feature = "storage-s3")]
use crate::S3Storage;
use crate::{Storage, StorageBackend, StorageError, StorageResult};
use qrdash_core::StorageConfig;
use std::sync::Arc;

/// Create a storage backend based on configuration
pub async fn create_storage(config: &StorageConfig) -> StorageResult<Arc<dyn Storage>> {
    match config.storage_backend() {
        #[cfg(feature = "storage-s3")]
        StorageBackend::S3 => {
            let bucket = config
                .s3_bucket
                .clone()
                .ok_or_else(|| StorageError::ConfigError("S3_BUCKET not configured".to_string()))?;
            let region = config.s3_region.clone().ok_or_else(|| {
                StorageError::ConfigError("S3_REGION or AWS_REGION not configured".to_string())
            })?;

            let storage = S3Storage::new(
                bucket,
                region,
                config.s3_endpoint.clone(),
                config.s3_public_base_url.clone(),
            )
            .await?;
            Ok(Arc::new(storage))
        }

        #[cfg(not(feature = "storage-s3"))]
        StorageBackend::S3 => Err(StorageError::ConfigError(
            "S3 storage backend not available (storage-s3 feature not enabled)".to_string(),
        )),

        #[cfg(feature = "storage-local")]
        StorageBackend::Local => {
            let storage = LocalStorage::new(
                config.local_storage_path.clone(),
                config.local_storage_base_url.clone(),
            )
            .await?;
            Ok(Arc::new(storage))
        }

        #[cfg(not(feature = "storage-local"))]
        StorageBackend::Local => Err(StorageError::ConfigError(
            "Local storage backend not available (storage-local feature not enabled)".to_string(),
        )),

        #[cfg(feature = "storage-rest")]
        StorageBackend::Rest => {
            let missing = |name: &str| StorageError::ConfigError(format!("{} not configured", name));
            let api_url = config
                .storage_api_url
                .clone()
                .ok_or_else(|| missing("STORAGE_API_URL"))?;
            let api_key = config
                .storage_api_key
                .clone()
                .ok_or_else(|| missing("STORAGE_API_KEY"))?;
            let bucket = config
                .storage_bucket
                .clone()
                .ok_or_else(|| missing("STORAGE_BUCKET"))?;

            let storage = RestStorage::new(api_url, api_key, bucket)?;
            Ok(Arc::new(storage))
        }

        #[cfg(not(feature = "storage-rest"))]
        StorageBackend::Rest => Err(StorageError::ConfigError(
            "REST storage backend not available (storage-rest feature not enabled)".to_string(),
        )),
    }
}
