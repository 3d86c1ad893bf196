//! Configuration module
//!
//! Storage and upload settings, read from the environment (and `.env` when
//! present). Only the backend named by `STORAGE_BACKEND` needs its settings.

use std::env;

use crate::constants::{
    DEFAULT_LOCAL_STORAGE_BASE_URL, DEFAULT_LOCAL_STORAGE_PATH, DEFAULT_MAX_UPLOAD_SIZE_MB,
    DEFAULT_UPLOAD_NAMESPACE,
};
use crate::storage_types::StorageBackend;

/// Storage and upload configuration
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    // Local filesystem backend
    pub local_storage_path: String,
    pub local_storage_base_url: String,
    // S3 backend
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers (MinIO, R2, etc.)
    pub s3_public_base_url: Option<String>, // CDN in front of the bucket
    // REST object storage backend
    pub storage_api_url: Option<String>,
    pub storage_api_key: Option<String>,
    pub storage_bucket: Option<String>,
    // Upload behaviour
    pub upload_namespace: String,
    /// `None` means unlimited (`MAX_UPLOAD_SIZE_MB=0`).
    pub max_upload_size_bytes: Option<usize>,
}

impl StorageConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let backend = get("STORAGE_BACKEND")
            .map(|s| s.parse::<StorageBackend>())
            .transpose()?
            .unwrap_or(StorageBackend::Local);

        let max_upload_size_mb = get("MAX_UPLOAD_SIZE_MB")
            .map(|s| {
                s.parse::<usize>()
                    .map_err(|e| anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be an integer: {}", e))
            })
            .transpose()?
            .unwrap_or(DEFAULT_MAX_UPLOAD_SIZE_MB);

        let max_upload_size_bytes = match max_upload_size_mb {
            0 => None,
            mb => Some(
                mb.checked_mul(1024 * 1024)
                    .ok_or_else(|| anyhow::anyhow!("MAX_UPLOAD_SIZE_MB is too large: {}", mb))?,
            ),
        };

        Ok(StorageConfig {
            backend,
            local_storage_path: get("LOCAL_STORAGE_PATH")
                .unwrap_or_else(|| DEFAULT_LOCAL_STORAGE_PATH.to_string()),
            local_storage_base_url: get("LOCAL_STORAGE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_LOCAL_STORAGE_BASE_URL.to_string()),
            s3_bucket: get("S3_BUCKET"),
            s3_region: get("S3_REGION").or_else(|| get("AWS_REGION")),
            s3_endpoint: get("S3_ENDPOINT"),
            s3_public_base_url: get("S3_PUBLIC_BASE_URL"),
            storage_api_url: get("STORAGE_API_URL"),
            storage_api_key: get("STORAGE_API_KEY"),
            storage_bucket: get("STORAGE_BUCKET"),
            upload_namespace: get("UPLOAD_NAMESPACE")
                .unwrap_or_else(|| DEFAULT_UPLOAD_NAMESPACE.to_string()),
            max_upload_size_bytes,
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        match self.backend {
            StorageBackend::Local => {
                if !self.local_storage_base_url.starts_with("http://")
                    && !self.local_storage_base_url.starts_with("https://")
                {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_BASE_URL must be an absolute http(s) URL"
                    ));
                }
            }
            StorageBackend::S3 => {
                if self.s3_bucket.is_none() {
                    return Err(anyhow::anyhow!("S3_BUCKET is required for the s3 backend"));
                }
                if self.s3_region.is_none() {
                    return Err(anyhow::anyhow!(
                        "S3_REGION or AWS_REGION is required for the s3 backend"
                    ));
                }
            }
            StorageBackend::Rest => {
                if self.storage_api_url.is_none()
                    || self.storage_api_key.is_none()
                    || self.storage_bucket.is_none()
                {
                    return Err(anyhow::anyhow!(
                        "STORAGE_API_URL, STORAGE_API_KEY and STORAGE_BUCKET are required for the rest backend"
                    ));
                }
            }
        }

        if self.upload_namespace.starts_with('/') {
            return Err(anyhow::anyhow!("UPLOAD_NAMESPACE must not start with '/'"));
        }

        Ok(())
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.backend
    }

    pub fn upload_namespace(&self) -> &str {
        &self.upload_namespace
    }

    pub fn max_upload_size_bytes(&self) -> Option<usize> {
        self.max_upload_size_bytes
    }
}
