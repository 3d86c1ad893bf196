//! Storage abstraction trait
//!
//! This module defines the Storage trait that all backing stores must implement.

use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Backing store contract
///
/// The upload service only needs [`Storage::write`] and
/// [`Storage::public_url`]; the remaining operations serve the CLI and
/// tests. Implementations hold their own client and are shared as
/// `Arc<dyn Storage>`.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write `data` under `storage_key`.
    ///
    /// Returns only once the backend has acknowledged the write. Errors are
    /// reported as the backend produced them; nothing is retried.
    async fn write(&self, storage_key: &str, data: Bytes, content_type: &str)
        -> StorageResult<()>;

    /// Public URL for `storage_key`.
    ///
    /// Pure: no request is made and the object is not required to exist.
    fn public_url(&self, storage_key: &str) -> String;

    /// Download a file by its storage key
    async fn download(&self, storage_key: &str) -> StorageResult<Vec<u8>>;

    /// Check if a file exists
    async fn exists(&self, storage_key: &str) -> StorageResult<bool>;

    /// Delete a file by its storage key. Deleting a missing key succeeds.
    async fn delete(&self, storage_key: &str) -> StorageResult<()>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
