//! Test helpers: an in-memory backing store.

use async_trait::async_trait;
use bytes::Bytes;
use qrdash_storage::{Storage, StorageBackend, StorageError, StorageResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub const STORE_BASE_URL: &str = "https://store.example";

/// Object stored by [`MemoryStorage`]: payload and content type.
pub type StoredObject = (Bytes, String);

/// In-memory `Storage` that records every call.
pub struct MemoryStorage {
    objects: Mutex<HashMap<String, StoredObject>>,
    fail_writes_with: Option<String>,
    url_requests: AtomicUsize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            objects: Mutex::new(HashMap::new()),
            fail_writes_with: None,
            url_requests: AtomicUsize::new(0),
        }
    }

    /// A store whose writes all fail with `diagnostic`.
    pub fn failing(diagnostic: &str) -> Self {
        Self {
            fail_writes_with: Some(diagnostic.to_string()),
            ..Self::new()
        }
    }

    pub fn object(&self, key: &str) -> Option<StoredObject> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn url_requests(&self) -> usize {
        self.url_requests.load(Ordering::SeqCst)
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn write(&self, storage_key: &str, data: Bytes, content_type: &str) -> StorageResult<()> {
        if let Some(ref diagnostic) = self.fail_writes_with {
            return Err(StorageError::WriteFailed(diagnostic.clone()));
        }

        let mut objects = self.objects.lock().unwrap();
        if objects.contains_key(storage_key) {
            return Err(StorageError::WriteFailed(format!(
                "object already exists: {}",
                storage_key
            )));
        }
        objects.insert(storage_key.to_string(), (data, content_type.to_string()));
        Ok(())
    }

    fn public_url(&self, storage_key: &str) -> String {
        self.url_requests.fetch_add(1, Ordering::SeqCst);
        format!("{}/{}", STORE_BASE_URL, storage_key)
    }

    async fn download(&self, storage_key: &str) -> StorageResult<Vec<u8>> {
        self.object(storage_key)
            .map(|(data, _)| data.to_vec())
            .ok_or_else(|| StorageError::NotFound(storage_key.to_string()))
    }

    async fn exists(&self, storage_key: &str) -> StorageResult<bool> {
        Ok(self.object(storage_key).is_some())
    }

    async fn delete(&self, storage_key: &str) -> StorageResult<()> {
        self.objects.lock().unwrap().remove(storage_key);
        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

/// Split `{namespace}/{digits}[.{extension}]` into its timestamp and extension.
pub fn parse_path<'a>(path: &'a str, namespace: &str) -> Option<(u64, Option<&'a str>)> {
    let name = path.strip_prefix(namespace)?.strip_prefix('/')?;
    let (stem, extension) = match name.split_once('.') {
        Some((stem, extension)) => (stem, Some(extension)),
        None => (name, None),
    };
    Some((stem.parse().ok()?, extension))
}
