//! REST object storage backend
//!
//! Talks to a Supabase-style storage API:
//!
//! - write:    `POST   {api_url}/storage/v1/object/{bucket}/{key}`
//! - download: `GET    {api_url}/storage/v1/object/{bucket}/{key}`
//! - exists:   `HEAD   {api_url}/storage/v1/object/{bucket}/{key}`
//! - delete:   `DELETE {api_url}/storage/v1/object/{bucket}` with `{"prefixes": [key]}`
//! - public:   `{api_url}/storage/v1/object/public/{bucket}/{key}`

use crate::keys::{encode_key, validate_key};
use crate::traits::{Storage, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use std::time::Duration;

const OBJECT_PATH: &str = "storage/v1/object";

/// REST object storage implementation
#[derive(Clone)]
pub struct RestStorage {
    client: Client,
    api_url: String,
    api_key: String,
    bucket: String,
}

impl RestStorage {
    /// Create a new RestStorage instance
    ///
    /// # Arguments
    /// * `api_url` - Project URL (e.g., "https://abcd.supabase.co")
    /// * `api_key` - Key sent both as bearer token and `apikey` header
    /// * `bucket` - Bucket objects are written to; must be public for the
    ///   returned URLs to resolve without credentials
    pub fn new(api_url: String, api_key: String, bucket: String) -> StorageResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| StorageError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(RestStorage {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
            bucket,
        })
    }

    fn bucket_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.api_url,
            OBJECT_PATH,
            urlencoding::encode(&self.bucket)
        )
    }

    fn object_url(&self, storage_key: &str) -> String {
        format!("{}/{}", self.bucket_url(), encode_key(storage_key))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.api_key)
            .header("apikey", self.api_key.as_str())
    }

    /// Status plus response body, used as the diagnostic of a failed call.
    async fn failure_detail(response: Response) -> String {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        format!("status {}: {}", status, body)
    }
}

#[async_trait]
impl Storage for RestStorage {
    async fn write(
        &self,
        storage_key: &str,
        data: Bytes,
        content_type: &str,
    ) -> StorageResult<()> {
        validate_key(storage_key)?;

        let size = data.len();
        let start = std::time::Instant::now();

        let request = self
            .client
            .post(self.object_url(storage_key))
            .header(CONTENT_TYPE, content_type)
            .header("x-upsert", "false")
            .body(data);

        let response = self.authorize(request).send().await.map_err(|e| {
            tracing::error!(
                error = %e,
                bucket = %self.bucket,
                key = %storage_key,
                size_bytes = size,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "REST storage write request failed"
            );
            StorageError::WriteFailed(e.to_string())
        })?;

        if !response.status().is_success() {
            let detail = Self::failure_detail(response).await;
            tracing::error!(
                error = %detail,
                bucket = %self.bucket,
                key = %storage_key,
                size_bytes = size,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "REST storage write rejected"
            );
            return Err(StorageError::WriteFailed(detail));
        }

        tracing::info!(
            bucket = %self.bucket,
            key = %storage_key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "REST storage write successful"
        );

        Ok(())
    }

    fn public_url(&self, storage_key: &str) -> String {
        format!(
            "{}/{}/public/{}/{}",
            self.api_url,
            OBJECT_PATH,
            urlencoding::encode(&self.bucket),
            encode_key(storage_key)
        )
    }

    async fn download(&self, storage_key: &str) -> StorageResult<Vec<u8>> {
        validate_key(storage_key)?;

        let request = self.client.get(self.object_url(storage_key));
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| StorageError::DownloadFailed(e.to_string()))?;

        match response.status() {
            status if status.is_success() => {
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| StorageError::DownloadFailed(e.to_string()))?;
                Ok(bytes.to_vec())
            }
            StatusCode::NOT_FOUND => Err(StorageError::NotFound(storage_key.to_string())),
            _ => Err(StorageError::DownloadFailed(
                Self::failure_detail(response).await,
            )),
        }
    }

    async fn exists(&self, storage_key: &str) -> StorageResult<bool> {
        validate_key(storage_key)?;

        let request = self.client.head(self.object_url(storage_key));
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| StorageError::BackendError(e.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(StorageError::BackendError(format!(
                "Unexpected status {} checking {}",
                status, storage_key
            ))),
        }
    }

    async fn delete(&self, storage_key: &str) -> StorageResult<()> {
        validate_key(storage_key)?;

        let request = self
            .client
            .delete(self.bucket_url())
            .json(&serde_json::json!({ "prefixes": [storage_key] }));

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| StorageError::DeleteFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StorageError::DeleteFailed(
                Self::failure_detail(response).await,
            ));
        }

        tracing::info!(
            bucket = %self.bucket,
            key = %storage_key,
            "REST storage delete successful"
        );

        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Rest
    }
}
