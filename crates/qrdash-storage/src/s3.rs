use crate::keys::{encode_key, join_url, validate_key};
use crate::traits::{Storage, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path;
use object_store::Error as ObjectStoreError;
use object_store::{
    Attribute, Attributes, ObjectStoreExt, PutOptions, PutPayload, Result as ObjectResult,
};

/// S3 storage implementation
#[derive(Clone)]
pub struct S3Storage {
    store: AmazonS3,
    bucket: String,
    region: String,
    endpoint_url: Option<String>, // Custom endpoint for S3-compatible providers
    public_base_url: Option<String>,
}

impl S3Storage {
    /// Create a new S3Storage instance
    ///
    /// # Arguments
    /// * `bucket` - S3 bucket name
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO)
    /// * `public_base_url` - Optional base URL objects are publicly served from
    ///   (e.g., a CDN in front of the bucket); overrides the derived bucket URL
    pub async fn new(
        bucket: String,
        region: String,
        endpoint_url: Option<String>,
        public_base_url: Option<String>,
    ) -> StorageResult<Self> {
        // Credentials come from the environment; location comes from config.
        let mut builder = AmazonS3Builder::from_env()
            .with_region(region.clone())
            .with_bucket_name(bucket.clone());

        if let Some(ref endpoint) = endpoint_url {
            let allow_http = endpoint.starts_with("http://");
            builder = builder
                .with_endpoint(endpoint.clone())
                .with_allow_http(allow_http);
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))?;

        Ok(S3Storage {
            store,
            bucket,
            region,
            endpoint_url,
            public_base_url,
        })
    }
}

/// Public URL for an S3 object
///
/// Precedence: explicit public base URL, then path-style
/// `{endpoint}/{bucket}/{key}` for S3-compatible providers, then the
/// virtual-hosted AWS form `https://{bucket}.s3.{region}.amazonaws.com/{key}`.
/// Key segments are percent-encoded.
fn object_url(
    bucket: &str,
    region: &str,
    endpoint_url: Option<&str>,
    public_base_url: Option<&str>,
    key: &str,
) -> String {
    let key = encode_key(key);
    if let Some(base) = public_base_url {
        join_url(base, &key)
    } else if let Some(endpoint) = endpoint_url {
        format!("{}/{}/{}", endpoint.trim_end_matches('/'), bucket, key)
    } else {
        format!("https://{}.s3.{}.amazonaws.com/{}", bucket, region, key)
    }
}

#[async_trait]
impl Storage for S3Storage {
    async fn write(
        &self,
        storage_key: &str,
        data: Bytes,
        content_type: &str,
    ) -> StorageResult<()> {
        validate_key(storage_key)?;

        let size = data.len() as u64;
        let location = Path::from(storage_key.to_string());

        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, content_type.to_string().into());
        let opts = PutOptions {
            attributes,
            ..Default::default()
        };

        let start = std::time::Instant::now();

        let result: ObjectResult<_> = object_store::ObjectStore::put_opts(
            &self.store,
            &location,
            PutPayload::from(data),
            opts,
        )
        .await;

        result.map_err(|e| {
            tracing::error!(
                error = %e,
                bucket = %self.bucket,
                key = %storage_key,
                size_bytes = size,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "S3 write failed"
            );
            StorageError::WriteFailed(e.to_string())
        })?;

        tracing::info!(
            bucket = %self.bucket,
            key = %storage_key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 write successful"
        );

        Ok(())
    }

    fn public_url(&self, storage_key: &str) -> String {
        object_url(
            &self.bucket,
            &self.region,
            self.endpoint_url.as_deref(),
            self.public_base_url.as_deref(),
            storage_key,
        )
    }

    async fn download(&self, storage_key: &str) -> StorageResult<Vec<u8>> {
        validate_key(storage_key)?;

        let start = std::time::Instant::now();
        let location = Path::from(storage_key.to_string());

        let result: ObjectResult<_> = self.store.get(&location).await;

        let result = result.map_err(|e| match e {
            ObjectStoreError::NotFound { .. } => StorageError::NotFound(storage_key.to_string()),
            other => {
                tracing::error!(
                    error = %other,
                    bucket = %self.bucket,
                    key = %storage_key,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 download failed"
                );
                StorageError::DownloadFailed(other.to_string())
            }
        })?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| StorageError::DownloadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }

    async fn exists(&self, storage_key: &str) -> StorageResult<bool> {
        validate_key(storage_key)?;

        let location = Path::from(storage_key.to_string());
        match self.store.head(&location).await {
            Ok(_) => Ok(true),
            Err(ObjectStoreError::NotFound { .. }) => Ok(false),
            Err(e) => Err(StorageError::BackendError(e.to_string())),
        }
    }

    async fn delete(&self, storage_key: &str) -> StorageResult<()> {
        validate_key(storage_key)?;

        let start = std::time::Instant::now();
        let location = Path::from(storage_key.to_string());

        let result: ObjectResult<_> = self.store.delete(&location).await;

        result.map_err(|e| {
            tracing::error!(
                error = %e,
                bucket = %self.bucket,
                key = %storage_key,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "S3 delete failed"
            );
            StorageError::DeleteFailed(e.to_string())
        })?;

        tracing::info!(
            bucket = %self.bucket,
            key = %storage_key,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 delete successful"
        );

        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aws_url_is_virtual_hosted() {
        assert_eq!(
            object_url("qr-assets", "eu-west-1", None, None, "uploads/1.png"),
            "https://qr-assets.s3.eu-west-1.amazonaws.com/uploads/1.png"
        );
    }

    #[test]
    fn compatible_endpoint_url_is_path_style() {
        assert_eq!(
            object_url(
                "qr-assets",
                "us-east-1",
                Some("http://localhost:9000/"),
                None,
                "uploads/1.png"
            ),
            "http://localhost:9000/qr-assets/uploads/1.png"
        );
    }

    #[test]
    fn public_base_url_wins() {
        assert_eq!(
            object_url(
                "qr-assets",
                "us-east-1",
                Some("http://localhost:9000"),
                Some("https://cdn.example.com"),
                "uploads/1.png"
            ),
            "https://cdn.example.com/uploads/1.png"
        );
    }

    #[test]
    fn reserved_characters_in_key_are_encoded() {
        let key = "qr#1 logos/1.png";
        assert_eq!(
            object_url("qr-assets", "eu-west-1", None, None, key),
            "https://qr-assets.s3.eu-west-1.amazonaws.com/qr%231%20logos/1.png"
        );
        assert_eq!(
            object_url("qr-assets", "us-east-1", Some("http://localhost:9000"), None, key),
            "http://localhost:9000/qr-assets/qr%231%20logos/1.png"
        );
        assert_eq!(
            object_url(
                "qr-assets",
                "us-east-1",
                None,
                Some("https://cdn.example.com"),
                key
            ),
            "https://cdn.example.com/qr%231%20logos/1.png"
        );
    }

    #[tokio::test]
    async fn invalid_keys_are_rejected_before_any_request() {
        let storage = S3Storage::new(
            "qr-assets".to_string(),
            "us-east-1".to_string(),
            Some("http://localhost:9000".to_string()),
            None,
        )
        .await
        .unwrap();

        assert!(matches!(
            storage.download("../etc/passwd").await,
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(
            storage.exists("/etc/passwd").await,
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(
            storage.delete("").await,
            Err(StorageError::InvalidKey(_))
        ));
    }
}
