/// Namespace used when the caller does not name one.
pub const DEFAULT_UPLOAD_NAMESPACE: &str = "uploads";

/// Payload limit in megabytes when `MAX_UPLOAD_SIZE_MB` is unset.
pub const DEFAULT_MAX_UPLOAD_SIZE_MB: usize = 10;

pub const DEFAULT_LOCAL_STORAGE_PATH: &str = "./storage";
pub const DEFAULT_LOCAL_STORAGE_BASE_URL: &str = "http://localhost:3000/media";

/// Content type sent when the extension is unknown or missing.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";
