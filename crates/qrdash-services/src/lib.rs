//! qrdash Services Library
//!
//! Business services on top of the storage layer. Currently the asset
//! upload service used by the dashboard for QR code images and logos.

pub mod upload;

// Re-export commonly used types
pub use upload::{AssetUploadService, StoredAsset, UploadError, UploadRequest};
