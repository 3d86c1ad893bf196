//! Asset upload
//!
//! Stores a payload under `{namespace}/{disambiguator}.{extension}` and
//! returns the store's public URL for it once the write is acknowledged.

pub mod naming;
mod service;
mod types;

pub use naming::Disambiguator;
pub use service::AssetUploadService;
pub use types::{StoredAsset, UploadError, UploadRequest};
