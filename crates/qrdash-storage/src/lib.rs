//! qrdash Storage Library
//!
//! This crate provides the backing-store abstraction used by the upload
//! service, together with its implementations: local filesystem, S3 (and
//! S3-compatible providers) and a Supabase-style REST object storage API.
//!
//! # Storage key format
//!
//! Keys are `{namespace}/{name}` strings chosen by the caller. They must not
//! be empty, contain `..` or start with `/`; backends validate this through
//! the `keys` module and reject offending keys with
//! [`StorageError::InvalidKey`].

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-rest")]
pub mod rest;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use qrdash_core::StorageBackend;
#[cfg(feature = "storage-rest")]
pub use rest::RestStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
