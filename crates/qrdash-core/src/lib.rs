//! qrdash Core Library
//!
//! Configuration, constants and the storage backend selector shared by the
//! storage, services and CLI crates.

pub mod config;
pub mod constants;
pub mod storage_types;

// Re-export commonly used types
pub use config::StorageConfig;
pub use storage_types::StorageBackend;
