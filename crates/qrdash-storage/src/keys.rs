//! Shared key helpers for storage backends.
//!
//! Key format: `{namespace}/{stem}.{extension}`, or `{namespace}/{stem}` when
//! there is no extension.

use crate::{StorageError, StorageResult};

/// Build the storage key for an object named `stem` with `extension` in `namespace`.
///
/// The namespace is used verbatim, trailing `/` included.
pub fn generate_storage_key(namespace: &str, stem: &str, extension: &str) -> String {
    if extension.is_empty() {
        format!("{}/{}", namespace, stem)
    } else {
        format!("{}/{}.{}", namespace, stem, extension)
    }
}

/// Reject keys that are empty, absolute, contain `..` or an empty segment.
pub fn validate_key(storage_key: &str) -> StorageResult<()> {
    if storage_key.is_empty() {
        return Err(StorageError::InvalidKey("Storage key is empty".to_string()));
    }
    if storage_key.contains("..") || storage_key.starts_with('/') || storage_key.contains("//") {
        return Err(StorageError::InvalidKey(format!(
            "Storage key contains invalid characters: {}",
            storage_key
        )));
    }
    Ok(())
}

/// Join a base URL and a key with exactly one `/` between them.
pub fn join_url(base_url: &str, storage_key: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        storage_key.trim_start_matches('/')
    )
}

/// Percent-encode each `/`-separated segment of a key, keeping the separators.
pub fn encode_key(storage_key: &str) -> String {
    storage_key
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_with_extension() {
        assert_eq!(
            generate_storage_key("uploads", "1700000000000", "png"),
            "uploads/1700000000000.png"
        );
    }

    #[test]
    fn key_without_extension_has_no_trailing_dot() {
        assert_eq!(
            generate_storage_key("uploads", "1700000000000", ""),
            "uploads/1700000000000"
        );
    }

    #[test]
    fn nested_namespace_is_kept_verbatim() {
        assert_eq!(generate_storage_key("qr/logos", "42", "svg"), "qr/logos/42.svg");
        assert_eq!(
            generate_storage_key("qr/logos/", "42", "svg"),
            "qr/logos//42.svg"
        );
        assert_eq!(generate_storage_key("qr#1 a", "42", "png"), "qr#1 a/42.png");
    }

    #[test]
    fn encode_key_escapes_reserved_characters() {
        assert_eq!(encode_key("qr#1/42.png"), "qr%231/42.png");
        assert_eq!(encode_key("a?b/c%d.png"), "a%3Fb/c%25d.png");
    }

    #[test]
    fn validate_rejects_traversal_and_absolute_keys() {
        assert!(matches!(
            validate_key("../etc/passwd"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(
            validate_key("/etc/passwd"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(validate_key(""), Err(StorageError::InvalidKey(_))));
        assert!(matches!(
            validate_key("qr/logos//42.svg"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(validate_key("uploads/1.png").is_ok());
    }

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(
            join_url("https://store.example/", "uploads/1.png"),
            "https://store.example/uploads/1.png"
        );
        assert_eq!(
            join_url("https://store.example", "uploads/1.png"),
            "https://store.example/uploads/1.png"
        );
    }

    #[test]
    fn encode_key_keeps_separators() {
        assert_eq!(encode_key("my logos/1 a.png"), "my%20logos/1%20a.png");
        assert_eq!(encode_key("uploads/1.png"), "uploads/1.png");
    }
}
