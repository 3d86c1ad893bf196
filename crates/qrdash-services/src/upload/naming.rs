//! Storage naming: extension, content type and the time-based disambiguator.

use chrono::Utc;
use qrdash_core::constants::FALLBACK_CONTENT_TYPE;
use std::sync::atomic::{AtomicU64, Ordering};

/// Extension of `original_name`: everything after the last `.`, or `""`.
pub fn extension_of(original_name: &str) -> &str {
    original_name
        .rsplit_once('.')
        .map(|(_, extension)| extension)
        .unwrap_or("")
}

/// Content type sent to the store for a file with `extension`.
pub fn content_type_for(extension: &str) -> &'static str {
    match extension.to_lowercase().as_str() {
        // Images
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "ico" => "image/x-icon",
        // Documents
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "csv" => "text/csv",
        "json" => "application/json",
        _ => FALLBACK_CONTENT_TYPE,
    }
}

/// Millisecond timestamps, strictly increasing across every caller sharing
/// the instance.
///
/// When the clock has not moved past the last issued value (same
/// millisecond, or the clock stepped back) the next value is `last + 1`.
#[derive(Debug, Default)]
pub struct Disambiguator {
    last: AtomicU64,
}

static PROCESS_SEQUENCE: Disambiguator = Disambiguator::new();

impl Disambiguator {
    pub const fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    /// The sequence shared by every upload service in this process.
    pub fn process_wide() -> &'static Disambiguator {
        &PROCESS_SEQUENCE
    }

    pub fn next_value(&self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.next_at(now)
    }

    fn next_at(&self, now_ms: u64) -> u64 {
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now_ms.max(last + 1);
            match self.last.compare_exchange_weak(
                last,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn extension_after_last_dot() {
        assert_eq!(extension_of("photo.jpg"), "jpg");
        assert_eq!(extension_of("archive.tar.gz"), "gz");
        assert_eq!(extension_of(".env"), "env");
        assert_eq!(extension_of("trailing."), "");
    }

    #[test]
    fn no_dot_means_empty_extension() {
        assert_eq!(extension_of("noext"), "");
        assert_eq!(extension_of(""), "");
    }

    #[test]
    fn content_type_is_case_insensitive() {
        assert_eq!(content_type_for("PNG"), "image/png");
        assert_eq!(content_type_for("svg"), "image/svg+xml");
        assert_eq!(content_type_for(""), "application/octet-stream");
        assert_eq!(content_type_for("xyz"), "application/octet-stream");
    }

    #[test]
    fn follows_the_clock_when_it_advances() {
        let sequence = Disambiguator::new();
        assert_eq!(sequence.next_at(1_700_000_000_000), 1_700_000_000_000);
        assert_eq!(sequence.next_at(1_700_000_000_005), 1_700_000_000_005);
    }

    #[test]
    fn same_millisecond_is_bumped() {
        let sequence = Disambiguator::new();
        assert_eq!(sequence.next_at(1_700_000_000_000), 1_700_000_000_000);
        assert_eq!(sequence.next_at(1_700_000_000_000), 1_700_000_000_001);
        // clock stepping back still moves forward
        assert_eq!(sequence.next_at(1_699_999_999_000), 1_700_000_000_002);
    }

    #[test]
    fn concurrent_callers_never_share_a_value() {
        let sequence = Arc::new(Disambiguator::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let sequence = Arc::clone(&sequence);
                std::thread::spawn(move || {
                    (0..500).map(|_| sequence.next_value()).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for value in handle.join().unwrap() {
                assert!(seen.insert(value), "duplicate disambiguator {}", value);
            }
        }
        assert_eq!(seen.len(), 8 * 500);
    }
}
