//! File information tracking for incremental refresh
//!
//! This module provides hash-based tracking of scanned files so that a
//! refresh pass can skip files whose content did not change.

use chrono::Utc;
use sha2::{Digest, Sha256};
use std::path::PathBuf;

/// Information about a scanned file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Path to the file
    pub path: PathBuf,
    /// SHA256 hash of file content
    pub hash: String,
    /// UTC timestamp when last scanned (seconds since UNIX_EPOCH)
    pub last_scanned_utc: u64,
}

impl FileInfo {
    /// Create new file info with current timestamp
    pub fn new(path: PathBuf, content: &[u8]) -> Self {
        Self {
            path,
            hash: calculate_hash(content),
            last_scanned_utc: get_utc_timestamp(),
        }
    }

    /// Check if file content has changed based on hash
    pub fn has_changed(&self, content: &[u8]) -> bool {
        self.hash != calculate_hash(content)
    }
}

/// Calculate SHA256 hash of content
pub fn calculate_hash(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

/// Get current UTC timestamp in seconds since UNIX_EPOCH
pub fn get_utc_timestamp() -> u64 {
    Utc::now().timestamp() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_calculation() {
        let hash1 = calculate_hash(b"<resources/>");
        let hash2 = calculate_hash(b"<resources/>");
        let hash3 = calculate_hash(b"<Resources/>");

        assert_eq!(hash1, hash2);
        assert_ne!(hash1, hash3);

        // Hash should be 64 characters (256 bits in hex)
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_binary_content() {
        let png_header = [0x89u8, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0xff];
        assert_eq!(calculate_hash(&png_header).len(), 64);
    }

    #[test]
    fn test_utc_timestamp() {
        let ts1 = get_utc_timestamp();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let ts2 = get_utc_timestamp();

        assert!(ts2 >= ts1);
        // Should be a reasonable Unix timestamp (after year 2020)
        assert!(ts1 > 1577836800);
    }

    #[test]
    fn test_file_info_change_detection() {
        let content = br#"<resources><string name="a">x</string></resources>"#;
        let info = FileInfo::new(PathBuf::from("res/values/strings.xml"), content);

        assert!(!info.has_changed(content));
        assert!(info.has_changed(b"<resources/>"));
    }
}
