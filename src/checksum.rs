//! Content checksums for intermediate file integrity

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// SHA256 checksum over serialized tuple content
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checksum(String);

impl Checksum {
    /// Compute a checksum from raw bytes
    pub fn from_bytes(data: &[u8]) -> Self {
        let hash = Sha256::digest(data);
        Self(format!("{:x}", hash))
    }

    /// Compute a checksum over a serialized payload
    pub fn of(content: &str) -> Self {
        Self::from_bytes(content.as_bytes())
    }

    /// Hex string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check a payload against this checksum
    pub fn verify(&self, content: &str) -> bool {
        *self == Self::of(content)
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_is_deterministic() {
        let payload = r#"[{"kind":"Property"}]"#;
        assert_eq!(Checksum::of(payload), Checksum::of(payload));
    }

    #[test]
    fn test_checksum_detects_change() {
        let a = Checksum::of("sections-a");
        assert!(a.verify("sections-a"));
        assert!(!a.verify("sections-b"));
    }
}
