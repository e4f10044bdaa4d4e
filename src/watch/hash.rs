// src/watch/hash.rs

use blake3::Hasher;
use tracing::debug;

/// Hex-encoded blake3 hash of a document's contents.
pub fn content_hash(contents: &[u8]) -> String {
    let mut hasher = Hasher::new();
    hasher.update(contents);
    hasher.finalize().to_hex().to_string()
}

/// Remembers the hash of the last contents seen so unchanged snapshots are
/// not validated twice.
#[derive(Debug, Default)]
pub struct ContentMemo {
    last: Option<String>,
}

impl ContentMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `contents` and report whether they differ from the previous call.
    ///
    /// The first call always reports a change.
    pub fn observe(&mut self, contents: &[u8]) -> bool {
        let hash = content_hash(contents);
        if self.last.as_deref() == Some(hash.as_str()) {
            debug!(hash = %hash, "document contents unchanged");
            return false;
        }
        self.last = Some(hash);
        true
    }

    pub fn last_hash(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_stable_and_content_sensitive() {
        assert_eq!(content_hash(b"abc"), content_hash(b"abc"));
        assert_ne!(content_hash(b"abc"), content_hash(b"abd"));
        assert_eq!(content_hash(b"").len(), 64);
    }

    #[test]
    fn memo_reports_only_changes() {
        let mut memo = ContentMemo::new();
        assert!(memo.last_hash().is_none());
        assert!(memo.observe(b"{}"));
        assert!(!memo.observe(b"{}"));
        assert!(memo.observe(b"{ }"));
        assert!(memo.observe(b"{}"));
        assert_eq!(memo.last_hash(), Some(content_hash(b"{}").as_str()));
    }
}
