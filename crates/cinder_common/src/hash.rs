//! Content hashing for rebuild decisions and artifact fingerprinting.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A 128-bit content hash computed using XXH3 for change detection.
///
/// Two files with the same `ContentHash` are assumed to have identical
/// content. This is a change-detection fingerprint, not a security boundary:
/// it decides whether a translation unit needs recompiling and whether a
/// linked artifact is the same build as before.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash([u8; 16]);

impl ContentHash {
    /// Computes a content hash from a byte slice using XXH3-128.
    pub fn from_bytes(data: &[u8]) -> Self {
        let hash = xxhash_rust::xxh3::xxh3_128(data);
        Self(hash.to_le_bytes())
    }

    /// Wraps a raw 128-bit digest produced by a streaming hasher.
    pub fn from_digest(digest: u128) -> Self {
        Self(digest.to_le_bytes())
    }

    /// Parses the 32-hex-char form produced by [`Display`](fmt::Display).
    ///
    /// Surrounding whitespace is tolerated. Returns `None` for anything that
    /// is not exactly 32 hex digits, so a corrupt fingerprint file reads as
    /// "no fingerprint" rather than an error.
    pub fn from_hex(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.len() != 32 || !text.is_ascii() {
            return None;
        }
        let mut bytes = [0u8; 16];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&text[2 * i..2 * i + 2], 16).ok()?;
        }
        Some(Self(bytes))
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({:02x}{:02x}..)", self.0[0], self.0[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        let a = ContentHash::from_bytes(b"int main(void) { return 0; }");
        let b = ContentHash::from_bytes(b"int main(void) { return 0; }");
        assert_eq!(a, b);
    }

    #[test]
    fn different_inputs_differ() {
        let a = ContentHash::from_bytes(b"int x;");
        let b = ContentHash::from_bytes(b"int y;");
        assert_ne!(a, b);
    }

    #[test]
    fn display_format() {
        let h = ContentHash::from_bytes(b"test");
        let s = format!("{h}");
        assert_eq!(s.len(), 32, "Display should be 32 hex chars");
        assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn debug_abbreviated() {
        let h = ContentHash::from_bytes(b"test");
        let s = format!("{h:?}");
        assert!(s.starts_with("ContentHash("));
        assert!(s.ends_with(")"));
    }

    #[test]
    fn hex_roundtrip() {
        let h = ContentHash::from_bytes(b"roundtrip");
        let back = ContentHash::from_hex(&h.to_string()).unwrap();
        assert_eq!(h, back);
    }

    #[test]
    fn hex_tolerates_whitespace() {
        let h = ContentHash::from_bytes(b"padded");
        let text = format!("  {h}\n");
        assert_eq!(ContentHash::from_hex(&text), Some(h));
    }

    #[test]
    fn hex_rejects_garbage() {
        assert!(ContentHash::from_hex("").is_none());
        assert!(ContentHash::from_hex("not a digest").is_none());
        assert!(ContentHash::from_hex("abcd").is_none());
        assert!(ContentHash::from_hex(&"g".repeat(32)).is_none());
    }

    #[test]
    fn from_digest_matches_from_bytes() {
        let data = b"same digest either way";
        let streamed = ContentHash::from_digest(xxhash_rust::xxh3::xxh3_128(data));
        assert_eq!(streamed, ContentHash::from_bytes(data));
    }
}
