//! Persisted digest of the last successfully linked artifact.
//!
//! The digest lives in memory and in a fixed-name sibling file inside the
//! build directory, written as plain ASCII hex. The file and the artifact are
//! only ever written together, so an external consumer reading the file can
//! trust it describes the artifact currently on disk.

use std::path::{Path, PathBuf};

use cinder_common::ContentHash;

use crate::error::CacheError;

/// Fixed name of the fingerprint file inside the build directory.
pub const FINGERPRINT_FILE: &str = "lastbuild.digest";

/// In-memory plus persisted store for the artifact content digest.
///
/// [`get`](Self::get) never recomputes from the artifact file itself; it
/// answers from memory, falling back to the persisted file.
#[derive(Debug)]
pub struct FingerprintStore {
    build_path: PathBuf,
    cached: Option<ContentHash>,
}

impl FingerprintStore {
    /// Creates a store over the given build directory with no in-memory value.
    pub fn new(build_path: &Path) -> Self {
        Self {
            build_path: build_path.to_path_buf(),
            cached: None,
        }
    }

    /// Rebinds the store to a different build directory, dropping the
    /// in-memory value. Rebinding to the current directory is a no-op.
    pub fn rebind(&mut self, build_path: &Path) {
        if self.build_path != build_path {
            self.build_path = build_path.to_path_buf();
            self.cached = None;
        }
    }

    /// Path of the persisted fingerprint file.
    pub fn file_path(&self) -> PathBuf {
        self.build_path.join(FINGERPRINT_FILE)
    }

    /// Returns the stored digest, if any.
    ///
    /// The in-memory value wins; otherwise the persisted file is read and
    /// parsed. An absent or unparsable file reads as "no fingerprint".
    pub fn get(&self) -> Option<ContentHash> {
        if let Some(digest) = self.cached {
            return Some(digest);
        }
        let text = std::fs::read_to_string(self.file_path()).ok()?;
        ContentHash::from_hex(&text)
    }

    /// Stores a digest in memory and overwrites the persisted file.
    pub fn set(&mut self, digest: ContentHash) -> Result<(), CacheError> {
        let path = self.file_path();
        std::fs::write(&path, digest.to_string()).map_err(|e| CacheError::Io {
            path,
            source: e,
        })?;
        self.cached = Some(digest);
        Ok(())
    }

    /// Clears the in-memory value and deletes the persisted file.
    ///
    /// A file that is already absent is not an error.
    pub fn reset(&mut self) {
        self.cached = None;
        let _ = std::fs::remove_file(self.file_path());
    }
}
