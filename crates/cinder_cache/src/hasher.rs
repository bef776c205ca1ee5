//! Streaming content hashing of source and artifact files.

use std::io::Read;
use std::path::Path;

use cinder_common::ContentHash;
use xxhash_rust::xxh3::Xxh3;

use crate::error::CacheError;

/// Read chunk size for streaming hashes. Linked artifacts can be large, so
/// files are never loaded whole for digesting.
const HASH_CHUNK: usize = 64 * 1024;

/// Computes the content hash of a file by streaming it in bounded chunks.
pub fn hash_file(path: &Path) -> Result<ContentHash, CacheError> {
    let mut file = std::fs::File::open(path).map_err(|e| CacheError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut hasher = Xxh3::new();
    let mut buf = vec![0u8; HASH_CHUNK];
    loop {
        let n = file.read(&mut buf).map_err(|e| CacheError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(ContentHash::from_digest(hasher.digest128()))
}
