//! Incremental rebuild bookkeeping for the cinder build orchestrator.
//!
//! This crate decides whether a translation unit needs recompiling. It hashes
//! source files, scans them for locally-resolvable `#include` directives,
//! memoizes per-file digests and direct dependencies for the lifetime of one
//! orchestrator instance, and persists the digest of the linked artifact so
//! external consumers can recognize an unchanged build without re-reading
//! source.

#![warn(missing_docs)]

pub mod deps;
pub mod error;
pub mod fingerprint;
pub mod hasher;
pub mod scanner;

pub use deps::{DepCache, DepRecord};
pub use error::CacheError;
pub use fingerprint::{FingerprintStore, FINGERPRINT_FILE};
pub use hasher::hash_file;
pub use scanner::{scan_includes, scan_local_deps};
