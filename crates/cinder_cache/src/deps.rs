//! Per-file digest and dependency memoization.
//!
//! The cache is the authority on "does this translation unit need
//! recompiling". It never builds a dependency graph up front: direct includes
//! are discovered lazily when a file's content is seen to change, and the
//! transitive walk happens on every query.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use cinder_common::ContentHash;

use crate::error::CacheError;
use crate::hasher::hash_file;
use crate::scanner::scan_local_deps;

/// Cached state for one source-file basename.
#[derive(Debug, Clone)]
pub struct DepRecord {
    /// Content hash observed the last time the file was found changed.
    /// Never rewritten while the file keeps matching.
    pub digest: ContentHash,
    /// Direct locally-resolvable include names, in order of first appearance.
    pub direct_deps: Vec<String>,
}

/// In-memory memo of `basename -> (digest, direct deps)` for one orchestrator
/// instance.
///
/// [`check_and_update`](Self::check_and_update) reports a file unchanged only
/// if it and every header it transitively includes are unchanged. When a
/// file's content matches its record, the previously recorded dependency list
/// is reused for recursion on the premise that unchanged content implies an
/// unchanged dependency structure.
///
/// A name found changed stays visibly changed for the rest of the build pass
/// (see [`begin_pass`](Self::begin_pass)), so a header edit triggers a
/// rebuild of every unit that includes it, not just the first one walked.
#[derive(Debug)]
pub struct DepCache {
    build_path: PathBuf,
    records: HashMap<String, DepRecord>,
    /// Names found changed during the current pass. Their records are already
    /// refreshed, but later queries in the same pass must still see them as
    /// changed.
    dirty: HashSet<String>,
}

impl DepCache {
    /// Creates an empty cache over the given build directory.
    pub fn new(build_path: &Path) -> Self {
        Self {
            build_path: build_path.to_path_buf(),
            records: HashMap::new(),
            dirty: HashSet::new(),
        }
    }

    /// Rebinds the cache to a different build directory, discarding all
    /// records. Rebinding to the current directory is a no-op.
    pub fn rebind(&mut self, build_path: &Path) {
        if self.build_path != build_path {
            self.build_path = build_path.to_path_buf();
            self.records.clear();
            self.dirty.clear();
        }
    }

    /// Opens a new build pass: names found changed in the previous pass stop
    /// being reported as changed.
    pub fn begin_pass(&mut self) {
        self.dirty.clear();
    }

    /// Drops the record for `name`, forcing full re-detection on the next
    /// query. Called when a unit fails to compile.
    pub fn evict(&mut self, name: &str) {
        self.records.remove(name);
    }

    /// Returns the cached record for `name`, if any.
    pub fn record(&self, name: &str) -> Option<&DepRecord> {
        self.records.get(name)
    }

    /// Reports whether `name` and everything it transitively includes are
    /// unchanged since last recorded.
    ///
    /// A missing or unreadable file is reported as changed (safe default).
    /// When the file's digest differs from its record, the file is re-scanned
    /// for local includes and its record overwritten; when it matches, the
    /// record is left untouched. Either way the walk recurses into every
    /// direct dependency and the result is the AND of the file's own match
    /// with all dependency results.
    ///
    /// Include cycles are cut by a per-call visited set: a name re-entered
    /// during its own walk contributes "unchanged", its actual state having
    /// been accounted for by the outermost visit.
    pub fn check_and_update(&mut self, name: &str) -> bool {
        let mut visited = HashSet::new();
        self.walk(name, &mut visited)
    }

    fn walk(&mut self, name: &str, visited: &mut HashSet<String>) -> bool {
        if !visited.insert(name.to_string()) {
            return true;
        }

        let path = self.build_path.join(name);
        let Ok(digest) = hash_file(&path) else {
            return false;
        };

        let (digest_matches, deps) = match self.records.get(name) {
            Some(record) if record.digest == digest => (true, record.direct_deps.clone()),
            _ => {
                self.dirty.insert(name.to_string());
                let Ok(bytes) = std::fs::read(&path) else {
                    return false;
                };
                let text = String::from_utf8_lossy(&bytes);
                let deps = scan_local_deps(&text, &self.build_path);
                self.records.insert(
                    name.to_string(),
                    DepRecord {
                        digest,
                        direct_deps: deps.clone(),
                    },
                );
                (false, deps)
            }
        };

        // Recurse into every dependency even once the result is settled, so
        // their records are refreshed within this pass.
        let mut matched = digest_matches && !self.dirty.contains(name);
        for dep in &deps {
            let dep_matched = self.walk(dep, visited);
            matched = matched && dep_matched;
        }
        matched
    }

    /// Returns the text of `name` concatenated with the text of everything it
    /// transitively includes, depth-first in discovery order.
    ///
    /// Exposed for whole-project source fingerprinting. Unlike
    /// [`check_and_update`](Self::check_and_update), a missing file here is an
    /// error: the caller asked for this file's source explicitly.
    pub fn concat_source(&self, name: &str) -> Result<String, CacheError> {
        let mut visited = HashSet::new();
        self.concat_walk(name, &mut visited)
    }

    fn concat_walk(
        &self,
        name: &str,
        visited: &mut HashSet<String>,
    ) -> Result<String, CacheError> {
        if !visited.insert(name.to_string()) {
            return Ok(String::new());
        }

        let path = self.build_path.join(name);
        let bytes = std::fs::read(&path).map_err(|e| CacheError::Io {
            path: path.clone(),
            source: e,
        })?;
        let mut out = String::from_utf8_lossy(&bytes).into_owned();

        let deps = scan_local_deps(&out, &self.build_path);
        for dep in &deps {
            out.push_str(&self.concat_walk(dep, visited)?);
        }
        Ok(out)
    }
}
