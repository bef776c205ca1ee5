//! Project descriptor: the files one build pass compiles and links.
//!
//! The descriptor is handed to the engine by the surrounding system; units
//! are immutable for the duration of a pass and walked in declaration order.

use std::path::{Path, PathBuf};

/// How a project file participates in the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// A C source file, compiled into an object file.
    Source,
    /// A prebuilt object file, linked as-is.
    Object,
}

/// One compilable or linkable file, with its per-unit compiler flags.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    /// Absolute path of the file.
    pub path: PathBuf,
    /// Per-unit compiler flags, one whitespace-separated string. Empty for
    /// prebuilt objects.
    pub cflags: String,
}

impl SourceUnit {
    /// Creates a unit for the file at `path` with the given per-unit flags.
    pub fn new(path: impl Into<PathBuf>, cflags: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            cflags: cflags.into(),
        }
    }

    /// The unit's identity: its file name without directories.
    pub fn basename(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }

    /// How this file participates in the build, judged by extension.
    /// Files that are neither sources nor objects are skipped silently.
    pub fn kind(&self) -> Option<FileKind> {
        match self.path.extension().and_then(|e| e.to_str()) {
            Some("c") => Some(FileKind::Source),
            Some("o") => Some(FileKind::Object),
            _ => None,
        }
    }

    /// Path of the object file this unit compiles to (or is).
    pub fn object_path(&self) -> PathBuf {
        self.path.with_extension("o")
    }

    /// Basename of the object file, for log lines.
    pub fn object_name(&self) -> String {
        self.object_path()
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string()
    }
}

/// An ordered group of units originating from one program location.
///
/// The label is printed as a progress header before the group's units; the
/// root group carries an empty label.
#[derive(Debug, Clone)]
pub struct LocationGroup {
    /// Human-readable location label (e.g., "0.1"), empty for the root group.
    pub label: String,
    /// The group's units, in declaration order.
    pub units: Vec<SourceUnit>,
}

impl LocationGroup {
    /// Creates a group with the given label and units.
    pub fn new(label: impl Into<String>, units: Vec<SourceUnit>) -> Self {
        Self {
            label: label.into(),
            units,
        }
    }

    /// Creates an unlabeled root group.
    pub fn root(units: Vec<SourceUnit>) -> Self {
        Self::new("", units)
    }
}

/// Convenience for building a descriptor from a directory of generated files:
/// every `.c` and `.o` directly inside `dir`, in name order, as one root group.
///
/// An `.o` with a sibling `.c` is that source's own build product, not a
/// prebuilt object; it is skipped so the linker sees each object once.
pub fn discover_units(dir: &Path) -> std::io::Result<Vec<LocationGroup>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("c") | Some("o")
            )
        })
        .collect();
    paths.sort();

    let mut units = Vec::new();
    for path in &paths {
        let is_object = path.extension().and_then(|e| e.to_str()) == Some("o");
        if is_object && paths.contains(&path.with_extension("c")) {
            continue;
        }
        units.push(SourceUnit::new(path.as_path(), ""));
    }
    Ok(vec![LocationGroup::root(units)])
}
