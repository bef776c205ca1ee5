//! Configuration types deserialized from `cinder.toml`.

use serde::Deserialize;
use std::collections::BTreeMap;

/// The top-level project configuration parsed from `cinder.toml`.
///
/// Contains project metadata and the named toolchain targets the binary can
/// be built for (e.g., "host", "arm-linux").
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Core project metadata (name, version, default target).
    pub project: ProjectMeta,
    /// Named target toolchain configurations.
    #[serde(default)]
    pub targets: BTreeMap<String, TargetConfig>,
}

/// Core project metadata required in every `cinder.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectMeta {
    /// The project name. Also the stem of the linked artifact file.
    pub name: String,
    /// The project version string.
    #[serde(default)]
    pub version: String,
    /// A brief description of the project.
    #[serde(default)]
    pub description: String,
    /// The target to build when none is named on the command line.
    #[serde(default)]
    pub default_target: Option<String>,
}

/// Toolchain configuration for one named target.
#[derive(Debug, Deserialize)]
pub struct TargetConfig {
    /// Path to or name of the C compiler executable (e.g., "gcc",
    /// "arm-unknown-linux-gnueabihf-gcc").
    pub compiler: String,
    /// Path to or name of the linker executable. Usually the compiler driver.
    pub linker: String,
    /// Target-specific C flags, one whitespace-separated string. May contain
    /// the `{SYSROOT}` placeholder.
    #[serde(default)]
    pub cflags: String,
    /// Target-specific link flags, one whitespace-separated string. May
    /// contain the `{SYSROOT}` placeholder.
    #[serde(default)]
    pub ldflags: String,
    /// Platform extension appended to the artifact name (e.g., "" on Linux,
    /// ".exe" on Windows).
    #[serde(default)]
    pub bin_extension: String,
}
