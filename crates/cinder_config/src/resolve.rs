//! Toolchain resolution: merging target flags with environment overrides.

use crate::error::ConfigError;
use crate::types::ProjectConfig;

/// Placeholder token in flag strings that stands for the toolchain sysroot.
///
/// Resolved once per build pass by querying the compiler, then substituted
/// into every compiler and linker flag independently via
/// [`ResolvedToolchain::substitute_sysroot`].
pub const SYSROOT_PLACEHOLDER: &str = "{SYSROOT}";

/// Flag-affecting values read from the process environment.
///
/// These augment (never replace) the target's own flag strings, in the order:
/// target flags, then environment flags, then the `--sysroot=` override.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    /// Extra compiler flags from `CFLAGS`.
    pub cflags: Option<String>,
    /// Extra linker flags from `LDFLAGS`.
    pub ldflags: Option<String>,
    /// Sysroot path from `SYSROOT`, appended as `--sysroot=<path>` to both
    /// flag sets.
    pub sysroot: Option<String>,
}

impl EnvOverrides {
    /// Reads `CFLAGS`, `LDFLAGS`, and `SYSROOT` from the process environment.
    pub fn from_env() -> Self {
        Self {
            cflags: std::env::var("CFLAGS").ok(),
            ldflags: std::env::var("LDFLAGS").ok(),
            sysroot: std::env::var("SYSROOT").ok(),
        }
    }

    /// An empty override set, for callers that want target flags untouched.
    pub fn none() -> Self {
        Self::default()
    }
}

/// A fully resolved toolchain: executables plus structured flag lists.
///
/// Produced by [`resolve_toolchain`] before any compilation starts. The flag
/// lists may still carry the [`SYSROOT_PLACEHOLDER`] token; the build engine
/// queries the compiler for the sysroot and substitutes it exactly once.
#[derive(Debug, Clone)]
pub struct ResolvedToolchain {
    /// The target name this toolchain was resolved from.
    pub name: String,
    /// The C compiler executable.
    pub compiler: String,
    /// The linker executable.
    pub linker: String,
    /// Assembled compiler flags, split into individual arguments.
    pub cflags: Vec<String>,
    /// Assembled linker flags, split into individual arguments.
    pub ldflags: Vec<String>,
    /// Platform extension of the linked artifact (may be empty).
    pub bin_extension: String,
}

impl ResolvedToolchain {
    /// Returns `true` if any compiler or linker flag still carries the
    /// sysroot placeholder token.
    pub fn needs_sysroot(&self) -> bool {
        self.cflags
            .iter()
            .chain(self.ldflags.iter())
            .any(|flag| flag.contains(SYSROOT_PLACEHOLDER))
    }

    /// Replaces every occurrence of the sysroot placeholder in both flag
    /// sets with the given path.
    pub fn substitute_sysroot(&mut self, sysroot: &str) {
        for flag in self.cflags.iter_mut().chain(self.ldflags.iter_mut()) {
            if flag.contains(SYSROOT_PLACEHOLDER) {
                *flag = flag.replace(SYSROOT_PLACEHOLDER, sysroot);
            }
        }
    }
}

/// Splits a flag string into individual arguments on whitespace.
///
/// Empty segments are dropped, so concatenating flag strings with spaces
/// never produces empty arguments.
pub fn split_flags(flags: &str) -> Vec<String> {
    flags.split_whitespace().map(str::to_string).collect()
}

/// Resolves a named target into a [`ResolvedToolchain`].
///
/// Flag assembly order is: target flags, then environment `CFLAGS`/`LDFLAGS`,
/// then `--sysroot=<SYSROOT>` if the environment names one. The assembled
/// strings are split into argument lists here so the build engine never does
/// string concatenation.
pub fn resolve_toolchain(
    config: &ProjectConfig,
    target_name: &str,
    env: &EnvOverrides,
) -> Result<ResolvedToolchain, ConfigError> {
    let target = config
        .targets
        .get(target_name)
        .ok_or_else(|| ConfigError::UnknownTarget(target_name.to_string()))?;

    let mut cflags = split_flags(&target.cflags);
    if let Some(extra) = &env.cflags {
        cflags.extend(split_flags(extra));
    }

    let mut ldflags = split_flags(&target.ldflags);
    if let Some(extra) = &env.ldflags {
        ldflags.extend(split_flags(extra));
    }

    if let Some(sysroot) = &env.sysroot {
        cflags.push(format!("--sysroot={sysroot}"));
        ldflags.push(format!("--sysroot={sysroot}"));
    }

    Ok(ResolvedToolchain {
        name: target_name.to_string(),
        compiler: target.compiler.clone(),
        linker: target.linker.clone(),
        cflags,
        ldflags,
        bin_extension: target.bin_extension.clone(),
    })
}
