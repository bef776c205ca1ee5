//! Error types for build orchestration.

use cinder_cache::CacheError;

/// Errors that abort a build pass.
///
/// Every variant is fatal for the pass in which it occurs; detailed compiler
/// and linker output goes through the [`BuildLog`](crate::log::BuildLog)
/// error channel as it is captured.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// An external executable could not be started at all.
    #[error("failed to run '{program}': {source}")]
    Spawn {
        /// The executable that could not be started.
        program: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The compiler's sysroot query exited non-zero.
    #[error("'{compiler}' failed with -print-sysroot")]
    SysrootQuery {
        /// The compiler executable that was queried.
        compiler: String,
    },

    /// A translation unit failed to compile.
    #[error("C compilation of {unit} failed")]
    CompileFailed {
        /// Basename of the failing unit.
        unit: String,
    },

    /// The final link step exited non-zero.
    #[error("link of {artifact} failed")]
    LinkFailed {
        /// Name of the artifact that could not be produced.
        artifact: String,
    },

    /// Hashing or fingerprint persistence failed.
    #[error(transparent)]
    Cache(#[from] CacheError),
}
