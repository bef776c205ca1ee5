//! The rebuild decision engine of the cinder build orchestrator.
//!
//! Given a project descriptor (ordered groups of source and object files), a
//! resolved toolchain, a process runner, and a log sink, the [`Builder`]
//! decides per translation unit whether recompilation is needed, compiles the
//! changed units, relinks when anything changed, and records the artifact's
//! content fingerprint.

#![warn(missing_docs)]

pub mod builder;
pub mod error;
pub mod log;
pub mod project;
pub mod runner;

pub use builder::{Builder, BuildOutcome};
pub use error::BuildError;
pub use log::{BuildLog, MemoryLog, TerminalLog};
pub use project::{discover_units, FileKind, LocationGroup, SourceUnit};
pub use runner::{ProcessOutput, ProcessRunner, SystemRunner};
