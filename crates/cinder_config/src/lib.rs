//! Parsing and resolution of `cinder.toml` project configuration files.
//!
//! This crate reads the project configuration file and produces a
//! strongly-typed [`ProjectConfig`], then resolves a named target together
//! with environment overrides into a [`ResolvedToolchain`] of structured
//! compiler and linker flag lists.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use resolve::{
    resolve_toolchain, split_flags, EnvOverrides, ResolvedToolchain, SYSROOT_PLACEHOLDER,
};
pub use types::*;
