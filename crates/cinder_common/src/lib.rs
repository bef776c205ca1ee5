//! Shared foundational types used across the cinder build orchestrator.
//!
//! This crate provides the content-hash type used for change detection of
//! source files and linked artifacts.

#![warn(missing_docs)]

pub mod hash;

pub use hash::ContentHash;
