//! cinder CLI — the command-line interface for the cinder build orchestrator.
//!
//! Provides `cinder build` for incremental compile-and-link passes,
//! `cinder fingerprint` for querying the recorded artifact digest, and
//! `cinder clean` for discarding it.

#![warn(missing_docs)]

mod build;
mod clean;
mod fingerprint;
mod pipeline;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

/// cinder — an incremental native-build orchestrator.
#[derive(Parser, Debug)]
#[command(name = "cinder", version, about = "Incremental C build orchestrator")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Project directory containing `cinder.toml` (defaults to the current
    /// directory).
    #[arg(long, global = true)]
    pub project_dir: Option<PathBuf>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile changed units and relink if anything changed.
    Build(BuildArgs),
    /// Print the recorded fingerprint of the last successful build.
    Fingerprint(FingerprintArgs),
    /// Forget the recorded build fingerprint.
    Clean(BuildArgs),
}

/// Arguments shared by the build-directory-scoped subcommands.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Target name from `cinder.toml`.
    #[arg(short, long)]
    pub target: Option<String>,

    /// Build directory with the generated sources (defaults to
    /// `<project_dir>/build`).
    #[arg(short, long)]
    pub build_dir: Option<PathBuf>,
}

/// Arguments for the `cinder fingerprint` subcommand.
#[derive(Parser, Debug)]
pub struct FingerprintArgs {
    /// Common build-directory arguments.
    #[command(flatten)]
    pub common: BuildArgs,

    /// Hash the project source tree instead of reading the artifact
    /// fingerprint.
    #[arg(long)]
    pub source: bool,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Build(ref args) => build::run(args, &cli),
        Command::Fingerprint(ref args) => fingerprint::run(args, &cli),
        Command::Clean(ref args) => clean::run(args, &cli),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
