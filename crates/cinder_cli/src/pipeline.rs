//! Shared command plumbing: config loading, target selection, builder setup.

use std::path::{Path, PathBuf};

use cinder_build::{discover_units, Builder, BuildLog, LocationGroup, TerminalLog};
use cinder_config::{resolve_toolchain, ConfigError, EnvOverrides, ProjectConfig};

use crate::{BuildArgs, Cli};

/// Everything a build-directory-scoped command needs.
pub struct BuildContext {
    /// The orchestrator, bound to the build directory.
    pub builder: Builder,
    /// The discovered project descriptor.
    pub project: Vec<LocationGroup>,
    /// The build directory itself, for messages.
    pub build_dir: PathBuf,
}

/// Loads the configuration, resolves the toolchain, and discovers the
/// project's units for one command invocation.
pub fn prepare(cli: &Cli, args: &BuildArgs) -> Result<BuildContext, Box<dyn std::error::Error>> {
    let root = cli
        .project_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let config = cinder_config::load_config(&root)?;
    let target_name = select_target(&config, args.target.as_deref())?;
    let toolchain = resolve_toolchain(&config, &target_name, &EnvOverrides::from_env())?;

    let build_dir = args
        .build_dir
        .clone()
        .unwrap_or_else(|| root.join("build"));
    let project = discover_units(&build_dir)?;
    let builder = Builder::new(&config.project.name, toolchain, &build_dir);

    Ok(BuildContext {
        builder,
        project,
        build_dir,
    })
}

/// Picks the target to build: the one named on the command line, else the
/// configured default, else the only one defined.
pub fn select_target(
    config: &ProjectConfig,
    requested: Option<&str>,
) -> Result<String, ConfigError> {
    if let Some(name) = requested {
        return Ok(name.to_string());
    }
    if let Some(name) = &config.project.default_target {
        return Ok(name.clone());
    }
    if config.targets.len() == 1 {
        if let Some(name) = config.targets.keys().next() {
            return Ok(name.clone());
        }
    }
    Err(ConfigError::MissingField(
        "project.default_target".to_string(),
    ))
}

/// Log sink selected by the `--quiet` flag: errors always reach stderr,
/// progress lines are dropped when quiet.
pub struct QuietLog;

impl BuildLog for QuietLog {
    fn write(&self, _line: &str) {}

    fn write_error(&self, line: &str) {
        eprintln!("{line}");
    }
}

/// Returns the log sink for the given quietness.
pub fn make_log(quiet: bool) -> Box<dyn BuildLog> {
    if quiet {
        Box::new(QuietLog)
    } else {
        Box::new(TerminalLog)
    }
}
