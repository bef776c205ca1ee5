//! `cinder clean` — discard the recorded build fingerprint.

use crate::pipeline::prepare;
use crate::{BuildArgs, Cli};

/// Runs the `cinder clean` command.
///
/// Clears the in-memory and persisted artifact fingerprint, forcing the next
/// external consumer to treat the artifact as unknown. The artifact and
/// object files are left in place; a later `cinder build` reuses them.
pub fn run(args: &BuildArgs, cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let mut ctx = prepare(cli, args)?;
    ctx.builder.reset_artifact_digest();
    if !cli.quiet {
        eprintln!("   Cleared fingerprint in {}", ctx.build_dir.display());
    }
    Ok(0)
}
