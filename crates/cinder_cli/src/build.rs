//! `cinder build` — one incremental compile-and-link pass.

use cinder_build::SystemRunner;

use crate::pipeline::{make_log, prepare};
use crate::{BuildArgs, Cli};

/// Runs the `cinder build` command.
///
/// Returns exit code 0 on success, 1 on a failed pass. Compile and link
/// failures are already reported on the log's error channel.
pub fn run(args: &BuildArgs, cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let mut ctx = prepare(cli, args)?;

    if ctx.project.iter().all(|group| group.units.is_empty()) {
        eprintln!(
            "error: no C source or object files found in {}",
            ctx.build_dir.display()
        );
        return Ok(1);
    }

    let runner = SystemRunner;
    let log = make_log(cli.quiet);

    match ctx.builder.build(&ctx.project, &runner, log.as_ref()) {
        Ok(outcome) => {
            if !cli.quiet {
                let action = if outcome.relinked { "Linked" } else { "Up to date" };
                eprintln!(
                    "   {action} {} ({})",
                    ctx.builder.artifact_name(),
                    outcome.artifact
                );
            }
            Ok(0)
        }
        Err(_) => Ok(1),
    }
}
