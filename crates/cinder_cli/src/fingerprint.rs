//! `cinder fingerprint` — query the recorded artifact or source digest.

use crate::pipeline::prepare;
use crate::{Cli, FingerprintArgs};

/// Runs the `cinder fingerprint` command.
///
/// Prints the recorded artifact digest, or with `--source` a digest of the
/// whole project source tree including transitive headers. Exit code 1 when
/// no fingerprint is recorded.
pub fn run(args: &FingerprintArgs, cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let ctx = prepare(cli, &args.common)?;

    if args.source {
        let digest = ctx.builder.source_digest(&ctx.project)?;
        println!("{digest}");
        return Ok(0);
    }

    match ctx.builder.artifact_digest() {
        Some(digest) => {
            println!("{digest}");
            Ok(0)
        }
        None => {
            eprintln!(
                "error: no build fingerprint recorded in {}",
                ctx.build_dir.display()
            );
            Ok(1)
        }
    }
}
