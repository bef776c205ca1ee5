//! External process execution for compiler and linker invocations.

use std::process::Command;

use crate::error::BuildError;

/// Captured result of one external process run to completion.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Exit code, or `None` if the process was terminated by a signal.
    pub code: Option<i32>,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl ProcessOutput {
    /// Returns `true` for a clean zero exit.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external executables to completion, capturing their output.
///
/// The build engine uses one runner for compiler, linker, and sysroot-query
/// invocations; tests substitute a scripted implementation.
pub trait ProcessRunner {
    /// Runs `program` with `args`, blocking until it exits.
    ///
    /// An `Err` means the process could not be started at all; a non-zero
    /// exit is an `Ok` with a failing [`ProcessOutput`].
    fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput, BuildError>;
}

/// [`ProcessRunner`] backed by [`std::process::Command`].
#[derive(Debug, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput, BuildError> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| BuildError::Spawn {
                program: program.to_string(),
                source: e,
            })?;

        Ok(ProcessOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_executable_is_spawn_error() {
        let err = SystemRunner
            .run("/nonexistent/cc-binary", &[])
            .unwrap_err();
        assert!(matches!(err, BuildError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn captures_exit_code_and_stdout() {
        let out = SystemRunner
            .run("/bin/sh", &["-c".to_string(), "echo hi; exit 3".to_string()])
            .unwrap();
        assert_eq!(out.code, Some(3));
        assert_eq!(out.stdout, "hi\n");
        assert!(!out.success());
    }

    #[cfg(unix)]
    #[test]
    fn success_on_zero_exit() {
        let out = SystemRunner
            .run("/bin/sh", &["-c".to_string(), "true".to_string()])
            .unwrap();
        assert!(out.success());
    }
}
