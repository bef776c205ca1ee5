//! Progress and error reporting sinks for build passes.

use std::sync::Mutex;

/// A write channel for human-readable progress lines plus a separate error
/// channel.
///
/// The engine emits one line per unit (`[CC] file -> object` or
/// `[pass] file -> object`) in project declaration order, so logs are
/// reproducible across identical passes.
pub trait BuildLog {
    /// Writes one progress line.
    fn write(&self, line: &str);

    /// Writes one error line.
    fn write_error(&self, line: &str);
}

/// [`BuildLog`] that prints progress to stdout and errors to stderr.
#[derive(Debug, Default)]
pub struct TerminalLog;

impl BuildLog for TerminalLog {
    fn write(&self, line: &str) {
        println!("{line}");
    }

    fn write_error(&self, line: &str) {
        eprintln!("{line}");
    }
}

/// [`BuildLog`] that accumulates lines in memory.
///
/// Used by tests and by embedders that surface build output in their own UI.
#[derive(Debug, Default)]
pub struct MemoryLog {
    lines: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl MemoryLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the progress lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// Returns a snapshot of the error lines written so far.
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl BuildLog for MemoryLog {
    fn write(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }

    fn write_error(&self, line: &str) {
        self.errors.lock().unwrap().push(line.to_string());
    }
}
