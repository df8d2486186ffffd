//! crates/logging/src/console.rs
//! Console method/stream tables, color decoration, and the output sink seam.

use std::io::{self, Write};

use crate::severity::Severity;

/// ANSI escape that starts red text.
pub const RED: &str = "\x1b[31m";

/// ANSI escape that resets text attributes.
pub const RESET: &str = "\x1b[0m";

/// Console method a log line is routed through, mirroring the conventional
/// console API surface (`log`, `error`, `warn`, `info`, `debug`, `trace`).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ConsoleMethod {
    /// Generic output.
    Log,
    /// Error output.
    Error,
    /// Warning output.
    Warn,
    /// Informational output.
    Info,
    /// Debug output.
    Debug,
    /// Trace output.
    Trace,
}

impl ConsoleMethod {
    /// Returns the method a severity routes through.
    ///
    /// The mapping is a static table: critical and error use the error
    /// method, warn uses warn, and so on; verbose and the `none`
    /// pseudo-level fall back to the generic log method.
    #[must_use]
    pub const fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Critical | Severity::Error => Self::Error,
            Severity::Warn => Self::Warn,
            Severity::Info => Self::Info,
            Severity::Debug => Self::Debug,
            Severity::Trace => Self::Trace,
            Severity::Verbose | Severity::None => Self::Log,
        }
    }

    /// Returns the process stream backing this method.
    #[must_use]
    pub const fn stream(self) -> ConsoleStream {
        match self {
            Self::Error | Self::Warn => ConsoleStream::Stderr,
            Self::Log | Self::Info | Self::Debug | Self::Trace => ConsoleStream::Stdout,
        }
    }
}

/// Process output stream backing a [`ConsoleMethod`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConsoleStream {
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
}

/// Returns the color escape a severity's line is wrapped in, if any.
///
/// Only critical and error lines are decorated.
#[must_use]
pub const fn color_for(severity: Severity) -> Option<&'static str> {
    match severity {
        Severity::Critical | Severity::Error => Some(RED),
        _ => None,
    }
}

/// Destination for rendered log lines.
///
/// The logger writes through this seam instead of touching the process
/// streams directly, so tests and collaborators can capture output without
/// redirecting file descriptors.
pub trait ConsoleSink {
    /// Writes one rendered line through the given console method.
    fn write_line(&mut self, method: ConsoleMethod, line: &str);
}

/// Production sink writing to the process's standard streams.
///
/// Write errors are discarded: the logger must never surface a failure into
/// the caller's control flow.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleWriter;

impl ConsoleSink for ConsoleWriter {
    fn write_line(&mut self, method: ConsoleMethod, line: &str) {
        match method.stream() {
            ConsoleStream::Stdout => {
                let _ = writeln!(io::stdout().lock(), "{line}");
            }
            ConsoleStream::Stderr => {
                let _ = writeln!(io::stderr().lock(), "{line}");
            }
        }
    }
}

/// In-memory sink recording `(method, line)` pairs.
///
/// # Examples
///
/// ```
/// use logging::{ConsoleMethod, ConsoleSink, MemorySink};
///
/// let mut sink = MemorySink::new();
/// sink.write_line(ConsoleMethod::Info, "ready");
///
/// assert_eq!(sink.lines(), &[(ConsoleMethod::Info, "ready".to_owned())]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    lines: Vec<(ConsoleMethod, String)>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded lines in write order.
    #[must_use]
    pub fn lines(&self) -> &[(ConsoleMethod, String)] {
        &self.lines
    }

    /// Reports whether nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Removes and returns all recorded lines.
    pub fn drain(&mut self) -> Vec<(ConsoleMethod, String)> {
        self.lines.drain(..).collect()
    }
}

impl ConsoleSink for MemorySink {
    fn write_line(&mut self, method: ConsoleMethod, line: &str) {
        self.lines.push((method, line.to_owned()));
    }
}
