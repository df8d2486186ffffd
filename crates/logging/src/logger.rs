//! crates/logging/src/logger.rs
//! Named logger handles and the shared dispatch routine.

use chrono::Local;
use formatting::{format_message, Value};

use crate::config::{self, LogConfig};
use crate::console::{color_for, ConsoleMethod, ConsoleSink, ConsoleWriter, RESET};
use crate::severity::Severity;

/// Named handle for emitting leveled log lines.
///
/// Loggers are immutable values holding only a display name; any number may
/// exist at once, all reading the same thread-local configuration. Create
/// them with [`get_logger`].
///
/// # Examples
///
/// ```
/// use logging::{configure, get_logger, values, LogOptions, MemorySink, Severity};
///
/// configure(&LogOptions { verbose: 3, ..LogOptions::default() });
///
/// let logger = get_logger("svc");
/// let mut sink = MemorySink::new();
/// logger.log_to(&mut sink, Severity::Trace, "ready: %s", &values!["x"]);
///
/// assert!(sink.lines()[0].1.contains("ready: x"));
/// assert!(sink.lines()[0].1.contains("[svc]"));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Logger {
    name: String,
}

/// Constructs an independent logger bound to a display name.
///
/// There is no registry and no deduplication; two calls with the same name
/// yield two equal but independent values.
#[must_use]
pub fn get_logger<N: Into<String>>(name: N) -> Logger {
    Logger::new(name)
}

impl Logger {
    /// Creates a logger with the given display name.
    #[must_use]
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self { name: name.into() }
    }

    /// Returns the logger's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reports whether a call at `severity` would currently produce output.
    ///
    /// Performs only the threshold comparison; no formatting, no writing.
    /// Collaborators use this to skip building expensive log arguments.
    #[must_use]
    pub fn is_enabled_for(&self, severity: Severity) -> bool {
        severity.enabled_at(config::snapshot().level())
    }

    /// Name-based variant of [`is_enabled_for`](Self::is_enabled_for).
    ///
    /// Unknown severity names are never enabled.
    #[must_use]
    pub fn is_enabled_for_name(&self, name: &str) -> bool {
        Severity::from_name(name).is_some_and(|severity| self.is_enabled_for(severity))
    }

    /// Dispatches one log call to the process console streams.
    pub fn log(&self, severity: Severity, message: &str, args: &[Value]) {
        self.log_to(&mut ConsoleWriter, severity, message, args);
    }

    /// Dispatches one log call to an explicit sink.
    ///
    /// The configuration is read once as a snapshot, the threshold check
    /// runs against it, and below-threshold calls return with no side
    /// effects at all. Otherwise the message template is substituted against
    /// `args`, the line is assembled from the snapshot's format string, and
    /// exactly one line is written through the severity's console method,
    /// wrapped in red for critical and error.
    pub fn log_to<S: ConsoleSink + ?Sized>(
        &self,
        sink: &mut S,
        severity: Severity,
        message: &str,
        args: &[Value],
    ) {
        let config = config::snapshot();
        if !severity.enabled_at(config.level()) {
            return;
        }

        let line = render_line(config, severity, &self.name, message, args);
        sink.write_line(ConsoleMethod::for_severity(severity), &line);
    }

    /// Logs at the `critical` level.
    pub fn critical(&self, message: &str, args: &[Value]) {
        self.log(Severity::Critical, message, args);
    }

    /// Logs at the `error` level.
    pub fn error(&self, message: &str, args: &[Value]) {
        self.log(Severity::Error, message, args);
    }

    /// Logs at the `warn` level.
    pub fn warn(&self, message: &str, args: &[Value]) {
        self.log(Severity::Warn, message, args);
    }

    /// Logs at the `info` level.
    pub fn info(&self, message: &str, args: &[Value]) {
        self.log(Severity::Info, message, args);
    }

    /// Logs at the `debug` level.
    pub fn debug(&self, message: &str, args: &[Value]) {
        self.log(Severity::Debug, message, args);
    }

    /// Logs at the `verbose` level.
    pub fn verbose(&self, message: &str, args: &[Value]) {
        self.log(Severity::Verbose, message, args);
    }

    /// Logs at the `trace` level.
    pub fn trace(&self, message: &str, args: &[Value]) {
        self.log(Severity::Trace, message, args);
    }
}

/// Assembles the final output line from a configuration snapshot.
///
/// Each of the four format tokens occurs at most once in a template, so a
/// single `replacen` per token substitutes exactly one occurrence.
fn render_line(
    config: LogConfig,
    severity: Severity,
    name: &str,
    message: &str,
    args: &[Value],
) -> String {
    let formatted = format_message(message, args);
    let line = config
        .format()
        .replacen("%(date)s", &timestamp(), 1)
        .replacen("%(levelname)s", severity.label(), 1)
        .replacen("%(name)s", name, 1)
        .replacen("%(message)s", &formatted, 1);

    match color_for(severity) {
        Some(color) => format!("{color}{line}{RESET}"),
        None => line,
    }
}

/// Renders the current local wall-clock time as `YYYY-MM-DD HH:MM:SS`.
fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
