//! crates/logging/src/severity.rs
//! Severity table: named levels, numeric ranks, and name lookup.

/// Named logging severity with a fixed numeric rank.
///
/// Ranks are totally ordered and fixed at compile time: [`Severity::None`]
/// is the most restrictive (rank 0) and [`Severity::Trace`] the least
/// (rank 7). A message at level `L` is emitted iff
/// `L.rank() <= active.rank()`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Severity {
    /// Pseudo-level that suppresses all output when active.
    None,
    /// Unrecoverable condition.
    Critical,
    /// Operation failed.
    Error,
    /// Something suspicious, operation continues.
    Warn,
    /// Normal operational message.
    Info,
    /// Developer diagnostics.
    Debug,
    /// Chatty diagnostics.
    Verbose,
    /// Finest-grained tracing.
    Trace,
}

impl Severity {
    /// Every severity in ascending rank order.
    pub const ALL: [Self; 8] = [
        Self::None,
        Self::Critical,
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
        Self::Verbose,
        Self::Trace,
    ];

    /// Returns the severity's numeric rank (0 = most restrictive).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Critical => 1,
            Self::Error => 2,
            Self::Warn => 3,
            Self::Info => 4,
            Self::Debug => 5,
            Self::Verbose => 6,
            Self::Trace => 7,
        }
    }

    /// Returns the lowercase level name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Critical => "critical",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Verbose => "verbose",
            Self::Trace => "trace",
        }
    }

    /// Returns the upper-cased label used in rendered log lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Critical => "CRITICAL",
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Verbose => "VERBOSE",
            Self::Trace => "TRACE",
        }
    }

    /// Looks a severity up by name, case-insensitively.
    ///
    /// Returns `None` for unrecognized names; callers treat that as "never
    /// logs" rather than an error.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(name))
    }

    /// Reports whether a message at this severity passes the threshold set
    /// by `active`.
    #[must_use]
    pub const fn enabled_at(self, active: Self) -> bool {
        self.rank() <= active.rank()
    }
}
