//! crates/logging/src/config.rs
//! Thread-local log configuration and the `configure` entry point.

use std::cell::RefCell;

use crate::severity::Severity;

/// Output-line template used when the active level is `info` or stricter.
pub const SHORT_FORMAT: &str = "[%(date)s] %(levelname)s: %(message)s";

/// Output-line template used for levels more verbose than `info`; adds the
/// logger name.
pub const LONG_FORMAT: &str = "[%(date)s] %(levelname)s: [%(name)s] %(message)s";

/// Options accepted by [`configure`].
///
/// All fields are optional in effect: the default value configures the
/// default behavior (`info` level, short format).
///
/// # Examples
///
/// ```
/// use logging::{configure, LogOptions};
///
/// configure(&LogOptions {
///     verbose: 2,
///     ..LogOptions::default()
/// });
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LogOptions {
    /// Explicit level name (e.g. `"error"`). Unrecognized names are
    /// silently ignored and the `verbose` mapping applies instead.
    pub level: Option<String>,
    /// Verbosity step: 0 selects `info`, 1 `debug`, 2 `verbose`, 3 `trace`.
    /// Any other value falls back to `info`.
    pub verbose: u8,
    /// When set, suppresses all output regardless of the other fields.
    pub silent: bool,
}

/// Snapshot of the active level and output-line format.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LogConfig {
    level: Severity,
    format: &'static str,
}

impl LogConfig {
    /// Initial configuration before any [`configure`] call.
    pub const DEFAULT: Self = Self::for_level(Severity::Info);

    /// Builds the configuration for a resolved level, deriving the format:
    /// short when the level is `info` or stricter, long otherwise.
    #[must_use]
    pub const fn for_level(level: Severity) -> Self {
        let format = if level.rank() <= Severity::Info.rank() {
            SHORT_FORMAT
        } else {
            LONG_FORMAT
        };
        Self { level, format }
    }

    /// Returns the active severity threshold.
    #[must_use]
    pub const fn level(self) -> Severity {
        self.level
    }

    /// Returns the active output-line format template.
    #[must_use]
    pub const fn format(self) -> &'static str {
        self.format
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

thread_local! {
    static CONFIG: RefCell<LogConfig> = const { RefCell::new(LogConfig::DEFAULT) };
}

/// Applies logging options to the current thread's configuration.
///
/// Resolution order: `silent` wins and selects [`Severity::None`]; otherwise
/// a recognized `level` name applies (case-insensitive, normalized here and
/// never again on the dispatch path); otherwise the `verbose` step maps to a
/// level, with out-of-range values degrading to `info`. Never fails.
///
/// # Examples
///
/// ```
/// use logging::{configure, get_logger, LogOptions, Severity};
///
/// configure(&LogOptions {
///     level: Some("error".to_owned()),
///     ..LogOptions::default()
/// });
/// assert!(!get_logger("svc").is_enabled_for(Severity::Warn));
/// assert!(get_logger("svc").is_enabled_for(Severity::Error));
/// ```
pub fn configure(options: &LogOptions) {
    let resolved = if options.silent {
        Severity::None
    } else if let Some(level) = options.level.as_deref().and_then(Severity::from_name) {
        level
    } else {
        match options.verbose {
            1 => Severity::Debug,
            2 => Severity::Verbose,
            3 => Severity::Trace,
            _ => Severity::Info,
        }
    };

    CONFIG.with(|config| {
        *config.borrow_mut() = LogConfig::for_level(resolved);
    });
}

/// Reads the current thread's configuration as a single snapshot.
///
/// Dispatch takes one snapshot per call so the threshold check and the
/// format substitution always see the same `{level, format}` pair.
#[must_use]
pub fn snapshot() -> LogConfig {
    CONFIG.with(|config| *config.borrow())
}
