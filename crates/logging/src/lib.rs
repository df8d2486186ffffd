#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is a lightweight leveled console logger. Messages are filtered
//! by severity against a thread-local configuration, placeholder tokens in
//! the message template are substituted against supplied arguments (see the
//! [`formatting`] crate), and each surviving call writes exactly one
//! timestamped line to the console stream its severity selects, with red
//! decoration for critical and error lines.
//!
//! # Design
//!
//! The active `{level, format}` pair lives in thread-local state mutated
//! only by [`configure`] and read as a single snapshot per dispatch. The
//! severity-to-method and severity-to-color mappings are static tables, so
//! dispatch is one linear pass: threshold check, timestamp, message
//! formatting, template substitution, write. Output goes through the
//! [`ConsoleSink`] seam; production code uses [`ConsoleWriter`] over the
//! process streams while tests inject [`MemorySink`].
//!
//! # Invariants
//!
//! - A call at severity `L` produces output iff
//!   `L.rank() <= active.rank()`; a filtered call has no side effects.
//! - Each of the four format tokens (`%(date)s`, `%(levelname)s`,
//!   `%(name)s`, `%(message)s`) is substituted exactly once per line.
//! - No error escapes a logging call: bad configuration values degrade to
//!   defaults and console write failures are discarded.
//!
//! # Examples
//!
//! ```
//! use logging::{configure, get_logger, values, LogOptions};
//!
//! configure(&LogOptions { verbose: 1, ..LogOptions::default() });
//!
//! let logger = get_logger("transfer");
//! logger.info("copied %d files to %s", &values![42, "dest/"]);
//! logger.debug("flags: %j", &values![serde_json::json!({ "resume": true })]);
//! ```

mod config;
mod console;
mod logger;
mod severity;

pub use config::{configure, LogConfig, LogOptions, LONG_FORMAT, SHORT_FORMAT};
pub use console::{
    color_for, ConsoleMethod, ConsoleSink, ConsoleStream, ConsoleWriter, MemorySink, RED, RESET,
};
pub use logger::{get_logger, Logger};
pub use severity::Severity;

pub use formatting::{format_message, values, ErrorTrace, Value, CIRCULAR_JSON};
