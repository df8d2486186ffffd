#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `formatting` implements the message-template half of the console logger:
//! a [`Value`] model for heterogeneous log arguments and a single-pass
//! placeholder substitution routine, [`format_message`]. Templates carry the
//! two-character tokens `%s`, `%d`, `%j`, `%O`, and `%?`; each occurrence
//! consumes the next unused argument in order, and arguments left over after
//! the scan are appended to the rendered string.
//!
//! # Design
//!
//! The scan is strictly left to right because argument consumption order is
//! part of the observable contract. Token recognition and rendering are
//! table-driven: a token maps to one of the [`Value`] rendering rules
//! (`plain`, `number`, `pretty`, `detail`) and nothing else branches on the
//! token kind. The crate performs no I/O and holds no global state.
//!
//! # Invariants
//!
//! - A token with no remaining argument stays verbatim in the output.
//! - Leftover arguments are appended space-separated, rendered with the same
//!   rule `%?` uses.
//! - No operation panics or returns an error; serialization failure inside a
//!   JSON rendering substitutes the literal [`CIRCULAR_JSON`] text.
//!
//! # Examples
//!
//! ```
//! use formatting::{format_message, values};
//!
//! let line = format_message("reconnect %s attempt %d", &values!["peer-1", 3]);
//! assert_eq!(line, "reconnect peer-1 attempt 3");
//!
//! // Missing arguments leave the token untouched.
//! assert_eq!(format_message("%s %s", &values!["only"]), "only %s");
//! ```

mod placeholder;
mod value;

pub use placeholder::format_message;
pub use value::{ErrorTrace, Value, CIRCULAR_JSON};

/// Builds a `Vec<`[`Value`]`>` from heterogeneous arguments.
///
/// Every argument is converted through [`Value::from`], so anything with a
/// `From` conversion into [`Value`] (strings, integers, floats, booleans,
/// [`serde_json::Value`], [`ErrorTrace`]) can be mixed freely.
///
/// # Examples
///
/// ```
/// use formatting::{format_message, values};
///
/// let args = values!["svc", 2, serde_json::json!({ "retry": true })];
/// let line = format_message("%s attempt %d %j", &args);
/// assert!(line.contains("\"retry\": true"));
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($arg)),+]
    };
}
