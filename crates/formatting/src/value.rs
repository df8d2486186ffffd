//! crates/formatting/src/value.rs
//! Argument value model and the per-token rendering rules.

use std::fmt;
use std::panic::Location;

use serde::Serialize;

/// Literal substituted when a JSON rendering cannot be produced.
pub const CIRCULAR_JSON: &str = "[Circular JSON]";

/// Error-like value carrying a name, message, and stack text.
///
/// Rust errors carry no implicit stack string, so constructors capture the
/// calling location via [`Location::caller`] and render it as a single
/// `at file:line:column` frame. [`ErrorTrace::with_stack`] replaces that
/// frame when richer trace text is available.
///
/// # Examples
///
/// ```
/// use formatting::ErrorTrace;
///
/// let trace = ErrorTrace::new("Error", "boom");
/// assert_eq!(trace.message(), "boom");
/// assert!(trace.stack().contains(".rs:"));
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ErrorTrace {
    name: String,
    message: String,
    stack: String,
}

impl ErrorTrace {
    /// Creates an error trace with the given name and message.
    ///
    /// The stack frame records the caller of this constructor.
    #[must_use]
    #[track_caller]
    pub fn new<N: Into<String>, M: Into<String>>(name: N, message: M) -> Self {
        let caller = Location::caller();
        Self {
            name: name.into(),
            message: message.into(),
            stack: format!("    at {}:{}:{}", caller.file(), caller.line(), caller.column()),
        }
    }

    /// Adapts any [`std::error::Error`] into an error trace.
    ///
    /// The error's type does not survive the conversion; the rendered name is
    /// the conventional `Error` and the message is the error's `Display`
    /// output.
    #[must_use]
    #[track_caller]
    pub fn from_error(error: &dyn std::error::Error) -> Self {
        Self::new("Error", error.to_string())
    }

    /// Replaces the captured stack text.
    #[must_use]
    pub fn with_stack<S: Into<String>>(mut self, stack: S) -> Self {
        self.stack = stack.into();
        self
    }

    /// Returns the error name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the stack text.
    #[must_use]
    pub fn stack(&self) -> &str {
        &self.stack
    }
}

impl fmt::Display for ErrorTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

/// A log argument awaiting placeholder substitution.
///
/// Each variant renders differently depending on which placeholder token
/// consumes it; see the method documentation for the exact rules.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Plain text.
    Text(String),
    /// Numeric value.
    Number(f64),
    /// Boolean value.
    Bool(bool),
    /// Structured value captured as JSON.
    Json(serde_json::Value),
    /// Error-like value with name, message, and stack.
    Error(ErrorTrace),
    /// Value whose serialization already failed when it was captured.
    ///
    /// Renders as [`CIRCULAR_JSON`] under every JSON rule.
    Unserializable,
}

impl Value {
    /// Captures any [`Serialize`] value as [`Value::Json`].
    ///
    /// Serialization failure degrades to the [`CIRCULAR_JSON`] text rather
    /// than surfacing an error, keeping the logging path infallible.
    #[must_use]
    pub fn json<T: Serialize>(value: &T) -> Self {
        serde_json::to_value(value).map_or(Self::Unserializable, Self::Json)
    }

    /// Plain string rendering, used by `%s`.
    ///
    /// Text passes through unchanged, integral numbers drop the fractional
    /// part, JSON strings are unquoted, other JSON renders compact, and
    /// errors render as `name: message`.
    #[must_use]
    pub fn plain(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(number) => render_number(*number),
            Self::Bool(value) => value.to_string(),
            Self::Json(serde_json::Value::String(text)) => text.clone(),
            Self::Json(value) => value.to_string(),
            Self::Error(trace) => trace.to_string(),
            Self::Unserializable => CIRCULAR_JSON.to_owned(),
        }
    }

    /// Numeric rendering, used by `%d`.
    ///
    /// Values that do not coerce to a number render as `NaN`.
    #[must_use]
    pub fn number(&self) -> String {
        let coerced = match self {
            Self::Number(number) => Some(*number),
            Self::Text(text) => text.trim().parse::<f64>().ok(),
            Self::Bool(value) => Some(if *value { 1.0 } else { 0.0 }),
            Self::Json(serde_json::Value::Number(number)) => number.as_f64(),
            Self::Json(serde_json::Value::String(text)) => text.trim().parse::<f64>().ok(),
            Self::Json(_) | Self::Error(_) | Self::Unserializable => None,
        };

        coerced.map_or_else(|| String::from("NaN"), render_number)
    }

    /// Pretty-printed JSON rendering with 2-space indent, used by `%j` and `%O`.
    ///
    /// Error values serialize as their `{name, message, stack}` object. A
    /// value that cannot be serialized renders as [`CIRCULAR_JSON`].
    #[must_use]
    pub fn pretty(&self) -> String {
        let rendered = match self {
            Self::Text(text) => serde_json::to_string_pretty(text),
            Self::Number(number) => serde_json::to_string_pretty(&json_number(*number)),
            Self::Bool(value) => serde_json::to_string_pretty(value),
            Self::Json(value) => serde_json::to_string_pretty(value),
            Self::Error(trace) => serde_json::to_string_pretty(trace),
            Self::Unserializable => return CIRCULAR_JSON.to_owned(),
        };

        rendered.unwrap_or_else(|_| CIRCULAR_JSON.to_owned())
    }

    /// Detailed rendering, used by `%?` and for leftover arguments.
    ///
    /// Errors render as `Error: message` followed by the stack text on its
    /// own line; JSON objects, arrays, and null render pretty-printed;
    /// everything else falls back to [`plain`](Self::plain).
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Error(trace) => format!("Error: {}\n{}", trace.message, trace.stack),
            Self::Json(value) if value.is_object() || value.is_array() || value.is_null() => {
                self.pretty()
            }
            Self::Unserializable => CIRCULAR_JSON.to_owned(),
            _ => self.plain(),
        }
    }
}

/// Renders a float the way log output expects: integral values without a
/// trailing fraction, non-numbers as `NaN`.
fn render_number(number: f64) -> String {
    if number.is_nan() {
        return String::from("NaN");
    }

    #[allow(clippy::cast_possible_truncation)]
    if number.is_finite() && number.fract() == 0.0 && number.abs() < 9_007_199_254_740_992.0 {
        return (number as i64).to_string();
    }

    number.to_string()
}

/// Converts a float into a JSON number, preserving integral values exactly.
/// Non-finite floats have no JSON representation and map to null.
fn json_number(number: f64) -> serde_json::Value {
    #[allow(clippy::cast_possible_truncation)]
    if number.is_finite() && number.fract() == 0.0 && number.abs() < 9_007_199_254_740_992.0 {
        return serde_json::Value::from(number as i64);
    }

    serde_json::Number::from_f64(number).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

impl From<ErrorTrace> for Value {
    fn from(trace: ErrorTrace) -> Self {
        Self::Error(trace)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

macro_rules! value_from_number {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn from(number: $ty) -> Self {
                    Self::Number(number as f64)
                }
            }
        )+
    };
}

value_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_renders_text_unchanged() {
        assert_eq!(Value::from("hello").plain(), "hello");
    }

    #[test]
    fn plain_drops_fraction_on_integral_numbers() {
        assert_eq!(Value::from(3).plain(), "3");
        assert_eq!(Value::from(-7i64).plain(), "-7");
        assert_eq!(Value::from(2.5).plain(), "2.5");
    }

    #[test]
    fn plain_unquotes_json_strings() {
        assert_eq!(Value::from(json!("abc")).plain(), "abc");
        assert_eq!(Value::from(json!({"a": 1})).plain(), "{\"a\":1}");
    }

    #[test]
    fn number_coerces_text_and_bools() {
        assert_eq!(Value::from("42").number(), "42");
        assert_eq!(Value::from(" 2.5 ").number(), "2.5");
        assert_eq!(Value::from(true).number(), "1");
        assert_eq!(Value::from(false).number(), "0");
    }

    #[test]
    fn number_renders_nan_for_non_numeric_input() {
        assert_eq!(Value::from("abc").number(), "NaN");
        assert_eq!(Value::from(json!({"a": 1})).number(), "NaN");
        assert_eq!(Value::from(ErrorTrace::new("Error", "x")).number(), "NaN");
    }

    #[test]
    fn pretty_uses_two_space_indent() {
        let value = Value::from(json!({"a": 1}));
        assert_eq!(value.pretty(), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn pretty_serializes_errors_as_objects() {
        let trace = ErrorTrace::new("Error", "boom").with_stack("    at src/lib.rs:1:1");
        let rendered = Value::from(trace).pretty();
        assert!(rendered.contains("\"name\": \"Error\""));
        assert!(rendered.contains("\"message\": \"boom\""));
        assert!(rendered.contains("\"stack\""));
    }

    #[test]
    fn detail_renders_error_message_then_stack() {
        let trace = ErrorTrace::new("Error", "boom");
        let rendered = Value::from(trace).detail();
        assert!(rendered.starts_with("Error: boom\n"));
        assert!(rendered.contains("value.rs:"));
    }

    #[test]
    fn detail_pretty_prints_objects_and_arrays() {
        assert_eq!(Value::from(json!([1, 2])).detail(), "[\n  1,\n  2\n]");
        assert_eq!(Value::from(json!(null)).detail(), "null");
        assert_eq!(Value::from("plain").detail(), "plain");
        assert_eq!(Value::from(5).detail(), "5");
    }

    #[test]
    fn json_capture_accepts_any_serialize() {
        #[derive(Serialize)]
        struct Probe {
            id: u32,
        }

        let value = Value::json(&Probe { id: 9 });
        assert_eq!(value.pretty(), "{\n  \"id\": 9\n}");
    }

    #[test]
    fn unserializable_renders_circular_literal_everywhere() {
        let value = Value::Unserializable;
        assert_eq!(value.plain(), CIRCULAR_JSON);
        assert_eq!(value.pretty(), CIRCULAR_JSON);
        assert_eq!(value.detail(), CIRCULAR_JSON);
        assert_eq!(value.number(), "NaN");
    }

    #[test]
    fn error_trace_records_caller_location() {
        let trace = ErrorTrace::new("Error", "boom");
        assert!(trace.stack().contains("value.rs"));
        assert!(trace.stack().trim_start().starts_with("at "));
    }

    #[test]
    fn from_error_uses_display_output() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "pipe closed");
        let trace = ErrorTrace::from_error(&io);
        assert_eq!(trace.message(), "pipe closed");
        assert_eq!(trace.name(), "Error");
    }
}
