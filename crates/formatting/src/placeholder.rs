//! crates/formatting/src/placeholder.rs
//! Left-to-right placeholder scanning and substitution.

use crate::value::Value;

/// Recognized placeholder tokens and the rendering rule each selects.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Token {
    /// `%s` - plain string rendering.
    Display,
    /// `%d` - numeric coercion.
    Numeric,
    /// `%j` - pretty-printed JSON.
    Json,
    /// `%O` - pretty-printed JSON, with errors expanded to their
    /// `{name, message, stack}` object.
    Inspect,
    /// `%?` - detailed rendering (errors with stack, objects as JSON).
    Detail,
}

impl Token {
    const fn from_spec(spec: char) -> Option<Self> {
        match spec {
            's' => Some(Self::Display),
            'd' => Some(Self::Numeric),
            'j' => Some(Self::Json),
            'O' => Some(Self::Inspect),
            '?' => Some(Self::Detail),
            _ => None,
        }
    }

    fn render(self, value: &Value) -> String {
        match self {
            Self::Display => value.plain(),
            Self::Numeric => value.number(),
            Self::Json | Self::Inspect => value.pretty(),
            Self::Detail => value.detail(),
        }
    }
}

/// Substitutes placeholder tokens in `template` against `args`.
///
/// The template is scanned once, left to right. Each recognized token
/// (`%s`, `%d`, `%j`, `%O`, `%?`) consumes the next unused argument; a token
/// with no argument left remains verbatim in the output. Arguments that no
/// token consumed are appended to the result, each preceded by a single
/// space and rendered with the same rule `%?` uses.
///
/// The function never fails: malformed tokens pass through unchanged and
/// unserializable values render as [`CIRCULAR_JSON`](crate::CIRCULAR_JSON).
///
/// # Examples
///
/// ```
/// use formatting::{format_message, values};
///
/// assert_eq!(format_message("%s-%d", &values!["a", 3]), "a-3");
/// assert_eq!(format_message("no tokens", &values![7]), "no tokens 7");
/// ```
#[must_use]
pub fn format_message(template: &str, args: &[Value]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut consumed = 0;
    let mut chars = template.chars().peekable();

    while let Some(current) = chars.next() {
        if current == '%' {
            if let Some(token) = chars.peek().copied().and_then(Token::from_spec) {
                chars.next();
                if let Some(arg) = args.get(consumed) {
                    output.push_str(&token.render(arg));
                    consumed += 1;
                } else {
                    // No corresponding argument left; keep the token as-is.
                    output.push('%');
                    output.push(spec_char(token));
                }
                continue;
            }
        }
        output.push(current);
    }

    for leftover in &args[consumed..] {
        output.push(' ');
        output.push_str(&leftover.detail());
    }

    output
}

const fn spec_char(token: Token) -> char {
    match token {
        Token::Display => 's',
        Token::Numeric => 'd',
        Token::Json => 'j',
        Token::Inspect => 'O',
        Token::Detail => '?',
    }
}
