//! End-to-end dispatch tests: line shape, stream routing, and color.
//!
//! Test coverage:
//! 1. Full trace-level line shape (timestamp, label, name, message)
//! 2. Severity-to-console-method routing
//! 3. Red decoration for critical/error only
//! 4. Placeholder formatting flowing through dispatch

use logging::{
    configure, get_logger, values, ConsoleMethod, ConsoleStream, ErrorTrace, LogOptions,
    MemorySink, Severity, RED, RESET,
};

fn is_timestamp(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 19
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes[10] == b' '
        && bytes[13] == b':'
        && bytes[16] == b':'
        && [0, 1, 2, 3, 5, 6, 8, 9, 11, 12, 14, 15, 17, 18]
            .iter()
            .all(|&index| bytes[index].is_ascii_digit())
}

// ============================================================================
// Test 1: Full Line Shape
// ============================================================================

/// Verifies the complete trace scenario: one line carrying the timestamp,
/// the TRACE label, the logger name, and the substituted message.
#[test]
fn trace_line_carries_all_components() {
    configure(&LogOptions {
        verbose: 3,
        ..LogOptions::default()
    });

    let mut sink = MemorySink::new();
    get_logger("svc").log_to(
        &mut sink,
        Severity::Trace,
        "Testing placeholders: %s",
        &values!["x"],
    );

    let lines = sink.drain();
    assert_eq!(lines.len(), 1);

    let line = &lines[0].1;
    // Long format: "[<date>] TRACE: [svc] <message>"
    assert!(line.starts_with('['), "{line}");
    assert!(is_timestamp(&line[1..20]), "{line}");
    assert_eq!(&line[20..], "] TRACE: [svc] Testing placeholders: x");
}

/// Verifies the short-format line shape at the info level.
#[test]
fn info_line_uses_short_format() {
    configure(&LogOptions::default());

    let mut sink = MemorySink::new();
    get_logger("svc").log_to(&mut sink, Severity::Info, "ready", &values![]);

    let line = sink.drain().remove(0).1;
    assert!(is_timestamp(&line[1..20]), "{line}");
    assert_eq!(&line[20..], "] INFO: ready");
}

// ============================================================================
// Test 2: Stream Routing
// ============================================================================

/// Verifies every severity routes through its table-assigned method.
#[test]
fn severities_route_to_expected_methods() {
    configure(&LogOptions {
        verbose: 3,
        ..LogOptions::default()
    });

    let expectations = [
        (Severity::Critical, ConsoleMethod::Error),
        (Severity::Error, ConsoleMethod::Error),
        (Severity::Warn, ConsoleMethod::Warn),
        (Severity::Info, ConsoleMethod::Info),
        (Severity::Debug, ConsoleMethod::Debug),
        (Severity::Verbose, ConsoleMethod::Log),
        (Severity::Trace, ConsoleMethod::Trace),
    ];

    for (severity, expected) in expectations {
        let mut sink = MemorySink::new();
        get_logger("svc").log_to(&mut sink, severity, "probe", &values![]);
        let lines = sink.drain();
        assert_eq!(lines.len(), 1, "{severity:?}");
        assert_eq!(lines[0].0, expected, "{severity:?}");
    }
}

/// Verifies error and warn methods back onto stderr, the rest onto stdout.
#[test]
fn methods_select_expected_streams() {
    assert_eq!(ConsoleMethod::Error.stream(), ConsoleStream::Stderr);
    assert_eq!(ConsoleMethod::Warn.stream(), ConsoleStream::Stderr);
    assert_eq!(ConsoleMethod::Info.stream(), ConsoleStream::Stdout);
    assert_eq!(ConsoleMethod::Debug.stream(), ConsoleStream::Stdout);
    assert_eq!(ConsoleMethod::Trace.stream(), ConsoleStream::Stdout);
    assert_eq!(ConsoleMethod::Log.stream(), ConsoleStream::Stdout);
}

// ============================================================================
// Test 3: Color Decoration
// ============================================================================

/// Verifies critical and error lines are wrapped in the red escape pair.
#[test]
fn critical_and_error_lines_are_red() {
    configure(&LogOptions {
        verbose: 3,
        ..LogOptions::default()
    });

    for severity in [Severity::Critical, Severity::Error] {
        let mut sink = MemorySink::new();
        get_logger("svc").log_to(&mut sink, severity, "bad", &values![]);
        let line = sink.drain().remove(0).1;
        assert!(line.starts_with(RED), "{severity:?}: {line}");
        assert!(line.ends_with(RESET), "{severity:?}: {line}");
    }
}

/// Verifies no other severity carries escape sequences.
#[test]
fn other_severities_are_undecorated() {
    configure(&LogOptions {
        verbose: 3,
        ..LogOptions::default()
    });

    for severity in [
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
        Severity::Verbose,
        Severity::Trace,
    ] {
        let mut sink = MemorySink::new();
        get_logger("svc").log_to(&mut sink, severity, "fine", &values![]);
        let line = sink.drain().remove(0).1;
        assert!(!line.contains('\x1b'), "{severity:?}: {line}");
    }
}

// ============================================================================
// Test 4: Formatting Through Dispatch
// ============================================================================

/// Verifies leftover arguments reach the rendered line.
#[test]
fn leftover_arguments_appear_in_output() {
    configure(&LogOptions::default());

    let mut sink = MemorySink::new();
    get_logger("svc").log_to(
        &mut sink,
        Severity::Info,
        "payload",
        &values![serde_json::json!({"a": 1}), 5],
    );

    let line = sink.drain().remove(0).1;
    assert!(line.ends_with("payload {\n  \"a\": 1\n} 5"), "{line}");
}

/// Verifies an error argument renders its message and stack in the line.
#[test]
fn error_arguments_render_message_and_stack() {
    configure(&LogOptions::default());

    let mut sink = MemorySink::new();
    get_logger("svc").log_to(
        &mut sink,
        Severity::Error,
        "request failed: %?",
        &values![ErrorTrace::new("Error", "boom")],
    );

    let line = sink.drain().remove(0).1;
    assert!(line.contains("request failed: Error: boom"), "{line}");
    assert!(line.contains(".rs:"), "{line}");
}

/// Verifies a token with no argument survives dispatch untouched.
#[test]
fn missing_argument_token_passes_through_dispatch() {
    configure(&LogOptions::default());

    let mut sink = MemorySink::new();
    get_logger("svc").log_to(&mut sink, Severity::Info, "%s %s", &values!["only"]);

    let line = sink.drain().remove(0).1;
    assert!(line.ends_with("only %s"), "{line}");
}
