//! Logger escalation behavior, plus sink escalation as a property.

use fixcheck_core::{escalate_to_log, escalate_to_sink, EscalateError};
use fixcheck_testkit::{arb_diagnostic, arb_policy, RecordingLog};
use fixcheck_types::{level, Diagnostic, ErrorKind};
use proptest::prelude::*;

fn fixable() -> Diagnostic {
    Diagnostic::flagged(ErrorKind::InvalidValue, 20, "msg").with_repair("fix")
}

#[test]
fn logger_threshold_decides_recording() {
    let log = RecordingLog::with_min_severity(level::ATTENTION);

    // Below the logger's threshold: handed over, not kept.
    escalate_to_log(&fixable(), &log, level::ATTENTION).expect("no raise at default threshold");
    assert!(log.is_empty());

    // At the threshold: recorded, unprefixed.
    let mut diagnostic = fixable();
    diagnostic.severity = 30;
    escalate_to_log(&diagnostic, &log, 40).expect("below raise threshold");
    assert_eq!(log.lines(), vec!["msg; fix".to_string()]);
}

#[test]
fn raising_ignores_the_logger_threshold() {
    // The logger keeps nothing at severity 20, but the raise still fires.
    let log = RecordingLog::with_min_severity(level::ATTENTION);
    let err = escalate_to_log(&fixable(), &log, 20).unwrap_err();
    assert!(log.is_empty());
    assert_eq!(err.kind, ErrorKind::InvalidValue);
    assert_eq!(err.to_string(), "Level 20: msg; fix");
}

#[test]
fn clean_diagnostics_are_never_handed_to_the_logger() {
    let log = RecordingLog::with_min_severity(0);
    escalate_to_log(&Diagnostic::clean(), &log, 0).expect("clean never raises");
    assert!(log.is_empty());
}

#[test]
fn absent_kind_never_raises_through_the_logger_path() {
    let log = RecordingLog::with_min_severity(0);
    let mut diagnostic = fixable();
    diagnostic.error_kind = None;
    escalate_to_log(&diagnostic, &log, 10).expect("no kind, no raise");
    assert_eq!(log.lines(), vec!["msg; fix".to_string()]);
}

proptest! {
    #[test]
    fn sink_output_follows_the_log_threshold_exactly(
        diagnostic in arb_diagnostic(),
        policy in arb_policy(),
    ) {
        let mut sink = Vec::new();
        let result = escalate_to_sink(&diagnostic, &mut sink, &policy);

        let expected = if policy.should_log(&diagnostic) {
            format!("Level {}: {}\n", diagnostic.severity, diagnostic.summary())
        } else {
            String::new()
        };
        prop_assert_eq!(String::from_utf8(sink).expect("utf8 sink"), expected);

        match result {
            Ok(()) => prop_assert!(!policy.should_raise(&diagnostic)),
            Err(EscalateError::Raised(raised)) => {
                prop_assert!(policy.should_raise(&diagnostic));
                prop_assert_eq!(raised.to_string(), diagnostic.to_string());
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn logger_escalation_is_one_call_with_the_summary(
        diagnostic in arb_diagnostic(),
        min_severity in 0u32..=60,
    ) {
        let log = RecordingLog::with_min_severity(min_severity);
        // Raise threshold above every generated level: recording only.
        let _ = escalate_to_log(&diagnostic, &log, u32::MAX);

        let expected: Vec<String> =
            if diagnostic.severity > 0 && diagnostic.severity >= min_severity {
                vec![diagnostic.summary()]
            } else {
                vec![]
            };
        prop_assert_eq!(log.lines(), expected);
    }
}
