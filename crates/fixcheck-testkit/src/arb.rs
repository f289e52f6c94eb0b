//! Proptest strategies for generating valid test inputs.
//!
//! Strategies are constructive: they build values from known-valid parts
//! rather than filtering random ones.
//!
//! # Bounds
//!
//! - Severity levels range over `0..=60`, past the error band boundary
//! - Problem/repair text is printable ASCII, at most 60 chars

use fixcheck_domain::EscalationPolicy;
use fixcheck_types::{Diagnostic, ErrorKind};
use proptest::prelude::*;

/// Highest severity level generated; comfortably above the error band.
pub const MAX_LEVEL: u32 = 60;

/// Strategy for severity levels, including `0`.
pub fn arb_severity_level() -> impl Strategy<Value = u32> {
    0u32..=MAX_LEVEL
}

/// Strategy for every error kind.
pub fn arb_error_kind() -> impl Strategy<Value = ErrorKind> {
    prop_oneof![
        Just(ErrorKind::Generic),
        Just(ErrorKind::MissingField),
        Just(ErrorKind::InvalidValue),
        Just(ErrorKind::Inconsistent),
    ]
}

fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.,'-]{1,60}".prop_map(|s| s)
}

/// Strategy for contract-shaped diagnostics: severity `0` comes with empty
/// text, a positive severity with a non-empty problem.
pub fn arb_diagnostic() -> impl Strategy<Value = Diagnostic> {
    prop_oneof![
        Just(Diagnostic::clean()),
        (
            1u32..=MAX_LEVEL,
            arb_text(),
            prop::option::of(arb_text()),
            prop::option::of(arb_error_kind()),
        )
            .prop_map(|(severity, problem, repair, error_kind)| {
                Diagnostic {
                    severity,
                    problem,
                    repair: repair.unwrap_or_default(),
                    error_kind,
                }
            }),
    ]
}

/// Strategy for threshold pairs, each varying independently.
pub fn arb_policy() -> impl Strategy<Value = EscalationPolicy> {
    (0u32..=MAX_LEVEL, 0u32..=MAX_LEVEL).prop_map(|(raise_threshold, log_threshold)| {
        EscalationPolicy {
            raise_threshold,
            log_threshold,
        }
    })
}
