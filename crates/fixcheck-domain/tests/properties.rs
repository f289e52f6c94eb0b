//! Property-based tests for the runner and the escalation policy.

use fixcheck_domain::{boxed, BoxedCheck, EscalationPolicy, Runner};
use fixcheck_types::{Diagnostic, ErrorKind};
use proptest::prelude::*;

/// A check that records its position in the candidate trace when repairing
/// and reports a diagnostic labeled with that position.
fn traced_check(position: usize, severity: u32) -> BoxedCheck<Vec<usize>> {
    boxed(move |mut trace: Vec<usize>, repair: bool| {
        if severity == 0 {
            return (trace, Diagnostic::clean());
        }
        let mut diagnostic =
            Diagnostic::flagged(ErrorKind::Generic, severity, format!("check {position}"));
        if repair {
            trace.push(position);
            diagnostic = diagnostic.with_repair(format!("recorded {position}"));
        }
        (trace, diagnostic)
    })
}

fn runner_from(severities: &[u32]) -> Runner<Vec<usize>> {
    Runner::new(
        severities
            .iter()
            .enumerate()
            .map(|(position, &severity)| traced_check(position, severity)),
    )
}

proptest! {
    #[test]
    fn one_diagnostic_per_check_in_supplied_order(severities in prop::collection::vec(1u32..100, 0..20)) {
        let runner = runner_from(&severities);
        prop_assert_eq!(runner.len(), severities.len());

        let diagnostics = runner.inspect(&Vec::new());
        prop_assert_eq!(diagnostics.len(), severities.len());
        for (position, diagnostic) in diagnostics.iter().enumerate() {
            prop_assert_eq!(diagnostic.problem.clone(), format!("check {position}"));
            prop_assert_eq!(diagnostic.severity, severities[position]);
        }
    }

    #[test]
    fn inspect_never_mutates_the_candidate(severities in prop::collection::vec(0u32..100, 0..20)) {
        let runner = runner_from(&severities);
        let candidate = vec![usize::MAX];
        let _ = runner.inspect(&candidate);
        prop_assert_eq!(candidate, vec![usize::MAX]);
    }

    #[test]
    fn repair_applies_checks_cumulatively_in_order(severities in prop::collection::vec(1u32..100, 0..20)) {
        let runner = runner_from(&severities);
        let (trace, diagnostics) = runner.repair(Vec::new());

        // Every flagged check repaired, in sequence order.
        let expected: Vec<usize> = (0..severities.len()).collect();
        prop_assert_eq!(trace, expected);
        prop_assert!(diagnostics.iter().all(|d| !d.repair.is_empty()));
    }

    #[test]
    fn log_and_raise_are_decided_on_their_own_thresholds(
        severity in 0u32..100,
        raise_threshold in 0u32..100,
        log_threshold in 0u32..100,
        has_kind in any::<bool>(),
    ) {
        let diagnostic = Diagnostic {
            severity,
            problem: "p".to_string(),
            repair: String::new(),
            error_kind: has_kind.then_some(ErrorKind::Generic),
        };
        let policy = EscalationPolicy {
            raise_threshold,
            log_threshold,
        };

        prop_assert_eq!(
            policy.should_log(&diagnostic),
            severity > 0 && severity >= log_threshold
        );
        prop_assert_eq!(
            policy.should_raise(&diagnostic),
            severity > 0 && has_kind && severity >= raise_threshold
        );
    }
}
