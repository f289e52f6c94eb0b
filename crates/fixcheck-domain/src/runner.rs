//! Ordered, sequential execution of a fixed check sequence.

use std::fmt;

use fixcheck_types::Diagnostic;

use crate::check::BoxedCheck;

/// Runs an ordered, immutable sequence of checks against a candidate
/// object. One invocation produces exactly one diagnostic per check, in
/// check order. The runner itself never fails; every outcome a check wants
/// to report travels as data in its diagnostic.
///
/// The sequence is fixed at construction. Supplied order is preserved,
/// duplicates included.
pub struct Runner<T> {
    checks: Vec<BoxedCheck<T>>,
}

impl<T> Runner<T> {
    pub fn new<I>(checks: I) -> Self
    where
        I: IntoIterator<Item = BoxedCheck<T>>,
    {
        Self {
            checks: checks.into_iter().collect(),
        }
    }

    /// Number of checks in the sequence.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every check in order with repair disabled.
    ///
    /// The caller's candidate is never touched: checks run against a
    /// scratch clone that is discarded afterwards, so inspect mode cannot
    /// observe or expose mutation.
    pub fn inspect(&self, candidate: &T) -> Vec<Diagnostic>
    where
        T: Clone,
    {
        let mut scratch = candidate.clone();
        let mut diagnostics = Vec::with_capacity(self.checks.len());
        for check in &self.checks {
            let (next, diagnostic) = check.apply(scratch, false);
            scratch = next;
            diagnostics.push(diagnostic);
        }
        diagnostics
    }

    /// Run every check in order with repair enabled, threading the
    /// candidate: check *i*'s returned object is check *i+1*'s input, so
    /// later checks observe earlier repairs and may report differently than
    /// they would against the original.
    pub fn repair(&self, mut candidate: T) -> (T, Vec<Diagnostic>) {
        let mut diagnostics = Vec::with_capacity(self.checks.len());
        for check in &self.checks {
            let (next, diagnostic) = check.apply(candidate, true);
            candidate = next;
            diagnostics.push(diagnostic);
        }
        (candidate, diagnostics)
    }
}

impl<T> fmt::Debug for Runner<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runner")
            .field("checks", &self.checks.len())
            .finish()
    }
}
