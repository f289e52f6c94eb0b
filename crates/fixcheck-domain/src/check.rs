//! The check capability contract.

use fixcheck_types::Diagnostic;

/// One independent unit of validation/repair logic, opaque to the engine.
///
/// Contract:
/// - No problem: return the candidate unchanged and a diagnostic with
///   severity 0.
/// - Problem, `repair == false`: return the candidate unchanged; the
///   diagnostic carries a positive severity, a non-empty problem text, an
///   empty repair text, and the relevant error kind. Calls with
///   `repair == false` must be free of side effects.
/// - Problem, `repair == true`: the check may transform the candidate to
///   resolve the problem; if it does, the diagnostic must carry a non-empty
///   repair text, otherwise the repair text stays empty.
/// - A check never panics and never returns an error; every outcome is
///   communicated through the returned diagnostic.
///
/// The candidate is owned-and-passed: the check receives it by value and
/// returns it, repaired or not.
pub trait Check<T> {
    fn apply(&self, candidate: T, repair: bool) -> (T, Diagnostic);
}

impl<T, F> Check<T> for F
where
    F: Fn(T, bool) -> (T, Diagnostic),
{
    fn apply(&self, candidate: T, repair: bool) -> (T, Diagnostic) {
        self(candidate, repair)
    }
}

/// A check as stored by a [`Runner`](crate::Runner).
pub type BoxedCheck<T> = Box<dyn Check<T> + Send + Sync>;

pub fn boxed<T, C>(check: C) -> BoxedCheck<T>
where
    C: Check<T> + Send + Sync + 'static,
{
    Box::new(check)
}
