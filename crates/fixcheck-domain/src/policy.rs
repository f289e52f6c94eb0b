//! Threshold decisions: when a diagnostic is written, when it raises.

use fixcheck_types::{level, Diagnostic, ErrorKind, PolicyDefaults};

/// Two independent thresholds governing what happens to a diagnostic.
///
/// Both default to [`level::ATTENTION`], but neither is ever derived from
/// the other: a caller can lower `log_threshold` to surface quiet repairs
/// without turning them into errors, or lower `raise_threshold` to fail
/// hard on problems it does not want reported to the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscalationPolicy {
    /// A diagnostic at or above this level raises, if it carries an error
    /// kind.
    pub raise_threshold: u32,
    /// A diagnostic at or above this level is written to the sink.
    pub log_threshold: u32,
}

impl Default for EscalationPolicy {
    fn default() -> Self {
        Self {
            raise_threshold: level::ATTENTION,
            log_threshold: level::ATTENTION,
        }
    }
}

impl EscalationPolicy {
    /// Resolve configured thresholds, falling back to the shared default
    /// for each one that is unset.
    pub fn from_defaults(defaults: &PolicyDefaults) -> Self {
        Self {
            raise_threshold: defaults.raise_threshold.unwrap_or(level::ATTENTION),
            log_threshold: defaults.log_threshold.unwrap_or(level::ATTENTION),
        }
    }

    /// Whether the diagnostic is written to the sink. Decided on
    /// `log_threshold` alone; a clean diagnostic is never written.
    pub fn should_log(&self, diagnostic: &Diagnostic) -> bool {
        diagnostic.severity > level::CLEAN && diagnostic.severity >= self.log_threshold
    }

    /// Whether the diagnostic raises. Decided on `raise_threshold` alone;
    /// a diagnostic without an error kind never raises, whatever its
    /// severity.
    pub fn should_raise(&self, diagnostic: &Diagnostic) -> bool {
        raise_if_due(diagnostic, self.raise_threshold).is_err()
    }

    /// The raise half of escalation: `Err` carrying the diagnostic's kind
    /// and formatted message when it crosses `raise_threshold`.
    pub fn raise(&self, diagnostic: &Diagnostic) -> Result<(), EscalatedError> {
        raise_if_due(diagnostic, self.raise_threshold)
    }
}

/// A diagnostic converted into an error by escalation.
///
/// `Display` is exactly the formatted diagnostic line (no trailing
/// newline), so heterogeneous checks surface uniformly worded failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EscalatedError {
    pub kind: ErrorKind,
    pub message: String,
}

/// Raise `diagnostic` if it sits at or above `raise_threshold` and carries
/// an error kind. A clean diagnostic never raises.
pub fn raise_if_due(diagnostic: &Diagnostic, raise_threshold: u32) -> Result<(), EscalatedError> {
    if diagnostic.severity == level::CLEAN || diagnostic.severity < raise_threshold {
        return Ok(());
    }
    match diagnostic.error_kind {
        Some(kind) => Err(EscalatedError {
            kind,
            message: diagnostic.to_string(),
        }),
        None => Ok(()),
    }
}
