//! Escalation entry points: sink writing and logger emission.
//!
//! Writing and raising are orthogonal decisions. The sink path decides both
//! from an [`EscalationPolicy`]; the logger path delegates the recording
//! decision to the logger itself and decides raising from a bare threshold.

use std::io::{self, Write};

use fixcheck_domain::{raise_if_due, EscalatedError, EscalationPolicy, SeverityLog};
use fixcheck_types::{level, Diagnostic, SeverityBand};

#[derive(Debug, thiserror::Error)]
pub enum EscalateError {
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The diagnostic crossed the raise threshold. `Display` is exactly
    /// the formatted diagnostic line.
    #[error(transparent)]
    Raised(#[from] EscalatedError),
}

/// Write-then-raise against an output sink.
///
/// When the diagnostic sits at or above the policy's log threshold, writes
/// `"Level {severity}: {problem}[; {repair}]\n"` to `sink`, byte-for-byte.
/// Independently, when it sits at or above the raise threshold and carries
/// an error kind, returns the escalated error. A write that qualifies
/// happens even when a raise follows. A clean diagnostic does neither.
pub fn escalate_to_sink<W: Write>(
    diagnostic: &Diagnostic,
    sink: &mut W,
    policy: &EscalationPolicy,
) -> Result<(), EscalateError> {
    if policy.should_log(diagnostic) {
        writeln!(sink, "{diagnostic}")?;
    }
    policy.raise(diagnostic)?;
    Ok(())
}

/// Emit-then-raise against a severity logger.
///
/// Emits the unprefixed `"{problem}[; {repair}]"` message through `log` at
/// the diagnostic's own severity (one call per escalation). Raising is
/// decided on `raise_threshold` alone, independent of whatever threshold
/// the logger applies. A clean diagnostic does neither.
pub fn escalate_to_log<L>(
    diagnostic: &Diagnostic,
    log: &L,
    raise_threshold: u32,
) -> Result<(), EscalatedError>
where
    L: SeverityLog + ?Sized,
{
    if diagnostic.severity > level::CLEAN {
        log.log(diagnostic.severity, &diagnostic.summary());
    }
    raise_if_due(diagnostic, raise_threshold)
}

/// [`SeverityLog`] adapter onto the `tracing` macros, mapped by band.
/// The subscriber's filtering plays the role of the recording threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl SeverityLog for TracingLog {
    fn log(&self, severity: u32, message: &str) {
        match SeverityBand::of(severity) {
            SeverityBand::Clean => {}
            SeverityBand::Info => tracing::debug!(severity, "{message}"),
            SeverityBand::Fixable => tracing::info!(severity, "{message}"),
            SeverityBand::Warning => tracing::warn!(severity, "{message}"),
            SeverityBand::Error => tracing::error!(severity, "{message}"),
        }
    }
}
