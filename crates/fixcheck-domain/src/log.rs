//! The severity-logger seam.

/// An external severity-aware logger.
///
/// Implementations own their recording threshold; the engine hands every
/// flagged diagnostic over at its own severity, one call per escalation,
/// and lets the logger decide whether it is kept.
pub trait SeverityLog {
    fn log(&self, severity: u32, message: &str);
}
