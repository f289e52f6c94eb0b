//! Data types (diagnostics + config + receipts) for fixcheck.
//!
//! This crate is intentionally "dumb": pure DTOs with serde + schemars.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ── Schema Identifiers ─────────────────────────────────────────
pub const AUDIT_SCHEMA_V1: &str = "fixcheck.audit.v1";

// ── Severity Levels ────────────────────────────────────────────
// Numeric severity vocabulary. `0` always means "no problem found";
// higher values are worse. Thresholds compare against these with `>=`.
pub mod level {
    /// No problem found.
    pub const CLEAN: u32 = 0;
    /// Informational; usually below any reporting threshold.
    pub const INFO: u32 = 10;
    /// A problem a check knows how to repair.
    pub const FIXABLE: u32 = 20;
    /// Attention-worthy; the default threshold for both logging and raising.
    pub const WARNING: u32 = 30;
    /// Serious enough that escalation is expected.
    pub const ERROR: u32 = 40;

    /// The canonical attention-worthy level shared by both default thresholds.
    pub const ATTENTION: u32 = WARNING;
}

/// Category of error a diagnostic escalates into when raised.
///
/// A closed vocabulary: escalation never matches on specific variants, it
/// only needs "present" vs "absent" plus a name to report. "Absent" is
/// expressed as `Option::None` on [`Diagnostic::error_kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Generic,
    MissingField,
    InvalidValue,
    Inconsistent,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Generic => "generic",
            ErrorKind::MissingField => "missing_field",
            ErrorKind::InvalidValue => "invalid_value",
            ErrorKind::Inconsistent => "inconsistent",
        }
    }
}

/// Coarse classification of a numeric severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SeverityBand {
    Clean,
    Info,
    Fixable,
    Warning,
    Error,
}

impl SeverityBand {
    /// Classify a numeric level. `0` is always `Clean`.
    pub fn of(severity: u32) -> Self {
        if severity == level::CLEAN {
            SeverityBand::Clean
        } else if severity < level::FIXABLE {
            SeverityBand::Info
        } else if severity < level::WARNING {
            SeverityBand::Fixable
        } else if severity < level::ERROR {
            SeverityBand::Warning
        } else {
            SeverityBand::Error
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeverityBand::Clean => "clean",
            SeverityBand::Info => "info",
            SeverityBand::Fixable => "fixable",
            SeverityBand::Warning => "warning",
            SeverityBand::Error => "error",
        }
    }
}

/// The outcome of one check: severity, problem text, repair text, and the
/// error category used if the diagnostic is escalated.
///
/// Immutable by convention once a check returns it. Equality is structural
/// over all four fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Diagnostic {
    /// `0` means no problem; higher is worse. See [`level`].
    pub severity: u32,

    /// Human-readable problem description. Empty iff `severity == 0`.
    pub problem: String,

    /// Human-readable repair description. Empty iff no repair was made.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub repair: String,

    /// `None` means "never raise regardless of severity".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

impl Default for Diagnostic {
    fn default() -> Self {
        Self {
            severity: level::CLEAN,
            problem: String::new(),
            repair: String::new(),
            error_kind: Some(ErrorKind::Generic),
        }
    }
}

impl Diagnostic {
    /// A "no problem found" diagnostic.
    pub fn clean() -> Self {
        Self::default()
    }

    /// A diagnostic flagging a problem, with no repair recorded yet.
    pub fn flagged(kind: ErrorKind, severity: u32, problem: impl Into<String>) -> Self {
        Self {
            severity,
            problem: problem.into(),
            repair: String::new(),
            error_kind: Some(kind),
        }
    }

    /// Record the repair a check performed.
    pub fn with_repair(mut self, repair: impl Into<String>) -> Self {
        self.repair = repair.into();
        self
    }

    /// The unprefixed message: `"{problem}"`, plus `"; {repair}"` when a
    /// repair was recorded. This is the form handed to severity loggers.
    pub fn summary(&self) -> String {
        if self.repair.is_empty() {
            self.problem.clone()
        } else {
            format!("{}; {}", self.problem, self.repair)
        }
    }

    pub fn band(&self) -> SeverityBand {
        SeverityBand::of(self.severity)
    }
}

/// The sink line, sans trailing newline.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {}: {}", self.severity, self.summary())
    }
}

/// Execution mode of an audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuditMode {
    /// Run checks without letting them mutate the candidate.
    Inspect,
    /// Let checks repair the candidate; repairs accumulate across checks.
    Repair,
}

impl AuditMode {
    pub fn as_str(self) -> &'static str {
        match self {
            AuditMode::Inspect => "inspect",
            AuditMode::Repair => "repair",
        }
    }
}

/// Per-band diagnostic counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct DiagnosticCounts {
    pub info: u32,
    pub fixable: u32,
    pub warning: u32,
    pub error: u32,
}

impl DiagnosticCounts {
    /// Count one diagnostic at the given level. `Clean` is not counted.
    pub fn bump(&mut self, severity: u32) {
        match SeverityBand::of(severity) {
            SeverityBand::Clean => {}
            SeverityBand::Info => self.info = self.info.saturating_add(1),
            SeverityBand::Fixable => self.fixable = self.fixable.saturating_add(1),
            SeverityBand::Warning => self.warning = self.warning.saturating_add(1),
            SeverityBand::Error => self.error = self.error.saturating_add(1),
        }
    }

    pub fn flagged(&self) -> u32 {
        self.info
            .saturating_add(self.fixable)
            .saturating_add(self.warning)
            .saturating_add(self.error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    Pass,
    Warn,
    Fail,
}

impl AuditStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AuditStatus::Pass => "pass",
            AuditStatus::Warn => "warn",
            AuditStatus::Fail => "fail",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Verdict {
    pub status: AuditStatus,
    pub counts: DiagnosticCounts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Run timing for one audit invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RunMeta {
    /// RFC 3339 timestamp when the run started.
    pub started_at: String,
    /// RFC 3339 timestamp when the run ended.
    pub ended_at: String,
    pub duration_ms: u64,
}

/// The serializable record of one audit invocation: one diagnostic per
/// check, in check order, plus the policy-derived verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuditReceipt {
    pub schema: String,
    pub tool: ToolMeta,
    pub mode: AuditMode,
    pub run: RunMeta,
    pub diagnostics: Vec<Diagnostic>,
    pub verdict: Verdict,
}

// ============================================================================
// On-disk configuration
// ============================================================================

/// The on-disk audit configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct AuditConfig {
    #[serde(default)]
    pub defaults: PolicyDefaults,

    /// Names of registered checks, in execution order. Duplicates are run
    /// as many times as they appear. An *absent* key is a construction
    /// error when building a runner; an explicit empty list is legal and
    /// yields a runner with zero checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<String>>,
}

/// Threshold and mode defaults. The two thresholds share a default value
/// but are separate settings; neither is ever derived from the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raise_threshold: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_threshold: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<AuditMode>,
}

impl Default for PolicyDefaults {
    fn default() -> Self {
        Self {
            raise_threshold: Some(level::ATTENTION),
            log_threshold: Some(level::ATTENTION),
            mode: Some(AuditMode::Inspect),
        }
    }
}
