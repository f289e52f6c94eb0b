//! Batch audit: run a check sequence and report per policy.

use std::io::{self, Write};
use std::time::Instant;

use chrono::Utc;

use fixcheck_domain::{EscalationPolicy, Runner};
use fixcheck_types::{
    AuditMode, AuditReceipt, AuditStatus, DiagnosticCounts, PolicyDefaults, RunMeta, ToolMeta,
    Verdict, AUDIT_SCHEMA_V1,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditPlan {
    pub mode: AuditMode,
    pub policy: EscalationPolicy,
}

impl Default for AuditPlan {
    fn default() -> Self {
        Self {
            mode: AuditMode::Inspect,
            policy: EscalationPolicy::default(),
        }
    }
}

impl AuditPlan {
    /// Resolve a plan from configured defaults.
    pub fn from_defaults(defaults: &PolicyDefaults) -> Self {
        Self {
            mode: defaults.mode.unwrap_or(AuditMode::Inspect),
            policy: EscalationPolicy::from_defaults(defaults),
        }
    }
}

/// The outcome of [`run_audit`].
#[derive(Debug)]
pub struct AuditRun<T> {
    /// The candidate after the run: repaired in repair mode, the caller's
    /// object unchanged otherwise.
    pub candidate: T,
    pub receipt: AuditReceipt,
}

/// Run the runner in the plan's mode, write every loggable diagnostic to
/// `sink` in check order, and return the candidate plus a receipt.
///
/// This entry point never raises: the receipt's verdict records whether any
/// diagnostic crossed the raise threshold (`Fail`), and converting a
/// diagnostic into an error stays an explicit
/// [`escalate_to_sink`](crate::escalate_to_sink) /
/// [`escalate_to_log`](crate::escalate_to_log) call, so callers can inspect
/// a whole batch before deciding.
pub fn run_audit<T, W>(
    runner: &Runner<T>,
    candidate: T,
    plan: &AuditPlan,
    sink: &mut W,
) -> Result<AuditRun<T>, io::Error>
where
    T: Clone,
    W: Write,
{
    let started_at = Utc::now();
    let clock = Instant::now();

    let (candidate, diagnostics) = match plan.mode {
        AuditMode::Inspect => {
            let diagnostics = runner.inspect(&candidate);
            (candidate, diagnostics)
        }
        AuditMode::Repair => runner.repair(candidate),
    };

    let mut counts = DiagnosticCounts::default();
    let mut any_raiseworthy = false;
    let mut any_logged = false;
    for diagnostic in &diagnostics {
        counts.bump(diagnostic.severity);
        if plan.policy.should_log(diagnostic) {
            writeln!(sink, "{diagnostic}")?;
            any_logged = true;
        }
        any_raiseworthy |= plan.policy.should_raise(diagnostic);
    }

    let status = if any_raiseworthy {
        AuditStatus::Fail
    } else if any_logged {
        AuditStatus::Warn
    } else {
        AuditStatus::Pass
    };

    let receipt = AuditReceipt {
        schema: AUDIT_SCHEMA_V1.to_string(),
        tool: ToolMeta {
            name: "fixcheck".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        mode: plan.mode,
        run: RunMeta {
            started_at: started_at.to_rfc3339(),
            ended_at: Utc::now().to_rfc3339(),
            duration_ms: clock.elapsed().as_millis() as u64,
        },
        diagnostics,
        verdict: Verdict { status, counts },
    };

    Ok(AuditRun { candidate, receipt })
}
