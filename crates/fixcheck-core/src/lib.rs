//! Core engine: orchestrates check execution + escalation + reporting.

mod audit;
mod config;
mod escalate;
mod render;

pub use audit::{run_audit, AuditPlan, AuditRun};
pub use config::load_audit_config;
pub use escalate::{escalate_to_log, escalate_to_sink, EscalateError, TracingLog};
pub use fixcheck_domain::SeverityLog;
pub use render::render_markdown_for_receipt;
