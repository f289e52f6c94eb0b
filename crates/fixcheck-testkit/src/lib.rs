//! Shared test utilities for the fixcheck workspace.
//!
//! This crate provides:
//! - **arb**: Proptest strategies for generating valid test inputs
//! - **fixtures**: A sample field-map candidate plus ready-made checks
//! - **log**: A recording severity logger with a settable minimum severity

pub mod arb;
pub mod fixtures;
pub mod log;

pub use arb::{arb_diagnostic, arb_error_kind, arb_policy, arb_severity_level};
pub use fixtures::{
    error_missing, field_equals, require_field, sample_header, warn_missing, FieldMap,
};
pub use log::RecordingLog;
