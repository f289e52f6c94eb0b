//! A sample candidate object and ready-made checks over it.
//!
//! The candidate is a flat field map, the shape of a freshly parsed file
//! header. The checks cover the interesting contract corners: a repair
//! that inserts a default, a value check whose diagnostic changes once the
//! field exists, and inspect-only checks at the warning and error levels.

use std::collections::BTreeMap;

use fixcheck_domain::{boxed, BoxedCheck};
use fixcheck_types::{level, Diagnostic, ErrorKind};

pub type FieldMap = BTreeMap<String, i64>;

/// A header-like candidate with the fields the fixture checks expect.
pub fn sample_header() -> FieldMap {
    FieldMap::from([
        ("magic".to_string(), 0),
        ("version".to_string(), 2),
        ("datatype".to_string(), 4),
    ])
}

/// Flags a missing field at the fixable level; repairs by inserting
/// `value`.
pub fn require_field(name: &'static str, value: i64) -> BoxedCheck<FieldMap> {
    boxed(move |mut fields: FieldMap, repair: bool| {
        if fields.contains_key(name) {
            return (fields, Diagnostic::clean());
        }
        let mut diagnostic =
            Diagnostic::flagged(ErrorKind::MissingField, level::FIXABLE, format!("no '{name}'"));
        if repair {
            fields.insert(name.to_string(), value);
            diagnostic = diagnostic.with_repair(format!("added '{name}'"));
        }
        (fields, diagnostic)
    })
}

/// Two failure modes: a missing field is fixable, a present-but-wrong
/// value is a milder, differently-kinded problem. Repair resolves either.
pub fn field_equals(name: &'static str, expected: i64) -> BoxedCheck<FieldMap> {
    boxed(move |mut fields: FieldMap, repair: bool| {
        let Some(&value) = fields.get(name) else {
            let mut diagnostic = Diagnostic::flagged(
                ErrorKind::MissingField,
                level::FIXABLE,
                format!("no '{name}'"),
            );
            if repair {
                fields.insert(name.to_string(), expected);
                diagnostic = diagnostic.with_repair(format!("added '{name}'"));
            }
            return (fields, diagnostic);
        };
        if value == expected {
            return (fields, Diagnostic::clean());
        }
        let mut diagnostic = Diagnostic::flagged(
            ErrorKind::InvalidValue,
            level::INFO,
            format!("'{name}' != {expected}"),
        );
        if repair {
            fields.insert(name.to_string(), expected);
            diagnostic = diagnostic.with_repair(format!("set '{name}' to {expected}"));
        }
        (fields, diagnostic)
    })
}

/// Inspect-only: flags a missing field at the warning level, offers no
/// repair.
pub fn warn_missing(name: &'static str) -> BoxedCheck<FieldMap> {
    flag_missing(name, level::WARNING)
}

/// Inspect-only: flags a missing field at the error level, offers no
/// repair.
pub fn error_missing(name: &'static str) -> BoxedCheck<FieldMap> {
    flag_missing(name, level::ERROR)
}

fn flag_missing(name: &'static str, severity: u32) -> BoxedCheck<FieldMap> {
    boxed(move |fields: FieldMap, _repair: bool| {
        if fields.contains_key(name) {
            return (fields, Diagnostic::clean());
        }
        let diagnostic =
            Diagnostic::flagged(ErrorKind::MissingField, severity, format!("no '{name}'"));
        (fields, diagnostic)
    })
}
