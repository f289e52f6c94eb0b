//! Audit configuration loading.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use fixcheck_types::AuditConfig;

/// Load an audit configuration from a TOML file.
///
/// Parsing is strict about types but lenient about omissions: every
/// threshold falls back to its default downstream, and a missing `checks`
/// key stays `None` so runner construction can distinguish it from an
/// explicit empty list.
pub fn load_audit_config(path: &Path) -> Result<AuditConfig> {
    debug!("Loading audit config from '{}'", path.display());

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;

    let config: AuditConfig =
        toml::from_str(&text).with_context(|| format!("parse config '{}'", path.display()))?;

    Ok(config)
}
