//! Building runners from configured check names.

use std::collections::BTreeMap;
use std::fmt;

use fixcheck_types::AuditConfig;

use crate::check::BoxedCheck;
use crate::runner::Runner;

type CheckFactory<T> = Box<dyn Fn() -> BoxedCheck<T> + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The configuration omitted its check list entirely. An explicit empty
    /// list is legal and builds an empty runner.
    #[error("configuration has no check list")]
    MissingChecks,

    #[error("unknown check '{name}'")]
    UnknownCheck { name: String },
}

/// Name → factory table from which configuration builds a runner.
///
/// Collaborators register their checks under stable names; a config's
/// `checks` list then selects and orders them. The list order is the
/// execution order, duplicates preserved as supplied.
pub struct CheckRegistry<T> {
    factories: BTreeMap<String, CheckFactory<T>>,
}

impl<T> Default for CheckRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CheckRegistry<T> {
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Register a check factory under `name`. Re-registering a name
    /// replaces the previous factory.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> BoxedCheck<T> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
        self
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Build a runner from the config's check list.
    pub fn build(&self, config: &AuditConfig) -> Result<Runner<T>, BuildError> {
        let names = config.checks.as_ref().ok_or(BuildError::MissingChecks)?;
        let mut checks = Vec::with_capacity(names.len());
        for name in names {
            let factory = self
                .factories
                .get(name)
                .ok_or_else(|| BuildError::UnknownCheck { name: name.clone() })?;
            checks.push(factory());
        }
        Ok(Runner::new(checks))
    }
}

impl<T> fmt::Debug for CheckRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckRegistry")
            .field("names", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
