//! Test doubles and fixtures for depviz
//!
//! - [`StaticSource`]: in-memory [`DependencySource`] with per-package
//!   failures and lookup counting
//! - [`TempDirFixture`]: temporary directory for registry and config files

pub mod filesystem;

pub use filesystem::TempDirFixture;

use crate::registry::{DependencyMap, DependencySource, SourceError};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// In-memory dependency source keyed by `(name, version)`
///
/// Packages registered without a version answer lookups for any version.
/// Unknown packages have no dependencies.
#[derive(Debug, Default)]
pub struct StaticSource {
    packages: HashMap<(String, String), DependencyMap>,
    failures: HashSet<String>,
    lookups: RefCell<Vec<(String, String)>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a package whose dependencies are all unversioned
    pub fn with_package(self, name: &str, deps: &[&str]) -> Self {
        let deps: Vec<(&str, &str)> = deps.iter().map(|dep| (*dep, "")).collect();
        self.with_versioned_package(name, "", &deps)
    }

    /// Register `name` at `version` with `(dependency, version)` pairs
    pub fn with_versioned_package(mut self, name: &str, version: &str, deps: &[(&str, &str)]) -> Self {
        let map = deps
            .iter()
            .map(|(dep, ver)| (dep.to_string(), ver.to_string()))
            .collect();
        self.packages
            .insert((name.to_string(), version.to_string()), map);
        self
    }

    /// Make every lookup of `name` fail
    pub fn with_failure(mut self, name: &str) -> Self {
        self.failures.insert(name.to_string());
        self
    }

    /// Every `(name, version)` passed to `dependencies`, in call order
    pub fn lookups(&self) -> Vec<(String, String)> {
        self.lookups.borrow().clone()
    }

    /// Number of lookups made for `name`
    pub fn lookup_count(&self, name: &str) -> usize {
        self.lookups
            .borrow()
            .iter()
            .filter(|(looked_up, _)| looked_up == name)
            .count()
    }

    fn knows(&self, name: &str) -> bool {
        self.packages.keys().any(|(known, _)| known == name) || self.failures.contains(name)
    }
}

impl DependencySource for StaticSource {
    fn dependencies(&self, name: &str, version: &str) -> Result<DependencyMap, SourceError> {
        self.lookups
            .borrow_mut()
            .push((name.to_string(), version.to_string()));

        if self.failures.contains(name) {
            return Err(SourceError::Other {
                message: format!("lookup of {} refused", name),
            });
        }

        let exact = self.packages.get(&(name.to_string(), version.to_string()));
        let any_version = self.packages.get(&(name.to_string(), String::new()));

        Ok(exact.or(any_version).cloned().unwrap_or_default())
    }

    fn contains(&self, name: &str) -> Result<bool, SourceError> {
        Ok(self.knows(name))
    }
}
