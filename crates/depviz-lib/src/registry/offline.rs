//! Offline mock registry
//!
//! Reads a flat text mapping, one package per line:
//!
//! ```text
//! # comment
//! A: B C
//! B: C
//! C:
//! ```
//!
//! Blank lines and `#` comments are ignored, lines without a `:` are skipped
//! and a later line for the same package replaces the earlier one. Every
//! dependency is unversioned.

use super::{DependencyMap, DependencySource, SourceError};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, trace};

/// Package name -> direct dependency names, loaded from a text file
#[derive(Debug, Clone, Default)]
pub struct OfflineRegistry {
    packages: HashMap<String, Vec<String>>,
}

impl OfflineRegistry {
    /// Load a registry file
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let content = std::fs::read_to_string(path).map_err(|source| SourceError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let registry = Self::parse(&content);
        debug!(
            path = %path.display(),
            packages = registry.len(),
            "Loaded offline registry"
        );
        Ok(registry)
    }

    /// Parse registry text
    pub fn parse(content: &str) -> Self {
        let mut packages = HashMap::new();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((name, deps)) = line.split_once(':') else {
                trace!(line = index + 1, "Skipping registry line without ':'");
                continue;
            };

            let deps = deps.split_whitespace().map(str::to_string).collect();
            packages.insert(name.trim().to_string(), deps);
        }

        Self { packages }
    }

    /// Known package names, sorted
    pub fn packages(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.packages.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl DependencySource for OfflineRegistry {
    fn dependencies(&self, name: &str, _version: &str) -> Result<DependencyMap, SourceError> {
        Ok(self
            .packages
            .get(name)
            .map(|deps| deps.iter().map(|dep| (dep.clone(), String::new())).collect())
            .unwrap_or_default())
    }

    fn contains(&self, name: &str) -> Result<bool, SourceError> {
        Ok(self.packages.contains_key(name))
    }
}

#[cfg(test)]
mod tests {
    include!("offline.test.rs");
}
