//! Package identity used as the graph vertex key

use std::cmp::Ordering;
use std::fmt;

/// A package name optionally paired with a version string
///
/// Two nodes are equal only when both name and version match exactly; an
/// empty version never equals a concrete one. The canonical text form is
/// `"<name>"` for unversioned nodes and `"<name> <version>"` otherwise, and
/// ordering follows that text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId {
    name: String,
    version: String,
}

impl NodeId {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Node without a version ("latest" when looked up)
    pub fn unversioned(name: impl Into<String>) -> Self {
        Self::new(name, String::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Canonical text form
    pub fn canonical(&self) -> String {
        self.to_string()
    }

    /// Case-insensitive substring match on the name only
    ///
    /// `needle` must already be lowercased; an empty needle never matches.
    pub(crate) fn name_matches(&self, needle: &str) -> bool {
        !needle.is_empty() && self.name.to_lowercase().contains(needle)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.version.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", self.name, self.version)
        }
    }
}

impl Ord for NodeId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical()
            .cmp(&other.canonical())
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for NodeId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    include!("node.test.rs");
}
