//! Depth-first dependency graph construction
//!
//! Walks a [`DependencySource`] from a root package, expanding every package
//! at most once. Packages whose name matches the filter are skipped, and
//! back-edges to packages still being expanded are logged and truncated, so
//! the walk terminates on any finite input.

use super::dependency_graph::DependencyGraph;
use super::node::NodeId;
use crate::registry::{DependencySource, SourceError};
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, info, trace, warn};

/// Errors that abort a graph build
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Root package name must not be empty")]
    EmptyRoot,

    #[error("Package '{name}' not found in the dependency source")]
    RootNotFound { name: String },

    #[error("Failed to get dependencies for {node}: {source}")]
    Lookup {
        node: NodeId,
        #[source]
        source: SourceError,
    },
}

/// Builds a [`DependencyGraph`] rooted at one package
///
/// # Examples
///
/// ```
/// use depviz_lib::graph::{GraphBuilder, NodeId};
/// use depviz_lib::registry::OfflineRegistry;
///
/// let registry = OfflineRegistry::parse("app: core\ncore:\n");
/// let graph = GraphBuilder::new("app", "").build(&registry).unwrap();
///
/// assert_eq!(graph.node_count(), 2);
/// assert!(graph.contains(&NodeId::unversioned("core")));
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    root: NodeId,
    filter: String,
}

impl GraphBuilder {
    /// Create a builder for `name` at `version` (empty = latest)
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            root: NodeId::new(name, version),
            filter: String::new(),
        }
    }

    /// Skip packages whose name contains `filter` (case-insensitive)
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn root(&self) -> &NodeId {
        &self.root
    }

    /// Run the traversal against `source`
    pub fn build<S>(&self, source: &S) -> Result<DependencyGraph, BuildError>
    where
        S: DependencySource + ?Sized,
    {
        if self.root.name().trim().is_empty() {
            return Err(BuildError::EmptyRoot);
        }

        let exists = source
            .contains(self.root.name())
            .map_err(|source| BuildError::Lookup {
                node: self.root.clone(),
                source,
            })?;
        if !exists {
            return Err(BuildError::RootNotFound {
                name: self.root.name().to_string(),
            });
        }

        debug!(
            root = %self.root,
            filter = %self.filter,
            "Building dependency graph"
        );

        let mut traversal = Traversal::new(source, self.root.name(), &self.filter);
        traversal.visit(self.root.clone())?;

        debug!(
            nodes = traversal.graph.node_count(),
            edges = traversal.graph.edge_count(),
            skipped = traversal.skipped,
            "Dependency graph complete"
        );

        Ok(traversal.graph)
    }
}

/// Per-build traversal state, threaded through the recursion
struct Traversal<'a, S: ?Sized> {
    source: &'a S,
    root_name: &'a str,
    /// Original filter text, for log messages
    filter: &'a str,
    /// Lowercased filter; empty disables filtering
    needle: String,
    visited: HashSet<NodeId>,
    in_progress: HashSet<NodeId>,
    graph: DependencyGraph,
    skipped: usize,
}

impl<'a, S> Traversal<'a, S>
where
    S: DependencySource + ?Sized,
{
    fn new(source: &'a S, root_name: &'a str, filter: &'a str) -> Self {
        Self {
            source,
            root_name,
            filter,
            needle: filter.to_lowercase(),
            visited: HashSet::new(),
            in_progress: HashSet::new(),
            graph: DependencyGraph::new(),
            skipped: 0,
        }
    }

    fn visit(&mut self, node: NodeId) -> Result<(), BuildError> {
        if self.in_progress.contains(&node) {
            warn!(node = %node, "Dependency cycle detected, truncating back-edge");
            return Ok(());
        }

        if node.name() != self.root_name && node.name_matches(&self.needle) {
            info!(filter = %self.filter, "Skipping package {}", node);
            self.skipped += 1;
            self.visited.insert(node);
            return Ok(());
        }

        if self.visited.contains(&node) {
            return Ok(());
        }

        self.visited.insert(node.clone());
        self.in_progress.insert(node.clone());

        trace!("Looking up dependencies of {}", node);
        let deps = self
            .source
            .dependencies(node.name(), node.version())
            .map_err(|source| BuildError::Lookup {
                node: node.clone(),
                source,
            })?;

        let mut children = Vec::with_capacity(deps.len());
        for (dep_name, dep_version) in deps {
            let child = NodeId::new(dep_name, dep_version);

            if child.name_matches(&self.needle) {
                info!(filter = %self.filter, "Skipping package {}", child);
                self.skipped += 1;
                continue;
            }

            self.visit(child.clone())?;

            if self.graph.contains(&child) {
                children.push(child);
            }
        }

        self.in_progress.remove(&node);
        let idx = self.graph.add_node(node);
        self.graph.link_children(idx, children);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    include!("builder.test.rs");
}
