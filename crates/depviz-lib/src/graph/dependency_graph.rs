//! Adjacency structure produced by the graph builder
//!
//! Vertices are [`NodeId`]s, edges point from a package to one of its direct
//! dependencies. Keys are the packages that were expanded. A child list may
//! name a package that is not a key; it stays a vertex so traversals can
//! treat it as a leaf, while rendering skips it.

use super::node::NodeId;
use petgraph::Direction;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// Dependency graph keyed by package identity
///
/// Edge weights hold the child's position in its parent's dependency list so
/// that [`DependencyGraph::children`] returns children in insertion order.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    /// Directed graph: nodes = packages, edges = parent depends on child
    graph: DiGraph<NodeId, usize>,
    /// Map from node identity to node index for fast lookup
    node_map: HashMap<NodeId, NodeIndex>,
    /// Vertices that are keys of the adjacency mapping
    keys: HashSet<NodeIndex>,
}

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
            keys: HashSet::new(),
        }
    }

    /// Build a graph from `(node, children)` entries in any order
    ///
    /// Every entry becomes a key. Children that are not themselves keys are
    /// kept in the child list but never become keys.
    pub fn from_adjacency<I, C>(entries: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, C)>,
        C: IntoIterator<Item = NodeId>,
    {
        let mut graph = Self::new();
        let entries: Vec<(NodeIndex, Vec<NodeId>)> = entries
            .into_iter()
            .map(|(node, children)| (graph.add_node(node), children.into_iter().collect()))
            .collect();

        for (parent, children) in entries {
            graph.link_children(parent, children);
        }

        graph
    }

    /// Add a package as a key (idempotent)
    pub(crate) fn add_node(&mut self, node: NodeId) -> NodeIndex {
        let idx = self.vertex(node);
        if !self.keys.insert(idx) {
            trace!("Node already exists: {}", self.graph[idx]);
        }
        idx
    }

    /// Vertex for `node`, created without making it a key
    fn vertex(&mut self, node: NodeId) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(&node) {
            return idx;
        }

        let idx = self.graph.add_node(node.clone());
        self.node_map.insert(node, idx);
        idx
    }

    /// Append `children` to the parent's child list, skipping duplicates
    pub(crate) fn link_children(&mut self, parent: NodeIndex, children: Vec<NodeId>) {
        let mut ordinal = self.graph.edges_directed(parent, Direction::Outgoing).count();

        for child in children {
            let child_idx = self.vertex(child);

            if self.graph.find_edge(parent, child_idx).is_some() {
                continue;
            }

            self.graph.add_edge(parent, child_idx, ordinal);
            ordinal += 1;
        }
    }

    /// Check if a package is a key of the graph
    pub fn contains(&self, node: &NodeId) -> bool {
        self.key_index(node).is_some()
    }

    fn key_index(&self, node: &NodeId) -> Option<&NodeIndex> {
        self.node_map.get(node).filter(|idx| self.keys.contains(idx))
    }

    /// Direct children of a key, in the order they were recorded
    ///
    /// The list may name packages that are not keys.
    pub fn children(&self, node: &NodeId) -> Option<Vec<&NodeId>> {
        let idx = self.key_index(node)?;

        let mut edges: Vec<_> = self
            .graph
            .edges_directed(*idx, Direction::Outgoing)
            .map(|edge| (*edge.weight(), edge.target()))
            .collect();
        edges.sort_by_key(|(ordinal, _)| *ordinal);

        Some(
            edges
                .into_iter()
                .map(|(_, target)| &self.graph[target])
                .collect(),
        )
    }

    /// All keys, in the order their vertices were created
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.graph
            .node_indices()
            .filter(|idx| self.keys.contains(idx))
            .map(|idx| &self.graph[idx])
    }

    /// All keys in ascending canonical order
    pub fn sorted_nodes(&self) -> Vec<&NodeId> {
        let mut nodes: Vec<&NodeId> = self.nodes().collect();
        nodes.sort();
        nodes
    }

    /// Check if the graph contains cycles
    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Get the number of keys in the graph
    pub fn node_count(&self) -> usize {
        self.keys.len()
    }

    /// Get the number of edges between keys
    pub fn edge_count(&self) -> usize {
        self.graph
            .edge_references()
            .filter(|edge| self.keys.contains(&edge.target()))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    include!("dependency_graph.test.rs");
}
