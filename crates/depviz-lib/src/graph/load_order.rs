//! Dependency-first load order
//!
//! Depth-first postorder from the root: a package is emitted only after all
//! of its dependencies, so for every edge `(parent, child)` the child comes
//! first.

use super::dependency_graph::DependencyGraph;
use super::node::NodeId;
use std::collections::HashSet;

/// Compute the load order of everything reachable from `root`
///
/// Children are followed in their recorded order and each package appears
/// once. Packages that are not keys of `graph` count as leaves; packages not
/// reachable from `root` are left out.
pub fn load_order(graph: &DependencyGraph, root: &NodeId) -> Vec<NodeId> {
    let mut visited = HashSet::new();
    let mut order = Vec::with_capacity(graph.node_count());
    postorder(graph, root, &mut visited, &mut order);
    order
}

fn postorder(
    graph: &DependencyGraph,
    node: &NodeId,
    visited: &mut HashSet<NodeId>,
    order: &mut Vec<NodeId>,
) {
    if !visited.insert(node.clone()) {
        return;
    }

    for child in graph.children(node).unwrap_or_default() {
        postorder(graph, child, visited, order);
    }

    order.push(node.clone());
}

/// Summary of a computed load order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOrderSummary {
    /// Number of packages to load
    pub total: usize,
    /// Package loaded last, if any
    pub last: Option<NodeId>,
    /// Whether the root package is loaded last
    pub root_last: bool,
}

impl LoadOrderSummary {
    pub fn analyze(order: &[NodeId], root: &NodeId) -> Self {
        let last = order.last().cloned();
        Self {
            total: order.len(),
            root_last: last.as_ref() == Some(root),
            last,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("load_order.test.rs");
}
