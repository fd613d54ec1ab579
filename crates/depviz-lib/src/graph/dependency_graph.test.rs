// Tests for the dependency graph adjacency structure

use super::*;

fn node(name: &str) -> NodeId {
    NodeId::unversioned(name)
}

// ============================================================================
// Basic Graph Operations
// ============================================================================

#[test]
fn test_new_graph_is_empty() {
    let graph = DependencyGraph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_add_duplicate_node_is_idempotent() {
    let mut graph = DependencyGraph::new();

    let idx1 = graph.add_node(node("A"));
    let idx2 = graph.add_node(node("A"));

    assert_eq!(idx1, idx2);
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_children_keep_insertion_order() {
    let graph = DependencyGraph::from_adjacency(vec![
        (node("root"), vec![node("zeta"), node("alpha"), node("mid")]),
        (node("zeta"), vec![]),
        (node("alpha"), vec![]),
        (node("mid"), vec![]),
    ]);

    let children: Vec<&str> = graph
        .children(&node("root"))
        .unwrap()
        .into_iter()
        .map(NodeId::name)
        .collect();
    assert_eq!(children, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_non_key_children_stay_in_child_list() {
    let graph = DependencyGraph::from_adjacency(vec![
        (node("A"), vec![node("B"), node("pruned")]),
        (node("B"), vec![]),
    ]);

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert!(!graph.contains(&node("pruned")));
    assert!(graph.children(&node("pruned")).is_none());
    assert_eq!(
        graph.children(&node("A")).unwrap(),
        vec![&node("B"), &node("pruned")]
    );
    assert_eq!(graph.sorted_nodes(), vec![&node("A"), &node("B")]);
}

#[test]
fn test_child_recorded_before_it_becomes_a_key() {
    let mut graph = DependencyGraph::new();
    let parent = graph.add_node(node("A"));
    graph.link_children(parent, vec![node("B")]);
    assert!(!graph.contains(&node("B")));

    graph.add_node(node("B"));
    assert!(graph.contains(&node("B")));
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_from_adjacency_ignores_duplicate_children() {
    let graph = DependencyGraph::from_adjacency(vec![
        (node("A"), vec![node("B"), node("B")]),
        (node("B"), vec![]),
    ]);

    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_children_of_unknown_node_is_none() {
    let graph = DependencyGraph::from_adjacency(vec![(node("A"), Vec::new())]);
    assert!(graph.children(&node("missing")).is_none());
    assert_eq!(graph.children(&node("A")).unwrap(), Vec::<&NodeId>::new());
}

#[test]
fn test_sorted_nodes_use_canonical_order() {
    let graph = DependencyGraph::from_adjacency(vec![
        (NodeId::new("b", "1.0"), Vec::new()),
        (node("a"), Vec::new()),
        (NodeId::new("a", "2.0"), Vec::new()),
    ]);

    let sorted: Vec<String> = graph
        .sorted_nodes()
        .into_iter()
        .map(NodeId::canonical)
        .collect();
    assert_eq!(sorted, vec!["a", "a 2.0", "b 1.0"]);
}

#[test]
fn test_cycle_detection() {
    let acyclic = DependencyGraph::from_adjacency(vec![
        (node("A"), vec![node("B")]),
        (node("B"), vec![]),
    ]);
    assert!(!acyclic.has_cycles());

    let cyclic = DependencyGraph::from_adjacency(vec![
        (node("A"), vec![node("B")]),
        (node("B"), vec![node("A")]),
    ]);
    assert!(cyclic.has_cycles());
}
