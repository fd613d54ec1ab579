use super::*;

fn node(name: &str) -> NodeId {
    NodeId::unversioned(name)
}

fn names(order: &[NodeId]) -> Vec<String> {
    order.iter().map(NodeId::canonical).collect()
}

#[test]
fn test_linear_chain_loads_dependencies_first() {
    let graph = DependencyGraph::from_adjacency(vec![
        (node("A"), vec![node("B")]),
        (node("B"), vec![node("C")]),
        (node("C"), vec![]),
    ]);

    assert_eq!(names(&load_order(&graph, &node("A"))), vec!["C", "B", "A"]);
}

#[test]
fn test_single_package() {
    let graph = DependencyGraph::from_adjacency(vec![(node("root"), Vec::new())]);
    assert_eq!(names(&load_order(&graph, &node("root"))), vec!["root"]);
}

#[test]
fn test_diamond_emits_shared_dependency_once() {
    let graph = DependencyGraph::from_adjacency(vec![
        (node("A"), vec![node("B"), node("C")]),
        (node("B"), vec![node("D")]),
        (node("C"), vec![node("D")]),
        (node("D"), vec![]),
    ]);

    assert_eq!(
        names(&load_order(&graph, &node("A"))),
        vec!["D", "B", "C", "A"]
    );
}

#[test]
fn test_every_edge_is_respected() {
    let graph = DependencyGraph::from_adjacency(vec![
        (node("app"), vec![node("web"), node("db"), node("log")]),
        (node("web"), vec![node("http"), node("log")]),
        (node("db"), vec![node("log"), node("pool")]),
        (node("http"), vec![node("log")]),
        (node("pool"), vec![]),
        (node("log"), vec![]),
    ]);

    let order = load_order(&graph, &node("app"));
    let position = |n: &NodeId| order.iter().position(|o| o == n).unwrap();

    assert_eq!(order.len(), graph.node_count());
    for parent in graph.nodes() {
        for child in graph.children(parent).unwrap() {
            assert!(position(child) < position(parent), "{} before {}", child, parent);
        }
    }
    assert_eq!(order.last(), Some(&node("app")));
}

#[test]
fn test_unreachable_nodes_are_excluded() {
    let graph = DependencyGraph::from_adjacency(vec![
        (node("A"), vec![node("B")]),
        (node("B"), vec![]),
        (node("island"), vec![node("B")]),
    ]);

    assert_eq!(names(&load_order(&graph, &node("A"))), vec!["B", "A"]);
}

#[test]
fn test_root_missing_from_graph_is_a_leaf() {
    let graph = DependencyGraph::new();
    assert_eq!(names(&load_order(&graph, &node("ghost"))), vec!["ghost"]);
}

#[test]
fn test_child_missing_as_key_loads_as_leaf() {
    let graph = DependencyGraph::from_adjacency(vec![
        (node("A"), vec![node("B"), node("C")]),
        (node("C"), vec![node("B")]),
    ]);

    assert_eq!(names(&load_order(&graph, &node("A"))), vec!["B", "C", "A"]);
}

#[test]
fn test_cyclic_graph_still_terminates() {
    let graph = DependencyGraph::from_adjacency(vec![
        (node("A"), vec![node("B")]),
        (node("B"), vec![node("A")]),
    ]);

    assert_eq!(names(&load_order(&graph, &node("A"))), vec!["B", "A"]);
}

#[test]
fn test_summary_reports_root_last() {
    let order = vec![node("C"), node("B"), node("A")];

    let summary = LoadOrderSummary::analyze(&order, &node("A"));
    assert_eq!(summary.total, 3);
    assert!(summary.root_last);
    assert_eq!(summary.last, Some(node("A")));

    let summary = LoadOrderSummary::analyze(&order, &node("B"));
    assert!(!summary.root_last);
}

#[test]
fn test_summary_of_empty_order() {
    let summary = LoadOrderSummary::analyze(&[], &node("A"));
    assert_eq!(summary.total, 0);
    assert!(!summary.root_last);
    assert_eq!(summary.last, None);
}
