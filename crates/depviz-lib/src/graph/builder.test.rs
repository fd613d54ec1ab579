// Tests for depth-first graph construction

use super::*;
use crate::testing::StaticSource;

fn node(name: &str) -> NodeId {
    NodeId::unversioned(name)
}

fn children_of(graph: &DependencyGraph, name: &str) -> Vec<String> {
    graph
        .children(&node(name))
        .unwrap_or_else(|| panic!("{} should be a key", name))
        .into_iter()
        .map(NodeId::canonical)
        .collect()
}

/// Every listed child must itself be a key
fn assert_edge_targets_are_keys(graph: &DependencyGraph) {
    for parent in graph.nodes() {
        for child in graph.children(parent).unwrap() {
            assert!(
                graph.contains(child),
                "{} -> {} points at a non-key",
                parent,
                child
            );
        }
    }
}

// ============================================================================
// Basic shapes
// ============================================================================

#[test]
fn test_package_without_dependencies() {
    let source = StaticSource::new().with_package("solo", &[]);

    let graph = GraphBuilder::new("solo", "").build(&source).unwrap();

    assert_eq!(graph.node_count(), 1);
    assert!(children_of(&graph, "solo").is_empty());
}

#[test]
fn test_linear_chain() {
    let source = StaticSource::new()
        .with_package("A", &["B"])
        .with_package("B", &["C"])
        .with_package("C", &[]);

    let graph = GraphBuilder::new("A", "").build(&source).unwrap();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(children_of(&graph, "A"), vec!["B"]);
    assert_eq!(children_of(&graph, "B"), vec!["C"]);
    assert!(children_of(&graph, "C").is_empty());
    assert_edge_targets_are_keys(&graph);
}

#[test]
fn test_diamond_expands_shared_dependency_once() {
    // A → B → D, A → C → D
    let source = StaticSource::new()
        .with_package("A", &["B", "C"])
        .with_package("B", &["D"])
        .with_package("C", &["D"])
        .with_package("D", &[]);

    let graph = GraphBuilder::new("A", "").build(&source).unwrap();

    assert_eq!(graph.node_count(), 4);
    assert_eq!(children_of(&graph, "B"), vec!["D"]);
    assert_eq!(children_of(&graph, "C"), vec!["D"]);
    assert_eq!(source.lookup_count("D"), 1);
}

#[test]
fn test_unknown_dependency_becomes_leaf() {
    let source = StaticSource::new().with_package("A", &["ghost"]);

    let graph = GraphBuilder::new("A", "").build(&source).unwrap();

    assert_eq!(children_of(&graph, "A"), vec!["ghost"]);
    assert!(children_of(&graph, "ghost").is_empty());
}

#[test]
fn test_versioned_nodes_use_canonical_identity() {
    let source = StaticSource::new()
        .with_versioned_package("App", "1.0.0", &[("Lib", "2.1.0"), ("Other", "")])
        .with_versioned_package("Lib", "2.1.0", &[])
        .with_package("Other", &[]);

    let graph = GraphBuilder::new("App", "1.0.0").build(&source).unwrap();

    let app = NodeId::new("App", "1.0.0");
    let children: Vec<String> = graph
        .children(&app)
        .unwrap()
        .into_iter()
        .map(NodeId::canonical)
        .collect();
    assert_eq!(children, vec!["Lib 2.1.0", "Other"]);
    assert!(graph.contains(&NodeId::new("Lib", "2.1.0")));
    assert!(!graph.contains(&node("Lib")));
}

// ============================================================================
// Cycles
// ============================================================================

#[test]
fn test_two_node_cycle_is_truncated() {
    let source = StaticSource::new()
        .with_package("A", &["B"])
        .with_package("B", &["A"]);

    let graph = GraphBuilder::new("A", "").build(&source).unwrap();

    assert_eq!(graph.node_count(), 2);
    assert_eq!(children_of(&graph, "A"), vec!["B"]);
    assert!(children_of(&graph, "B").is_empty());
    assert!(!graph.has_cycles());
    assert_eq!(source.lookup_count("A"), 1);
    assert_eq!(source.lookup_count("B"), 1);
}

#[test]
fn test_self_dependency_terminates() {
    let source = StaticSource::new().with_package("A", &["A"]);

    let graph = GraphBuilder::new("A", "").build(&source).unwrap();

    assert_eq!(graph.node_count(), 1);
    assert!(children_of(&graph, "A").is_empty());
}

#[test]
fn test_longer_cycle_visits_each_node_once() {
    // A → B → C → D → B
    let source = StaticSource::new()
        .with_package("A", &["B"])
        .with_package("B", &["C"])
        .with_package("C", &["D"])
        .with_package("D", &["B"]);

    let graph = GraphBuilder::new("A", "").build(&source).unwrap();

    assert_eq!(graph.node_count(), 4);
    for name in ["A", "B", "C", "D"] {
        assert_eq!(source.lookup_count(name), 1, "{} looked up once", name);
    }
    assert!(children_of(&graph, "D").is_empty());
    assert_edge_targets_are_keys(&graph);
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn test_filter_excludes_matching_names_case_insensitively() {
    let source = StaticSource::new()
        .with_package("App", &["Core", "App.Tests", "xunit.TestKit"])
        .with_package("Core", &["Core.TEST.Helpers"])
        .with_package("App.Tests", &["Hidden"])
        .with_package("Hidden", &[]);

    let graph = GraphBuilder::new("App", "")
        .with_filter("test")
        .build(&source)
        .unwrap();

    assert_eq!(graph.node_count(), 2);
    assert_eq!(children_of(&graph, "App"), vec!["Core"]);
    assert!(children_of(&graph, "Core").is_empty());
    for parent in graph.nodes() {
        assert!(!parent.name().to_lowercase().contains("test"));
    }

    // Filtered packages are never queried, nor is anything behind them
    assert_eq!(source.lookup_count("App.Tests"), 0);
    assert_eq!(source.lookup_count("Hidden"), 0);
    assert_edge_targets_are_keys(&graph);
}

#[test]
fn test_filter_never_excludes_the_root() {
    let source = StaticSource::new()
        .with_package("TestRunner", &["Engine"])
        .with_package("Engine", &[]);

    let graph = GraphBuilder::new("TestRunner", "")
        .with_filter("test")
        .build(&source)
        .unwrap();

    assert_eq!(graph.node_count(), 2);
    assert_eq!(children_of(&graph, "TestRunner"), vec!["Engine"]);
}

#[test]
fn test_filter_ignores_versions() {
    let source = StaticSource::new()
        .with_versioned_package("App", "", &[("Lib", "1.0.0-test")])
        .with_versioned_package("Lib", "1.0.0-test", &[]);

    let graph = GraphBuilder::new("App", "")
        .with_filter("test")
        .build(&source)
        .unwrap();

    assert!(graph.contains(&NodeId::new("Lib", "1.0.0-test")));
}

#[test]
fn test_empty_filter_disables_filtering() {
    let source = StaticSource::new()
        .with_package("A", &["B"])
        .with_package("B", &[]);

    let graph = GraphBuilder::new("A", "")
        .with_filter("")
        .build(&source)
        .unwrap();

    assert_eq!(graph.node_count(), 2);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_lookup_failure_aborts_with_node_context() {
    let source = StaticSource::new()
        .with_package("A", &["B"])
        .with_failure("B");

    let err = GraphBuilder::new("A", "").build(&source).unwrap_err();

    match &err {
        BuildError::Lookup { node, .. } => assert_eq!(node.name(), "B"),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().starts_with("Failed to get dependencies for B:"));
}

#[test]
fn test_missing_root_is_reported_before_traversal() {
    let source = StaticSource::new().with_package("A", &[]);

    let err = GraphBuilder::new("Missing", "").build(&source).unwrap_err();

    assert!(matches!(err, BuildError::RootNotFound { ref name } if name == "Missing"));
    assert!(source.lookups().is_empty());
}

#[test]
fn test_empty_root_is_rejected() {
    let source = StaticSource::new();
    let err = GraphBuilder::new("  ", "").build(&source).unwrap_err();
    assert!(matches!(err, BuildError::EmptyRoot));
}

#[test]
fn test_root_version_is_passed_to_lookup() {
    let source = StaticSource::new().with_versioned_package("A", "3.0.0", &[]);

    GraphBuilder::new("A", "3.0.0").build(&source).unwrap();

    assert_eq!(
        source.lookups(),
        vec![("A".to_string(), "3.0.0".to_string())]
    );
}
