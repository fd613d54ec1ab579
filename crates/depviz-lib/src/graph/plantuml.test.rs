use super::*;

fn node(name: &str) -> NodeId {
    NodeId::unversioned(name)
}

#[test]
fn test_render_full_document() {
    let graph = DependencyGraph::from_adjacency(vec![
        (NodeId::new("App", "1.0.0"), vec![node("Zlib"), node("Core")]),
        (node("Core"), vec![node("Zlib")]),
        (node("Zlib"), vec![]),
    ]);

    let expected = "\
@startuml
title Dependency graph: App
skinparam componentStyle rectangle
skinparam nodesep 20
skinparam ranksep 30

component \"App\\n1.0.0\" as Node_App_1_0_0
component \"Core\" as Node_Core
component \"Zlib\" as Node_Zlib

Node_App_1_0_0 --> Node_Core
Node_App_1_0_0 --> Node_Zlib
Node_Core --> Node_Zlib
@enduml";

    assert_eq!(PlantUmlRenderer::new().render(&graph, "App"), expected);
}

#[test]
fn test_render_is_independent_of_insertion_order() {
    let forward = DependencyGraph::from_adjacency(vec![
        (node("A"), vec![node("B"), node("C")]),
        (node("B"), vec![node("C")]),
        (node("C"), vec![]),
    ]);
    let backward = DependencyGraph::from_adjacency(vec![
        (node("C"), vec![]),
        (node("B"), vec![node("C")]),
        (node("A"), vec![node("C"), node("B")]),
    ]);

    let renderer = PlantUmlRenderer::new();
    assert_eq!(renderer.render(&forward, "A"), renderer.render(&backward, "A"));
    assert_eq!(renderer.render(&forward, "A"), renderer.render(&forward, "A"));
}

#[test]
fn test_render_empty_graph_keeps_envelope() {
    let rendered = PlantUmlRenderer::new().render(&DependencyGraph::new(), "nothing");

    assert!(rendered.starts_with("@startuml\ntitle Dependency graph: nothing\n"));
    assert!(rendered.ends_with("@enduml"));
    assert!(!rendered.contains("component"));
    assert!(!rendered.contains("-->"));
}

#[test]
fn test_single_node_without_links() {
    let graph = DependencyGraph::from_adjacency(vec![(node("solo"), Vec::new())]);
    let rendered = PlantUmlRenderer::new().render(&graph, "solo");

    assert!(rendered.contains("component \"solo\" as Node_solo\n"));
    assert!(!rendered.contains("-->"));
}

#[test]
fn test_node_token_replaces_punctuation() {
    assert_eq!(
        node_token(&NodeId::new("Microsoft.Extensions-Logging", "8.0.0")),
        "Node_Microsoft_Extensions_Logging_8_0_0"
    );
    assert_eq!(node_token(&node("@scope/pkg")), "Node__scope_pkg");
    assert_eq!(node_token(&NodeId::new("Lib", "[1.0, )")), "Node_Lib__1_0___");
}

#[test]
fn test_colliding_tokens_get_deterministic_suffixes() {
    // "a-b" and "a.b" both reduce to Node_a_b
    let graph = DependencyGraph::from_adjacency(vec![
        (node("root"), vec![node("a.b"), node("a-b")]),
        (node("a.b"), vec![]),
        (node("a-b"), vec![]),
    ]);

    let rendered = PlantUmlRenderer::new().render(&graph, "root");

    assert!(rendered.contains("component \"a-b\" as Node_a_b\n"));
    assert!(rendered.contains("component \"a.b\" as Node_a_b_2\n"));
    assert!(rendered.contains("Node_root --> Node_a_b\nNode_root --> Node_a_b_2\n"));
}

#[test]
fn test_diagram_file_name() {
    assert_eq!(diagram_file_name("Newtonsoft.Json"), "Newtonsoft.Json_diagram.puml");
}

#[test]
fn test_links_to_non_keys_are_omitted() {
    let graph = DependencyGraph::from_adjacency(vec![
        (node("root"), vec![node("kept"), node("pruned")]),
        (node("kept"), vec![]),
    ]);

    let rendered = PlantUmlRenderer::new().render(&graph, "root");

    assert!(rendered.contains("Node_root --> Node_kept\n"));
    assert!(!rendered.contains("pruned"));
}
