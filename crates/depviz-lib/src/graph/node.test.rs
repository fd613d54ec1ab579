use super::*;

#[test]
fn test_canonical_form_without_version() {
    let node = NodeId::unversioned("Newtonsoft.Json");
    assert_eq!(node.canonical(), "Newtonsoft.Json");
    assert_eq!(node.version(), "");
}

#[test]
fn test_canonical_form_with_version() {
    let node = NodeId::new("Serilog", "3.1.1");
    assert_eq!(node.to_string(), "Serilog 3.1.1");
    assert_eq!(node.name(), "Serilog");
    assert_eq!(node.version(), "3.1.1");
}

#[test]
fn test_empty_version_differs_from_concrete_version() {
    assert_ne!(NodeId::unversioned("A"), NodeId::new("A", "1.0"));
    assert_eq!(NodeId::new("A", "1.0"), NodeId::new("A", "1.0"));
    assert_ne!(NodeId::new("A", "1.0"), NodeId::new("a", "1.0"));
}

#[test]
fn test_ordering_follows_canonical_text() {
    let mut nodes = vec![
        NodeId::new("b", "2.0"),
        NodeId::unversioned("a"),
        NodeId::new("a", "1.0"),
        NodeId::unversioned("B"),
    ];
    nodes.sort();

    let canonical: Vec<String> = nodes.iter().map(NodeId::canonical).collect();
    assert_eq!(canonical, vec!["B", "a", "a 1.0", "b 2.0"]);
}

#[test]
fn test_name_matching_ignores_case_and_version() {
    let node = NodeId::new("xunit.TestFramework", "2.4.0-test");
    assert!(node.name_matches("test"));
    assert!(node.name_matches("xunit"));
    assert!(!node.name_matches(""));

    let versioned_only = NodeId::new("Serilog", "1.0.0-test");
    assert!(!versioned_only.name_matches("test"));
}
