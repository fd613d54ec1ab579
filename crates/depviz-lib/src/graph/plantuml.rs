//! PlantUML rendering of a dependency graph
//!
//! Output is deterministic: components are declared in ascending canonical
//! order and each package's links are emitted in ascending order of the
//! child's canonical text, so the same graph always renders to the same
//! bytes regardless of how it was built.

use super::dependency_graph::DependencyGraph;
use super::node::NodeId;
use std::collections::{HashMap, HashSet};

/// Prefix of every generated component identifier
pub const NODE_ID_PREFIX: &str = "Node_";

/// Suffix of the diagram file written next to the working directory
pub const DIAGRAM_FILE_SUFFIX: &str = "_diagram.puml";

/// Diagram file name for a root package
pub fn diagram_file_name(root_name: &str) -> String {
    format!("{}{}", root_name, DIAGRAM_FILE_SUFFIX)
}

/// Renders [`DependencyGraph`]s as PlantUML component diagrams
#[derive(Debug, Clone)]
pub struct PlantUmlRenderer {
    title_prefix: String,
    skinparams: Vec<(String, String)>,
}

impl Default for PlantUmlRenderer {
    fn default() -> Self {
        Self {
            title_prefix: "Dependency graph: ".to_string(),
            skinparams: vec![
                ("componentStyle".to_string(), "rectangle".to_string()),
                ("nodesep".to_string(), "20".to_string()),
                ("ranksep".to_string(), "30".to_string()),
            ],
        }
    }
}

impl PlantUmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `graph` with `title` in the title line
    pub fn render(&self, graph: &DependencyGraph, title: &str) -> String {
        let nodes = graph.sorted_nodes();
        let ids = assign_ids(&nodes);
        let mut out = String::new();

        out.push_str("@startuml\n");
        out.push_str(&format!("title {}{}\n", self.title_prefix, title));
        for (key, value) in &self.skinparams {
            out.push_str(&format!("skinparam {} {}\n", key, value));
        }
        out.push('\n');

        for node in &nodes {
            out.push_str(&format!("component \"{}\" as {}\n", label(node), ids[*node]));
        }
        out.push('\n');

        for node in &nodes {
            let mut children = graph.children(node).unwrap_or_default();
            children.sort();

            for child in children {
                // Pruned targets never get a component declaration
                let Some(child_id) = ids.get(child) else {
                    continue;
                };
                out.push_str(&format!("{} --> {}\n", ids[*node], child_id));
            }
        }

        out.push_str("@enduml");
        out
    }
}

/// Component label: canonical text with spaces shown as PlantUML line breaks
fn label(node: &NodeId) -> String {
    node.canonical().replace(' ', "\\n")
}

/// Diagram-safe token for a node
///
/// Spaces, periods, hyphens and `@` become underscores, as does any other
/// character PlantUML does not accept in an identifier.
pub fn node_token(node: &NodeId) -> String {
    let body: String = node
        .canonical()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}{}", NODE_ID_PREFIX, body)
}

/// Assign unique identifiers in ascending node order
///
/// The first node to produce a token keeps it; later collisions get `_2`,
/// `_3`, and so on.
fn assign_ids<'g>(sorted: &[&'g NodeId]) -> HashMap<&'g NodeId, String> {
    let mut taken = HashSet::new();
    let mut ids = HashMap::with_capacity(sorted.len());

    for node in sorted {
        let base = node_token(node);
        let mut candidate = base.clone();
        let mut suffix = 2;
        while !taken.insert(candidate.clone()) {
            candidate = format!("{}_{}", base, suffix);
            suffix += 1;
        }
        ids.insert(*node, candidate);
    }

    ids
}

#[cfg(test)]
mod tests {
    include!("plantuml.test.rs");
}
