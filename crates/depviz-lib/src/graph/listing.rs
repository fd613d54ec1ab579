//! Plain adjacency listing for terminal output

use super::dependency_graph::DependencyGraph;
use super::node::NodeId;

/// One line per key in ascending order: `A -> B, C` or `A -> (no dependencies)`
///
/// Children that are not keys are left out.
pub fn render_listing(graph: &DependencyGraph) -> Vec<String> {
    graph
        .sorted_nodes()
        .into_iter()
        .map(|node| {
            let mut children: Vec<&NodeId> = graph
                .children(node)
                .unwrap_or_default()
                .into_iter()
                .filter(|child| graph.contains(child))
                .collect();
            if children.is_empty() {
                return format!("{} -> (no dependencies)", node);
            }
            children.sort();
            let children: Vec<String> = children.into_iter().map(NodeId::canonical).collect();
            format!("{} -> {}", node, children.join(", "))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_is_sorted() {
        let graph = DependencyGraph::from_adjacency(vec![
            (NodeId::unversioned("b"), vec![]),
            (
                NodeId::new("a", "1.0"),
                vec![NodeId::unversioned("c"), NodeId::unversioned("b")],
            ),
            (NodeId::unversioned("c"), vec![]),
        ]);

        assert_eq!(
            render_listing(&graph),
            vec![
                "a 1.0 -> b, c".to_string(),
                "b -> (no dependencies)".to_string(),
                "c -> (no dependencies)".to_string(),
            ]
        );
    }

    #[test]
    fn test_listing_skips_non_key_children() {
        let graph = DependencyGraph::from_adjacency(vec![(
            NodeId::unversioned("a"),
            vec![NodeId::unversioned("pruned")],
        )]);

        assert_eq!(render_listing(&graph), vec!["a -> (no dependencies)".to_string()]);
    }
}
