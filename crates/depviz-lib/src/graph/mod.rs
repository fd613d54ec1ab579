//! # Graph Module
//!
//! Dependency graph construction and serialization.
//!
//! ## Components
//!
//! - [`GraphBuilder`]: depth-first traversal of a
//!   [`DependencySource`](crate::registry::DependencySource) with filtering and
//!   cycle truncation
//! - [`DependencyGraph`]: adjacency structure keyed by [`NodeId`]
//! - [`load_order`]: dependency-first linearization
//! - [`PlantUmlRenderer`]: deterministic diagram text, saved by [`write_diagram`]
//!
//! ## Example
//!
//! ```
//! use depviz_lib::graph::{GraphBuilder, NodeId, PlantUmlRenderer, load_order};
//! use depviz_lib::registry::OfflineRegistry;
//!
//! let registry = OfflineRegistry::parse("A: B\nB: C\nC:\n");
//! let graph = GraphBuilder::new("A", "").build(&registry).unwrap();
//!
//! let order = load_order(&graph, &NodeId::unversioned("A"));
//! let names: Vec<&str> = order.iter().map(NodeId::name).collect();
//! assert_eq!(names, ["C", "B", "A"]);
//!
//! let diagram = PlantUmlRenderer::new().render(&graph, "A");
//! assert!(diagram.contains("Node_A --> Node_B"));
//! ```

mod builder;
mod dependency_graph;
mod export;
mod listing;
mod load_order;
mod node;
mod plantuml;

pub use builder::{BuildError, GraphBuilder};
pub use dependency_graph::DependencyGraph;
pub use export::{ExportError, write_diagram};
pub use listing::render_listing;
pub use load_order::{LoadOrderSummary, load_order};
pub use node::NodeId;
pub use plantuml::{DIAGRAM_FILE_SUFFIX, PlantUmlRenderer, diagram_file_name, node_token};
