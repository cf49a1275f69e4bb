//! # Graph Construction and Rendering Module
//!
//! This module provides functionality for building and visualizing undirected
//! weighted graphs.
//!
//! ## Components
//!
//! ### Graph Building
//! - **WeightedGraphBuilder**: Constructs the graph from `(u, v, w)` triples,
//!   collapsing repeated and reversed pairs into one edge
//! - **GraphNode**: Represents a node in the graph
//! - **WeightedEdge**: Carries the weight of an undirected edge
//! - **SAMPLE_EDGES**: The hard-coded edge list plotted by the CLI
//!
//! ### Graph Rendering
//! - **GraphRenderer**: Renders graphs as SVG figures or as DOT, Mermaid and
//!   ASCII text, with edge-weight labels
//!
//! ## Example
//!
//! ```
//! use graph_weights::graph::{GraphRenderer, WeightedGraphBuilder};
//! use graph_weights::layout::SpringLayout;
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! let mut builder = WeightedGraphBuilder::new();
//! builder.add_edge(1, 2, 4).add_edge(2, 3, -1).add_edge(2, 1, 5);
//!
//! // (2, 1) overwrote (1, 2)
//! assert_eq!(builder.graph().edge_count(), 2);
//! assert_eq!(builder.weight(1, 2), Some(5));
//!
//! let graph = builder.into_graph();
//! let layout = SpringLayout::new().with_seed(Some(1)).compute(&graph, None)?;
//!
//! let renderer = GraphRenderer::new(true);
//! let mut output = Vec::new();
//! renderer.render_svg(&graph, &layout, &mut output)?;
//!
//! let svg = String::from_utf8(output).into_diagnostic()?;
//! assert!(svg.contains("Graph with Weights"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Output Formats
//!
//! - **SVG**: Standalone figure with title, nodes, labels and weights
//! - **DOT**: Graphviz format, positions pinned when a layout is given
//! - **Mermaid**: Markdown-compatible diagrams for documentation
//! - **ASCII**: Adjacency listing for the terminal

mod builder;
mod renderer;
mod sample;
mod types;

// Re-export main types and builders
pub use builder::{WeightedGraphBuilder, edge_labels};
pub use renderer::GraphRenderer;
pub use sample::{SAMPLE_EDGES, sample_graph};
pub use types::{EdgeKey, EdgeTriple, GraphNode, NodeId, Weight, WeightedEdge, WeightedGraph};
