//! # Graph Weights - Plot a Weighted Undirected Graph
//!
//! Graph Weights builds a small weighted undirected graph from a hard-coded
//! edge list, places its nodes with a force-directed spring layout and
//! renders it with node labels and edge-weight labels.
//!
//! ## Main Components
//!
//! - **Graph**: Builds the undirected graph, collapsing repeated and reversed
//!   `(u, v, w)` triples into one edge whose weight is the last one seen
//! - **Layout**: Fruchterman-Reingold spring layout producing one 2D position
//!   per node
//! - **Viewer**: Native window showing the figure until it is closed
//! - **Renderer**: SVG figure plus DOT, Mermaid and ASCII renderings
//! - **Reports**: Human-readable and JSON listings of edges and positions
//!
//! ## Usage
//!
//! ### Example: Rendering the Sample Graph
//!
//! ```no_run
//! use graph_weights::graph::{GraphRenderer, sample_graph};
//! use graph_weights::layout::SpringLayout;
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! // Step 1: Build the graph from the hard-coded edge list
//! let graph = sample_graph();
//! println!(
//!     "{} nodes, {} edges",
//!     graph.node_count(),
//!     graph.edge_count()
//! );
//!
//! // Step 2: Place the nodes
//! let layout = SpringLayout::new().with_seed(Some(42)).compute(&graph, None)?;
//!
//! // Step 3: Draw the figure
//! let renderer = GraphRenderer::new(true);
//! let mut svg = Vec::new();
//! renderer.render_svg(&graph, &layout, &mut svg)?;
//!
//! std::fs::write("graph.svg", svg).into_diagnostic()?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Inspecting Edge Weights
//!
//! ```
//! use graph_weights::graph::{EdgeKey, SAMPLE_EDGES, WeightedGraphBuilder, edge_labels};
//!
//! let builder = WeightedGraphBuilder::from_triples(SAMPLE_EDGES);
//! assert_eq!(builder.weight(7, 1), Some(-10));
//!
//! let labels = edge_labels(builder.graph());
//! assert_eq!(labels.len(), 12);
//! assert_eq!(labels[&EdgeKey::new(6, 7)], 9);
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod executors;
pub mod graph;
pub mod layout;
pub mod reports;
pub mod viewer;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
