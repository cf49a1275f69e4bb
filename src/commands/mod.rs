//! Command implementations for graph-weights CLI
//!
//! This module contains the implementations for each CLI command:
//! - plot: Render the weighted graph as a figure
//! - layout: Print the spring layout positions
//! - edges: Print the deduplicated weighted edge list

pub mod edges;
pub mod layout;
pub mod plot;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Plot { .. } => plot::execute_plot_command(command),
        Commands::Layout { .. } => layout::execute_layout_command(command),
        Commands::Edges { .. } => edges::execute_edges_command(command),
    }
}
