//! Report generation modules for different output formats
//!
//! This module contains report generators for the `edges` and `layout`
//! commands:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::error::GraphWeightsError;
use crate::graph::WeightedGraph;
use crate::layout::Layout;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Describe the deduplicated edge list with weights
    fn generate_edge_report(&self, graph: &WeightedGraph) -> Result<String, GraphWeightsError>;

    /// Describe the computed node positions
    fn generate_layout_report(
        &self,
        graph: &WeightedGraph,
        layout: &Layout,
    ) -> Result<String, GraphWeightsError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
