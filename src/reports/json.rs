//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::error::GraphWeightsError;
use crate::graph::{WeightedGraph, edge_labels};
use crate::layout::Layout;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_edge_report(&self, graph: &WeightedGraph) -> Result<String, GraphWeightsError> {
        let mut nodes: Vec<_> = graph.node_weights().map(|node| node.id()).collect();
        nodes.sort_unstable();

        // BTreeMap iteration keeps edges ordered by (low, high)
        let edges: Vec<_> = edge_labels(graph)
            .into_iter()
            .map(|(key, weight)| {
                json!({
                    "source": key.low,
                    "target": key.high,
                    "weight": weight,
                })
            })
            .collect();

        let report = json!({
            "node_count": nodes.len(),
            "edge_count": edges.len(),
            "nodes": nodes,
            "edges": edges,
        });

        serde_json::to_string_pretty(&report).map_err(GraphWeightsError::Json)
    }

    fn generate_layout_report(
        &self,
        graph: &WeightedGraph,
        layout: &Layout,
    ) -> Result<String, GraphWeightsError> {
        let positions: Vec<_> = layout
            .iter()
            .map(|(id, point)| {
                json!({
                    "node": id,
                    "x": point.x,
                    "y": point.y,
                })
            })
            .collect();

        let report = json!({
            "node_count": graph.node_count(),
            "iterations": layout.iterations(),
            "converged": layout.converged(),
            "positions": positions,
        });

        serde_json::to_string_pretty(&report).map_err(GraphWeightsError::Json)
    }
}
