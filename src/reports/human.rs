//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::error::GraphWeightsError;
use crate::graph::{WeightedGraph, edge_labels};
use crate::layout::Layout;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator;

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_edge_report(&self, graph: &WeightedGraph) -> Result<String, GraphWeightsError> {
        let mut output = String::new();
        let labels = edge_labels(graph);

        write!(
            output,
            "\n{} {} {} between {} {}:\n\n",
            style("🔗").cyan(),
            style(labels.len()).yellow().bold(),
            pluralize("edge", labels.len()),
            style(graph.node_count()).yellow().bold(),
            pluralize("node", graph.node_count())
        )?;

        for (key, weight) in &labels {
            let weight = if *weight < 0 {
                style(weight.to_string()).red()
            } else {
                style(weight.to_string()).green()
            };
            writeln!(
                output,
                "  {} {} ── {}  weight {}",
                style("•").dim(),
                style(key.low).bold(),
                style(key.high).bold(),
                weight
            )?;
        }

        Ok(output)
    }

    fn generate_layout_report(
        &self,
        graph: &WeightedGraph,
        layout: &Layout,
    ) -> Result<String, GraphWeightsError> {
        let mut output = String::new();

        write!(
            output,
            "\n{} Spring layout for {} {} ({} {}, {}):\n\n",
            style("📍").cyan(),
            style(graph.node_count()).yellow().bold(),
            pluralize("node", graph.node_count()),
            layout.iterations(),
            pluralize("iteration", layout.iterations()),
            if layout.converged() {
                style("settled").green()
            } else {
                style("budget reached").yellow()
            }
        )?;

        for (id, point) in layout.iter() {
            writeln!(
                output,
                "  {} {:>4}  x = {:>8.4}  y = {:>8.4}",
                style("•").dim(),
                style(id).bold(),
                point.x,
                point.y
            )?;
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::sample_graph;
    use crate::layout::SpringLayout;

    #[test]
    fn test_edge_report_lists_every_edge() {
        console::set_colors_enabled(false);
        let graph = sample_graph();

        let report = HumanReportGenerator::new()
            .generate_edge_report(&graph)
            .unwrap();

        assert!(report.contains("12 edges between 7 nodes"));
        assert!(report.contains("1 ── 7  weight -10"));
        assert!(report.contains("6 ── 7  weight 9"));
        assert_eq!(report.matches("weight ").count(), 12);
    }

    #[test]
    fn test_layout_report_lists_every_node() {
        console::set_colors_enabled(false);
        let graph = sample_graph();
        let layout = SpringLayout::new()
            .with_seed(Some(2))
            .compute(&graph, None)
            .unwrap();

        let report = HumanReportGenerator::new()
            .generate_layout_report(&graph, &layout)
            .unwrap();

        assert!(report.contains("Spring layout for 7 nodes"));
        assert_eq!(report.matches("x = ").count(), 7);
    }
}
