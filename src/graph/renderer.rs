use std::collections::BTreeMap;
use std::io::Write;

use miette::Result;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::constants::figure;
use crate::error::GraphWeightsError;
use crate::graph::{NodeId, Weight, WeightedGraph, edge_labels};
use crate::layout::{Layout, Point};
use crate::utils::string::xml_escape;

mod colors {
    pub const NODE_FILL: &str = "#87CEEB"; // Sky blue
    pub const NODE_STROKE: &str = "#4682B4"; // Steel blue
    pub const EDGE: &str = "#333333";
    pub const LABEL_TEXT: &str = "#000000";
    pub const LABEL_BG: &str = "#FFFFFF";
    pub const BACKGROUND: &str = "#FFFFFF";
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(GraphWeightsError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(GraphWeightsError::from)
    };
}

/// Approximate advance of one glyph at the edge label font size
const LABEL_CHAR_WIDTH: f64 = 6.5;

pub struct GraphRenderer {
    show_weights: bool,
    width: u32,
    height: u32,
}

impl GraphRenderer {
    pub fn new(show_weights: bool) -> Self {
        Self {
            show_weights,
            width: figure::DEFAULT_WIDTH,
            height: figure::DEFAULT_HEIGHT,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Draw nodes, node labels, edges and edge-weight labels as an SVG figure
    pub fn render_svg(
        &self,
        graph: &WeightedGraph,
        layout: &Layout,
        output: &mut dyn Write,
    ) -> Result<()> {
        let canvas = self.canvas_positions(graph, layout)?;
        let (width, height) = (self.width, self.height);

        writeln_out!(
            output,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="DejaVu Sans, Helvetica, Arial, sans-serif">"#
        )?;
        writeln_out!(output, "  <title>{}</title>", xml_escape(figure::TITLE))?;
        writeln_out!(
            output,
            r#"  <rect width="100%" height="100%" fill="{}" />"#,
            colors::BACKGROUND
        )?;
        writeln_out!(
            output,
            r#"  <text x="{:.1}" y="{:.1}" font-size="{}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
            f64::from(width) / 2.0,
            figure::MARGIN / 2.0,
            figure::TITLE_FONT_SIZE,
            xml_escape(figure::TITLE)
        )?;

        writeln_out!(output, r#"  <g class="edges">"#)?;
        for edge in graph.edge_references() {
            let a = canvas[&edge.source()];
            let b = canvas[&edge.target()];
            if edge.source() == edge.target() {
                // Degenerate self-loop, drawn as a small ring above the node
                writeln_out!(
                    output,
                    r#"    <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="none" stroke="{}" stroke-width="1" />"#,
                    a.x,
                    a.y - figure::NODE_RADIUS,
                    figure::NODE_RADIUS * 0.75,
                    colors::EDGE
                )?;
            } else {
                writeln_out!(
                    output,
                    r#"    <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="1" />"#,
                    a.x,
                    a.y,
                    b.x,
                    b.y,
                    colors::EDGE
                )?;
            }
        }
        writeln_out!(output, "  </g>")?;

        writeln_out!(output, r#"  <g class="nodes">"#)?;
        for idx in graph.node_indices() {
            let p = canvas[&idx];
            writeln_out!(
                output,
                r#"    <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="{}" stroke-width="1" />"#,
                p.x,
                p.y,
                figure::NODE_RADIUS,
                colors::NODE_FILL,
                colors::NODE_STROKE
            )?;
            writeln_out!(
                output,
                r#"    <text x="{:.1}" y="{:.1}" font-size="{}" font-weight="bold" fill="{}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
                p.x,
                p.y,
                figure::NODE_FONT_SIZE,
                colors::LABEL_TEXT,
                graph[idx]
            )?;
        }
        writeln_out!(output, "  </g>")?;

        if self.show_weights {
            writeln_out!(output, r#"  <g class="edge-labels">"#)?;
            for edge in graph.edge_references() {
                let a = canvas[&edge.source()];
                let b = canvas[&edge.target()];
                let anchor = if edge.source() == edge.target() {
                    Point::new(a.x, a.y - figure::NODE_RADIUS * 2.0)
                } else {
                    a.midpoint(b)
                };

                let label = edge.weight().to_string();
                let box_width = label.chars().count() as f64 * LABEL_CHAR_WIDTH + 8.0;
                let box_height = f64::from(figure::EDGE_FONT_SIZE) + 6.0;
                writeln_out!(
                    output,
                    r#"    <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" rx="3" ry="3" fill="{}" />"#,
                    anchor.x - box_width / 2.0,
                    anchor.y - box_height / 2.0,
                    box_width,
                    box_height,
                    colors::LABEL_BG
                )?;
                writeln_out!(
                    output,
                    r#"    <text x="{:.1}" y="{:.1}" font-size="{}" fill="{}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
                    anchor.x,
                    anchor.y,
                    figure::EDGE_FONT_SIZE,
                    colors::LABEL_TEXT,
                    label
                )?;
            }
            writeln_out!(output, "  </g>")?;
        }

        writeln_out!(output, "</svg>")?;
        Ok(())
    }

    /// Render as an undirected Graphviz graph; with a layout the positions are
    /// pinned so `neato -n` reproduces the figure
    pub fn render_dot(
        &self,
        graph: &WeightedGraph,
        layout: Option<&Layout>,
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "graph graph_with_weights {{")?;
        writeln_out!(output, "    label=\"{}\";", figure::TITLE)?;
        writeln_out!(output, "    labelloc=t;")?;
        writeln_out!(
            output,
            r#"    node [shape=circle, style=filled, fillcolor="{}", fontsize={}, fontname="Helvetica-Bold"];"#,
            colors::NODE_FILL,
            figure::NODE_FONT_SIZE
        )?;
        writeln_out!(output)?;

        let canvas = layout
            .map(|layout| self.canvas_positions(graph, layout))
            .transpose()?;

        for idx in sorted_nodes(graph) {
            let node = graph[idx];
            match canvas.as_ref().map(|c| c[&idx]) {
                // Graphviz puts the origin bottom-left
                Some(p) => writeln_out!(
                    output,
                    r#"    "{}" [pos="{:.1},{:.1}!"];"#,
                    node,
                    p.x,
                    f64::from(self.height) - p.y
                )?,
                None => writeln_out!(output, r#"    "{}";"#, node)?,
            }
        }

        writeln_out!(output)?;

        for (key, weight) in edge_labels(graph) {
            if self.show_weights {
                writeln_out!(
                    output,
                    r#"    "{}" -- "{}" [label="{}"];"#,
                    key.low,
                    key.high,
                    weight
                )?;
            } else {
                writeln_out!(output, r#"    "{}" -- "{}";"#, key.low, key.high)?;
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    pub fn render_mermaid(&self, graph: &WeightedGraph, output: &mut dyn Write) -> Result<()> {
        writeln_out!(output, "graph LR")?;

        for idx in sorted_nodes(graph) {
            let id = graph[idx].id();
            writeln_out!(output, "    {}((\"{}\"))", self.mermaid_id(id), id)?;
        }

        writeln_out!(output)?;

        for (key, weight) in edge_labels(graph) {
            if self.show_weights {
                writeln_out!(
                    output,
                    "    {} ---|{}| {}",
                    self.mermaid_id(key.low),
                    weight,
                    self.mermaid_id(key.high)
                )?;
            } else {
                writeln_out!(
                    output,
                    "    {} --- {}",
                    self.mermaid_id(key.low),
                    self.mermaid_id(key.high)
                )?;
            }
        }

        writeln_out!(output)?;

        for idx in sorted_nodes(graph) {
            writeln_out!(
                output,
                "    style {} fill:{},stroke:{},stroke-width:1px",
                self.mermaid_id(graph[idx].id()),
                colors::NODE_FILL,
                colors::NODE_STROKE
            )?;
        }

        Ok(())
    }

    pub fn render_ascii(&self, graph: &WeightedGraph, output: &mut dyn Write) -> Result<()> {
        if graph.node_count() == 0 {
            writeln_out!(output, "No nodes found to visualize")?;
            return Ok(());
        }

        writeln_out!(output, "\n📊 {}\n", figure::TITLE)?;

        for idx in sorted_nodes(graph) {
            let node = graph[idx];
            writeln_out!(output, "{}", node)?;

            // A self-loop shows up once per endpoint, keep it once
            let neighbours: BTreeMap<NodeId, Weight> = graph
                .edges(idx)
                .map(|edge| {
                    let other = if edge.source() == idx {
                        edge.target()
                    } else {
                        edge.source()
                    };
                    (graph[other].id(), edge.weight().weight())
                })
                .collect();

            if neighbours.is_empty() {
                writeln_out!(output, "  └── (no edges)")?;
            }

            for (i, (neighbour, weight)) in neighbours.iter().enumerate() {
                let prefix = if i == neighbours.len() - 1 {
                    "└──"
                } else {
                    "├──"
                };
                if self.show_weights {
                    writeln_out!(output, "  {} {} (weight {})", prefix, neighbour, weight)?;
                } else {
                    writeln_out!(output, "  {} {}", prefix, neighbour)?;
                }
            }

            writeln_out!(output)?;
        }

        Ok(())
    }

    /// Map layout coordinates onto the canvas, leaving room for the title
    pub(crate) fn canvas_positions(
        &self,
        graph: &WeightedGraph,
        layout: &Layout,
    ) -> Result<BTreeMap<NodeIndex, Point>, GraphWeightsError> {
        let left = figure::MARGIN;
        let right = f64::from(self.width) - figure::MARGIN;
        let top = figure::MARGIN + f64::from(figure::TITLE_FONT_SIZE);
        let bottom = f64::from(self.height) - figure::MARGIN;

        let (min, max) = layout.bounds().unwrap_or_default();
        let span_x = max.x - min.x;
        let span_y = max.y - min.y;

        let mut canvas = BTreeMap::new();
        for idx in graph.node_indices() {
            let id = graph[idx].id();
            let p = layout
                .position(id)
                .ok_or(GraphWeightsError::MissingPosition { node: id })?;

            let x = if span_x > 0.0 {
                left + (p.x - min.x) / span_x * (right - left)
            } else {
                (left + right) / 2.0
            };
            // SVG y grows downwards
            let y = if span_y > 0.0 {
                bottom - (p.y - min.y) / span_y * (bottom - top)
            } else {
                (top + bottom) / 2.0
            };

            canvas.insert(idx, Point::new(x, y));
        }

        Ok(canvas)
    }

    fn mermaid_id(&self, id: NodeId) -> String {
        if id < 0 {
            format!("nm{}", id.unsigned_abs())
        } else {
            format!("n{id}")
        }
    }
}

fn sorted_nodes(graph: &WeightedGraph) -> Vec<NodeIndex> {
    let mut nodes: Vec<NodeIndex> = graph.node_indices().collect();
    nodes.sort_by_key(|&idx| graph[idx].id());
    nodes
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::graph::{WeightedGraphBuilder, sample_graph};

    fn fixed_layout() -> Layout {
        let positions = BTreeMap::from([
            (1, Point::new(-1.0, -1.0)),
            (2, Point::new(1.0, 1.0)),
            (3, Point::new(0.0, 0.0)),
        ]);
        Layout::new(positions, 1, true)
    }

    #[test]
    fn test_canvas_positions_fill_drawing_area() {
        let graph = WeightedGraphBuilder::from_triples(&[(1, 2, 4), (2, 3, -1)]).into_graph();
        let renderer = GraphRenderer::new(true).with_size(400, 300);

        let canvas = renderer.canvas_positions(&graph, &fixed_layout()).unwrap();
        let by_id: BTreeMap<NodeId, Point> = canvas
            .into_iter()
            .map(|(idx, p)| (graph[idx].id(), p))
            .collect();

        assert_eq!(by_id[&1], Point::new(50.0, 250.0));
        assert_eq!(by_id[&2], Point::new(350.0, 64.0));
        assert_eq!(by_id[&3], Point::new(200.0, 157.0));
    }

    #[test]
    fn test_missing_position_is_an_error() {
        let graph = WeightedGraphBuilder::from_triples(&[(1, 9, 1)]).into_graph();
        let renderer = GraphRenderer::new(true);

        let err = renderer
            .canvas_positions(&graph, &fixed_layout())
            .unwrap_err();
        assert!(matches!(err, GraphWeightsError::MissingPosition { node: 9 }));
    }

    #[test]
    fn test_single_node_is_centered() {
        let graph = WeightedGraphBuilder::from_triples(&[(5, 5, 2)]).into_graph();
        let layout = Layout::new(BTreeMap::from([(5, Point::ORIGIN)]), 0, true);
        let renderer = GraphRenderer::new(true).with_size(200, 200);

        let canvas = renderer.canvas_positions(&graph, &layout).unwrap();
        let p = canvas.values().next().copied().unwrap();
        assert_eq!(p.x, 100.0);
        assert_eq!(p.y, 107.0);
    }

    #[test]
    fn test_mermaid_ids() {
        let renderer = GraphRenderer::new(true);
        assert_eq!(renderer.mermaid_id(7), "n7");
        assert_eq!(renderer.mermaid_id(-3), "nm3");
    }

    #[test]
    fn test_ascii_lists_neighbours_once() {
        let graph = sample_graph();
        let renderer = GraphRenderer::new(true);
        let mut output = Vec::new();

        renderer.render_ascii(&graph, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("📊 Graph with Weights"));
        assert!(text.contains("1\n  ├── 2 (weight 1)\n  ├── 3 (weight 2)\n  └── 7 (weight -10)\n"));
        assert_eq!(text.matches("(weight ").count(), 24);
    }

    #[test]
    fn test_ascii_empty_graph() {
        let graph = WeightedGraph::new_undirected();
        let mut output = Vec::new();

        GraphRenderer::new(true)
            .render_ascii(&graph, &mut output)
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "No nodes found to visualize\n"
        );
    }
}
