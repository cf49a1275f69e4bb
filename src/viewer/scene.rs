use petgraph::visit::EdgeRef;

use crate::constants::figure;
use crate::error::GraphWeightsError;
use crate::graph::{GraphRenderer, NodeId, WeightedGraph};
use crate::layout::{Layout, Point};

/// A node placed on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneNode {
    pub id: NodeId,
    pub center: Point,
}

/// An edge placed on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct SceneEdge {
    pub from: Point,
    pub to: Point,
    pub self_loop: bool,
    /// Weight text, `None` when weights are hidden
    pub label: Option<String>,
}

impl SceneEdge {
    /// Where the weight label is drawn
    pub fn label_anchor(&self) -> Point {
        if self.self_loop {
            Point::new(self.from.x, self.from.y - figure::NODE_RADIUS * 2.0)
        } else {
            self.from.midpoint(self.to)
        }
    }
}

/// Everything the figure window paints, in pixels of a `width x height`
/// canvas
#[derive(Debug, Clone, PartialEq)]
pub struct FigureScene {
    width: f64,
    height: f64,
    nodes: Vec<SceneNode>,
    edges: Vec<SceneEdge>,
}

impl FigureScene {
    pub fn build(
        graph: &WeightedGraph,
        layout: &Layout,
        width: u32,
        height: u32,
        show_weights: bool,
    ) -> Result<Self, GraphWeightsError> {
        let canvas = GraphRenderer::new(show_weights)
            .with_size(width, height)
            .canvas_positions(graph, layout)?;

        let nodes = graph
            .node_indices()
            .map(|idx| SceneNode {
                id: graph[idx].id(),
                center: canvas[&idx],
            })
            .collect();

        let edges = graph
            .edge_references()
            .map(|edge| SceneEdge {
                from: canvas[&edge.source()],
                to: canvas[&edge.target()],
                self_loop: edge.source() == edge.target(),
                label: show_weights.then(|| edge.weight().to_string()),
            })
            .collect();

        Ok(Self {
            width: f64::from(width),
            height: f64::from(height),
            nodes,
            edges,
        })
    }

    pub fn title(&self) -> &'static str {
        figure::TITLE
    }

    /// Canvas size the scene was laid out for
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Where the title is centred
    pub fn title_anchor(&self) -> Point {
        Point::new(self.width / 2.0, figure::MARGIN / 2.0)
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[SceneEdge] {
        &self.edges
    }

    /// Stretch a canvas point onto a drawing area of another size
    pub fn fit(&self, point: Point, width: f64, height: f64) -> Point {
        Point::new(
            point.x * width / self.width,
            point.y * height / self.height,
        )
    }
}
