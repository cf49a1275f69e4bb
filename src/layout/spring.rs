use std::collections::BTreeMap;

use miette::Result;
use petgraph::visit::EdgeRef;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Layout, Point};
use crate::constants::layout::{
    DEFAULT_ITERATIONS, DEFAULT_SCALE, DEFAULT_THRESHOLD, INITIAL_TEMPERATURE_RATIO, MIN_DISTANCE,
    STALLED_DISPLACEMENT_LENGTH,
};
use crate::error::GraphWeightsError;
use crate::graph::WeightedGraph;
use crate::progress::ProgressReporter;

/// Fruchterman-Reingold spring layout
///
/// Every pair of nodes repels with `k² / d` and every edge attracts with
/// `A · d² / k`, where `A` is the edge weight. A negative weight therefore
/// pushes its endpoints apart. Step lengths are capped by a temperature that
/// cools linearly over the iteration budget.
#[derive(Debug, Clone)]
pub struct SpringLayout {
    iterations: usize,
    threshold: f64,
    optimal_distance: Option<f64>,
    scale: f64,
    center: Point,
    use_weights: bool,
    seed: Option<u64>,
}

impl Default for SpringLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl SpringLayout {
    pub fn new() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            threshold: DEFAULT_THRESHOLD,
            optimal_distance: None,
            scale: DEFAULT_SCALE,
            center: Point::ORIGIN,
            use_weights: true,
            seed: None,
        }
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Override the optimal distance between nodes, `sqrt(1/n)` by default
    pub fn with_optimal_distance(mut self, k: Option<f64>) -> Self {
        self.optimal_distance = k;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    /// Treat every edge as weight 1 when `false`
    pub fn with_use_weights(mut self, use_weights: bool) -> Self {
        self.use_weights = use_weights;
        self
    }

    /// Seed for the initial placement; `None` draws from OS entropy
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    fn validate(&self) -> Result<(), GraphWeightsError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(GraphWeightsError::ConfigurationError {
                message: format!("Layout scale must be a positive number, got {}", self.scale),
            });
        }
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(GraphWeightsError::ConfigurationError {
                message: format!(
                    "Layout threshold must be a non-negative number, got {}",
                    self.threshold
                ),
            });
        }
        if let Some(k) = self.optimal_distance
            && (!k.is_finite() || k <= 0.0)
        {
            return Err(GraphWeightsError::ConfigurationError {
                message: format!("Optimal node distance must be positive, got {k}"),
            });
        }
        Ok(())
    }

    /// Run the simulation and return one position per node
    pub fn compute(
        &self,
        graph: &WeightedGraph,
        progress: Option<&ProgressReporter>,
    ) -> Result<Layout> {
        self.validate()?;

        let n = graph.node_count();
        let ids: Vec<_> = graph.node_indices().map(|idx| graph[idx].id()).collect();

        if n == 0 {
            return Ok(Layout::new(BTreeMap::new(), 0, true));
        }
        if n == 1 {
            return Ok(Layout::new(
                BTreeMap::from([(ids[0], self.center)]),
                0,
                true,
            ));
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut pos: Vec<Point> = (0..n)
            .map(|_| Point::new(rng.r#gen::<f64>(), rng.r#gen::<f64>()))
            .collect();

        // Dense adjacency; node indices are contiguous because nothing is removed
        let mut adjacency = vec![vec![0.0_f64; n]; n];
        for edge in graph.edge_references() {
            let (a, b) = (edge.source().index(), edge.target().index());
            let weight = if self.use_weights {
                edge.weight().weight() as f64
            } else {
                1.0
            };
            adjacency[a][b] = weight;
            adjacency[b][a] = weight;
        }

        let k = self
            .optimal_distance
            .unwrap_or_else(|| (1.0 / n as f64).sqrt());

        let (min, max) = extent(&pos);
        let mut temperature = (max.x - min.x).max(max.y - min.y) * INITIAL_TEMPERATURE_RATIO;
        let cooling = temperature / (self.iterations as f64 + 1.0);

        let mut iterations_run = 0;
        let mut converged = false;

        for _ in 0..self.iterations {
            let mut steps = vec![Point::ORIGIN; n];

            for i in 0..n {
                let mut displacement = Point::ORIGIN;
                for j in 0..n {
                    let delta = pos[i] - pos[j];
                    let distance = delta.length().max(MIN_DISTANCE);
                    let force = k * k / (distance * distance) - adjacency[i][j] * distance / k;
                    displacement += delta * force;
                }

                steps[i] = limited_step(displacement, temperature);
            }

            for (p, step) in pos.iter_mut().zip(&steps) {
                *p += *step;
            }
            temperature -= cooling;
            iterations_run += 1;

            let movement = movement_per_node(&steps);
            if let Some(p) = progress {
                p.update_layout_progress(iterations_run, movement);
            }
            if movement < self.threshold {
                converged = true;
                break;
            }
        }

        self.rescale(&mut pos);

        let positions = ids.into_iter().zip(pos).collect();
        Ok(Layout::new(positions, iterations_run, converged))
    }

    /// Centre on the mean, fit the largest coordinate to `scale`, then move to
    /// `center`
    fn rescale(&self, pos: &mut [Point]) {
        let n = pos.len() as f64;
        let mean = pos.iter().fold(Point::ORIGIN, |acc, &p| acc + p) * (1.0 / n);

        let mut limit: f64 = 0.0;
        for p in pos.iter_mut() {
            *p = *p - mean;
            limit = limit.max(p.x.abs()).max(p.y.abs());
        }

        let factor = if limit > 0.0 { self.scale / limit } else { 1.0 };
        for p in pos.iter_mut() {
            *p = *p * factor + self.center;
        }
    }
}

/// Scale a displacement to the current temperature
///
/// Near-zero displacements are divided by a fixed length instead, so a node
/// that is almost balanced only creeps.
fn limited_step(displacement: Point, temperature: f64) -> Point {
    let length = displacement.length();
    let length = if length < MIN_DISTANCE {
        STALLED_DISPLACEMENT_LENGTH
    } else {
        length
    };
    displacement * (temperature / length)
}

/// Frobenius norm of all steps divided by the node count
fn movement_per_node(steps: &[Point]) -> f64 {
    let squared: f64 = steps.iter().map(|s| s.x * s.x + s.y * s.y).sum();
    squared.sqrt() / steps.len() as f64
}

fn extent(pos: &[Point]) -> (Point, Point) {
    pos.iter().fold(
        (
            Point::new(f64::INFINITY, f64::INFINITY),
            Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        ),
        |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        },
    )
}
