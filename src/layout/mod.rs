//! # Node Layout Module
//!
//! Computes a 2D position for every node of a [`WeightedGraph`] with a
//! force-directed (Fruchterman-Reingold) simulation. Connected nodes are
//! pulled together along their edges while every pair of nodes repels.
//!
//! ## Example
//!
//! ```
//! use graph_weights::graph::sample_graph;
//! use graph_weights::layout::SpringLayout;
//!
//! # fn main() -> miette::Result<()> {
//! let graph = sample_graph();
//! let layout = SpringLayout::new().with_seed(Some(7)).compute(&graph, None)?;
//!
//! assert_eq!(layout.len(), 7);
//! for (_, point) in layout.iter() {
//!     assert!(point.x.abs() <= 1.0 + 1e-9);
//!     assert!(point.y.abs() <= 1.0 + 1e-9);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`WeightedGraph`]: crate::graph::WeightedGraph

mod spring;

use std::collections::BTreeMap;
use std::ops::{Add, AddAssign, Mul, Sub};

use serde::Serialize;

use crate::graph::NodeId;

pub use spring::SpringLayout;

/// A position in layout space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Node positions produced by a layout run
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Layout {
    positions: BTreeMap<NodeId, Point>,
    iterations: usize,
    converged: bool,
}

impl Layout {
    pub(crate) fn new(
        positions: BTreeMap<NodeId, Point>,
        iterations: usize,
        converged: bool,
    ) -> Self {
        Self {
            positions,
            iterations,
            converged,
        }
    }

    pub fn position(&self, node: NodeId) -> Option<Point> {
        self.positions.get(&node).copied()
    }

    /// Positions ordered by node id
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Point)> + '_ {
        self.positions.iter().map(|(&id, &point)| (id, point))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of simulation steps that were actually run
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Whether the simulation settled before the iteration budget ran out
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Smallest box containing every position as `(min, max)`
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut points = self.positions.values();
        let first = *points.next()?;
        Some(points.fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }
}
