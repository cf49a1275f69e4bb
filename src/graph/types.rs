//! Core graph types
//!
//! This module contains the fundamental data structures used in the weighted
//! graph.

use std::fmt;

use petgraph::graph::UnGraph;
use serde::Serialize;

/// Identifier of a node as it appears in the edge list
pub type NodeId = i64;

/// Scalar edge weight, may be negative
pub type Weight = i64;

/// A `(source, target, weight)` triple from an edge list
pub type EdgeTriple = (NodeId, NodeId, Weight);

/// The undirected weighted graph handed to the layout engine and renderers
pub type WeightedGraph = UnGraph<GraphNode, WeightedEdge>;

/// Represents a node in the weighted graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphNode {
    id: NodeId,
}

impl GraphNode {
    pub fn new(id: NodeId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }
}

impl fmt::Display for GraphNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Represents the weight carried by an undirected edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedEdge {
    weight: Weight,
}

impl WeightedEdge {
    pub fn new(weight: Weight) -> Self {
        Self { weight }
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.weight)
    }
}

/// Unordered node pair, stored with the smaller id first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeKey {
    pub low: NodeId,
    pub high: NodeId,
}

impl EdgeKey {
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.low == self.high
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.low, self.high)
    }
}
