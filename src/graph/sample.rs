//! The hard-coded edge list plotted by the CLI

use super::builder::WeightedGraphBuilder;
use super::types::{EdgeTriple, WeightedGraph};

/// Edge list as `(source, target, weight)`; reversed duplicates are
/// intentional and collapse into one undirected edge
pub const SAMPLE_EDGES: &[EdgeTriple] = &[
    (1, 3, 2),
    (1, 2, 1),
    (2, 3, 1),
    (2, 5, -2),
    (2, 4, 1),
    (3, 1, 2),
    (3, 2, 1),
    (3, 4, 2),
    (3, 5, 1),
    (4, 2, 1),
    (4, 3, 2),
    (4, 6, 2),
    (4, 7, 3),
    (5, 3, 1),
    (5, 4, 1),
    (6, 4, 2),
    (6, 7, 9),
    (7, 1, -10),
    (7, 6, 9),
];

/// Build the sample graph
pub fn sample_graph() -> WeightedGraph {
    WeightedGraphBuilder::from_triples(SAMPLE_EDGES).into_graph()
}
