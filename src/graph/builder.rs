use std::collections::{BTreeMap, HashMap};

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use super::types::{EdgeKey, EdgeTriple, GraphNode, NodeId, Weight, WeightedEdge, WeightedGraph};

/// Builder for constructing undirected weighted graphs
///
/// Nodes are created the first time an edge references them. Adding an edge
/// for a pair that already exists, in either orientation, overwrites its
/// weight instead of creating a parallel edge.
pub struct WeightedGraphBuilder {
    graph: WeightedGraph,
    node_indices: HashMap<NodeId, NodeIndex>,
}

impl Default for WeightedGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WeightedGraphBuilder {
    /// Create an empty graph builder
    pub fn new() -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            node_indices: HashMap::new(),
        }
    }

    /// Build a graph from an ordered list of `(source, target, weight)`
    /// triples
    pub fn from_triples(triples: &[EdgeTriple]) -> Self {
        let mut builder = Self::new();
        builder.extend_from_triples(triples);
        builder
    }

    /// Add every triple in order; later triples win for repeated pairs
    pub fn extend_from_triples(&mut self, triples: &[EdgeTriple]) -> &mut Self {
        for &(source, target, weight) in triples {
            self.add_edge(source, target, weight);
        }
        self
    }

    /// Add or overwrite the edge between `source` and `target`
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, weight: Weight) -> &mut Self {
        let a = self.ensure_node(source);
        let b = self.ensure_node(target);

        // find_edge on an undirected graph matches both orientations
        self.graph.update_edge(a, b, WeightedEdge::new(weight));
        self
    }

    fn ensure_node(&mut self, id: NodeId) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(&id) {
            return idx;
        }

        let idx = self.graph.add_node(GraphNode::new(id));
        self.node_indices.insert(id, idx);
        idx
    }

    /// Index of the node with the given id, if any edge referenced it
    pub fn node_index(&self, id: NodeId) -> Option<NodeIndex> {
        self.node_indices.get(&id).copied()
    }

    /// Weight of the edge between two nodes, independent of orientation
    pub fn weight(&self, a: NodeId, b: NodeId) -> Option<Weight> {
        let a = self.node_index(a)?;
        let b = self.node_index(b)?;
        self.graph
            .find_edge(a, b)
            .map(|edge| self.graph[edge].weight())
    }

    /// Node ids in first-reference order
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.graph
            .node_indices()
            .map(|idx| self.graph[idx].id())
            .collect()
    }

    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    pub fn into_graph(self) -> WeightedGraph {
        self.graph
    }
}

/// Derive the edge label map used when annotating edges with their weights
pub fn edge_labels(graph: &WeightedGraph) -> BTreeMap<EdgeKey, Weight> {
    graph
        .edge_references()
        .map(|edge| {
            let key = EdgeKey::new(graph[edge.source()].id(), graph[edge.target()].id());
            (key, edge.weight().weight())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::graph::SAMPLE_EDGES;

    #[test]
    fn test_reverse_triple_collapses() {
        let mut builder = WeightedGraphBuilder::new();
        builder.add_edge(1, 3, 2).add_edge(3, 1, 5);

        assert_eq!(builder.graph().edge_count(), 1);
        assert_eq!(builder.weight(1, 3), Some(5));
        assert_eq!(builder.weight(3, 1), Some(5));
    }

    #[test]
    fn test_same_orientation_overwrites() {
        let builder = WeightedGraphBuilder::from_triples(&[(2, 4, 1), (2, 4, -7)]);

        assert_eq!(builder.graph().edge_count(), 1);
        assert_eq!(builder.weight(4, 2), Some(-7));
    }

    #[test]
    fn test_nodes_created_in_first_reference_order() {
        let builder = WeightedGraphBuilder::from_triples(SAMPLE_EDGES);
        assert_eq!(builder.node_ids(), vec![1, 3, 2, 5, 4, 6, 7]);
    }

    #[test]
    fn test_node_set_matches_endpoints() {
        let builder = WeightedGraphBuilder::from_triples(SAMPLE_EDGES);

        let expected: BTreeSet<NodeId> = SAMPLE_EDGES
            .iter()
            .flat_map(|&(u, v, _)| [u, v])
            .collect();
        let actual: BTreeSet<NodeId> = builder.node_ids().into_iter().collect();

        assert_eq!(actual, expected);
        assert_eq!(actual.len(), 7);
    }

    #[test]
    fn test_last_triple_wins_for_every_pair() {
        let builder = WeightedGraphBuilder::from_triples(SAMPLE_EDGES);

        let mut last: BTreeMap<EdgeKey, Weight> = BTreeMap::new();
        for &(u, v, w) in SAMPLE_EDGES {
            last.insert(EdgeKey::new(u, v), w);
        }

        assert_eq!(builder.graph().edge_count(), last.len());
        for (key, weight) in last {
            assert_eq!(builder.weight(key.low, key.high), Some(weight), "{key}");
        }
    }

    #[test]
    fn test_self_loop_is_a_single_edge() {
        let builder = WeightedGraphBuilder::from_triples(&[(4, 4, 3), (4, 4, 8)]);

        assert_eq!(builder.graph().node_count(), 1);
        assert_eq!(builder.graph().edge_count(), 1);
        assert_eq!(builder.weight(4, 4), Some(8));
    }

    #[test]
    fn test_unknown_nodes() {
        let builder = WeightedGraphBuilder::from_triples(&[(1, 2, 1)]);

        assert_eq!(builder.node_index(9), None);
        assert_eq!(builder.weight(1, 9), None);
        assert_eq!(builder.weight(1, 1), None);
    }

    #[test]
    fn test_edge_labels() {
        let graph = WeightedGraphBuilder::from_triples(SAMPLE_EDGES).into_graph();
        let labels = edge_labels(&graph);

        assert_eq!(labels.len(), 12);
        assert_eq!(labels[&EdgeKey::new(1, 2)], 1);
        assert_eq!(labels[&EdgeKey::new(7, 1)], -10);
        assert_eq!(labels[&EdgeKey::new(6, 7)], 9);
        assert_eq!(labels[&EdgeKey::new(2, 5)], -2);
    }

    #[test]
    fn test_building_twice_is_identical() {
        let first = edge_labels(WeightedGraphBuilder::from_triples(SAMPLE_EDGES).graph());
        let second = edge_labels(WeightedGraphBuilder::from_triples(SAMPLE_EDGES).graph());

        assert_eq!(first, second);
    }
}
