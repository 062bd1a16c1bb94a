//! Directed multigraph built from network connectivity.

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::error::{GraphError, GraphResult};
use dfn_network::NetworkTopology;

/// Directed multigraph of a fracture network.
///
/// Node `i` of the network is graph node `NodeIndex::new(i)`; every edge
/// carries the index of the segment it stands for. The graph is a snapshot
/// of the connectivity it was built from and is never edited afterwards:
/// when the connectivity changes, build a new one.
#[derive(Debug, Clone)]
pub struct FlowGraph {
    pub(crate) graph: DiGraph<usize, usize>,
}

impl FlowGraph {
    pub fn from_topology(topology: &NetworkTopology) -> Self {
        Self::from_connectivity(topology.n_nodes(), topology.connectivity())
    }

    /// Build from raw `(inlet, outlet)` pairs over nodes `0..n_nodes`.
    ///
    /// Pairs must reference nodes below `n_nodes`.
    pub fn from_connectivity(n_nodes: usize, connectivity: &[(usize, usize)]) -> Self {
        let mut graph = DiGraph::with_capacity(n_nodes, connectivity.len());
        for node in 0..n_nodes {
            graph.add_node(node);
        }
        for (segment, &(inlet, outlet)) in connectivity.iter().enumerate() {
            graph.add_edge(NodeIndex::new(inlet), NodeIndex::new(outlet), segment);
        }
        Self { graph }
    }

    pub fn n_nodes(&self) -> usize {
        self.graph.node_count()
    }

    pub fn n_edges(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes with no incoming edges, in ascending order.
    pub fn injection_nodes(&self) -> Vec<usize> {
        self.graph
            .node_indices()
            .filter(|&idx| {
                self.graph
                    .neighbors_directed(idx, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .map(|idx| idx.index())
            .collect()
    }

    /// Segments running from `from` to `to`, in ascending order.
    pub fn segments_between(&self, from: usize, to: usize) -> GraphResult<Vec<usize>> {
        let a = self.node_index(from)?;
        let b = self.node_index(to)?;
        let mut segments: Vec<usize> = self
            .graph
            .edges_connecting(a, b)
            .map(|edge| *edge.weight())
            .collect();
        segments.sort_unstable();
        Ok(segments)
    }

    /// `(inlet, outlet, segment)` for every edge.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index(), *e.weight()))
    }

    pub(crate) fn node_index(&self, node: usize) -> GraphResult<NodeIndex> {
        if node < self.graph.node_count() {
            Ok(NodeIndex::new(node))
        } else {
            Err(GraphError::UnknownNode {
                node,
                n_nodes: self.graph.node_count(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network_1() -> FlowGraph {
        FlowGraph::from_connectivity(6, &[(0, 1), (1, 2), (1, 3), (2, 4), (3, 4), (4, 5)])
    }

    #[test]
    fn one_edge_per_segment() {
        let graph = network_1();
        assert_eq!(graph.n_nodes(), 6);
        assert_eq!(graph.n_edges(), 6);
        let edges: Vec<_> = graph.edges().collect();
        assert!(edges.contains(&(1, 3, 2)));
        assert!(edges.contains(&(4, 5, 5)));
    }

    #[test]
    fn parallel_edges_kept() {
        let graph = FlowGraph::from_connectivity(4, &[(0, 1), (1, 2), (1, 2), (2, 3)]);
        assert_eq!(graph.n_edges(), 4);
        assert_eq!(graph.segments_between(1, 2).unwrap(), vec![1, 2]);
        assert_eq!(graph.segments_between(2, 1).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn injection_nodes_have_no_predecessors() {
        assert_eq!(network_1().injection_nodes(), vec![0]);

        let two_sources = FlowGraph::from_connectivity(4, &[(0, 2), (1, 2), (2, 3)]);
        assert_eq!(two_sources.injection_nodes(), vec![0, 1]);
    }

    #[test]
    fn unknown_node() {
        assert_eq!(
            network_1().segments_between(6, 0),
            Err(GraphError::UnknownNode {
                node: 6,
                n_nodes: 6
            })
        );
    }
}
