//! dfn-graph: directed multigraph view of a flow-consistent fracture network.
//!
//! Provides:
//! - `FlowGraph`: one edge per segment, from inlet to outlet, tagged with the
//!   segment index; parallel segments become parallel edges
//! - injection node detection (nodes without incoming edges)
//! - enumeration of every segment path from injection nodes to a node
//!
//! # Example
//!
//! ```
//! use dfn_graph::FlowGraph;
//! use dfn_network::NetworkTopology;
//!
//! let topology = NetworkTopology::new(
//!     vec![(0, 1), (1, 2), (1, 2), (2, 3)],
//!     vec![1.0; 4],
//!     vec![1.0; 4],
//!     vec![1.0; 4],
//! )
//! .unwrap();
//! let graph = FlowGraph::from_topology(&topology);
//!
//! assert_eq!(graph.injection_nodes(), vec![0]);
//! let paths = graph.find_paths(&[0], 3).unwrap();
//! assert_eq!(paths, vec![vec![0, 1, 3], vec![0, 2, 3]]);
//! ```

pub mod error;
pub mod graph;
pub mod paths;

pub use error::{GraphError, GraphResult};
pub use graph::FlowGraph;
