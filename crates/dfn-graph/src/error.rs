//! Graph query errors.

use dfn_core::DfnError;
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node {node} does not exist (graph has {n_nodes} nodes)")]
    UnknownNode { node: usize, n_nodes: usize },
}

impl From<GraphError> for DfnError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::UnknownNode { node, n_nodes } => DfnError::IndexOob {
                what: "node",
                index: node,
                len: n_nodes,
            },
        }
    }
}
