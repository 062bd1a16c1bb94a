//! Topology-specific error types.

use dfn_core::DfnError;

pub type NetworkResult<T> = Result<T, NetworkError>;

/// Topology construction and validation errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The connectivity holds no segments.
    #[error("Network has no segments")]
    Empty,

    /// One or more geometry parameters contain zero, negative or non-finite entries.
    #[error("The parameter(s) {} need to be greater than zero", .params.join(", "))]
    NonPositive { params: Vec<&'static str> },

    /// One or more geometry parameters do not have one entry per segment.
    #[error(
        "The size of parameter(s) {} needs to equal the number of segments ({n_segments})",
        .params.join(", ")
    )]
    SizeMismatch {
        params: Vec<&'static str>,
        n_segments: usize,
    },

    /// A segment starts and ends at the same node.
    #[error("Segment {segment} starts and ends at node {node}")]
    SelfLoop { segment: usize, node: usize },

    /// Node ids are not exactly `0..n_nodes`.
    #[error("Nodes must be numbered densely from 0; missing node ids {missing:?}")]
    SparseNodeNumbering { missing: Vec<usize> },

    /// Segment index does not exist.
    #[error("Segment {index} does not exist (network has {len})")]
    SegmentOob { index: usize, len: usize },
}

impl From<NetworkError> for DfnError {
    fn from(err: NetworkError) -> Self {
        match err {
            NetworkError::SegmentOob { index, len } => DfnError::IndexOob {
                what: "segment",
                index,
                len,
            },
            other => DfnError::Validation {
                what: other.to_string(),
            },
        }
    }
}
