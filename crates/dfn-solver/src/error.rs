//! Error types for solver operations.

use dfn_core::DfnError;
use dfn_fluids::FluidError;
use dfn_network::NetworkError;
use thiserror::Error;

/// Errors that can occur during network solving.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Fluid error: {0}")]
    Fluid(#[from] FluidError),

    #[error(
        "A node cannot have an essential boundary condition imposed and be a point \
         source/sink. The problem nodes are {nodes:?}"
    )]
    ConflictingNodes { nodes: Vec<usize> },

    #[error("{what} refers to node {node}, but the network has {n_nodes} nodes")]
    UnknownNode {
        what: &'static str,
        node: usize,
        n_nodes: usize,
    },

    #[error(
        "Network has not had the mass flow calculated, call 'calculate_flow' before \
         calling this method"
    )]
    FlowNotCalculated,

    #[error("Singular system: nodes {floating:?} are not connected to any fixed-pressure node")]
    Singular { floating: Vec<usize> },

    #[error("Numeric error: {what}")]
    Numeric { what: String },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for DfnError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::Network(err) => err.into(),
            SolverError::Fluid(err) => err.into(),
            SolverError::FlowNotCalculated => DfnError::State {
                what: e.to_string(),
            },
            SolverError::Singular { .. } | SolverError::Numeric { .. } => DfnError::Numerical {
                what: e.to_string(),
            },
            SolverError::ConflictingNodes { .. } | SolverError::UnknownNode { .. } => {
                DfnError::Validation {
                    what: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dfn_core::ErrorCategory;

    #[test]
    fn conflicting_nodes_listed() {
        let err = SolverError::ConflictingNodes { nodes: vec![0, 3] };
        assert!(err.to_string().contains("[0, 3]"));
    }

    #[test]
    fn categories() {
        let cases = [
            (SolverError::FlowNotCalculated, ErrorCategory::State),
            (
                SolverError::Singular { floating: vec![2] },
                ErrorCategory::Numerical,
            ),
            (
                SolverError::ConflictingNodes { nodes: vec![1] },
                ErrorCategory::Validation,
            ),
            (
                SolverError::Network(NetworkError::Empty),
                ErrorCategory::Validation,
            ),
        ];
        for (err, category) in cases {
            assert_eq!(DfnError::from(err).category(), category);
        }
    }
}
