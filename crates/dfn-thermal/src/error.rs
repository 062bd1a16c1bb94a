//! Thermal model errors.

use dfn_core::DfnError;
use dfn_fluids::FluidError;
use dfn_graph::GraphError;
use dfn_solver::SolverError;
use thiserror::Error;

pub type ThermalResult<T> = Result<T, ThermalError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThermalError {
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    #[error("Fluid error: {0}")]
    Fluid(#[from] FluidError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error(
        "Network has negative mass flow values in segments {segments:?}, need to correct \
         node designation using 'correct_direction' or set 'correct' to true in \
         'calculate_flow'"
    )]
    NegativeFlow { segments: Vec<usize> },

    #[error("Segment {segment} does not exist (network has {n_segments} segments)")]
    UnknownSegment { segment: usize, n_segments: usize },

    #[error("Invalid {what} at position {index}: {value}")]
    InvalidQuery {
        what: &'static str,
        index: usize,
        value: f64,
    },

    #[error("Non-physical value for {what}: {value}")]
    NonPhysical { what: &'static str, value: f64 },
}

impl From<ThermalError> for DfnError {
    fn from(err: ThermalError) -> Self {
        match err {
            ThermalError::Solver(e) => e.into(),
            ThermalError::Fluid(e) => e.into(),
            ThermalError::Graph(e) => e.into(),
            ThermalError::UnknownSegment {
                segment,
                n_segments,
            } => DfnError::IndexOob {
                what: "segment",
                index: segment,
                len: n_segments,
            },
            ThermalError::NegativeFlow { .. }
            | ThermalError::InvalidQuery { .. }
            | ThermalError::NonPhysical { .. } => DfnError::Validation {
                what: err.to_string(),
            },
        }
    }
}
