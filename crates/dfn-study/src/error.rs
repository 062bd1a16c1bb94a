//! Study errors.

use dfn_core::DfnError;
use dfn_solver::SolverError;
use dfn_thermal::ThermalError;
use thiserror::Error;

pub type StudyResult<T> = Result<T, StudyError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StudyError {
    #[error("Invalid study parameter {what}: {value}")]
    InvalidParameter { what: &'static str, value: f64 },

    #[error("Study needs at least one simulation")]
    NoSimulations,

    #[error("Segment {segment} does not exist (network has {n_segments} segments)")]
    UnknownSegment { segment: usize, n_segments: usize },

    #[error("Simulation {sim} failed: {source}")]
    Flow {
        sim: usize,
        #[source]
        source: SolverError,
    },

    #[error("Simulation {sim} failed: {source}")]
    Thermal {
        sim: usize,
        #[source]
        source: ThermalError,
    },
}

impl From<StudyError> for DfnError {
    fn from(err: StudyError) -> Self {
        match err {
            StudyError::Flow { source, .. } => source.into(),
            StudyError::Thermal { source, .. } => source.into(),
            StudyError::UnknownSegment {
                segment,
                n_segments,
            } => DfnError::IndexOob {
                what: "segment",
                index: segment,
                len: n_segments,
            },
            StudyError::InvalidParameter { .. } | StudyError::NoSimulations => {
                DfnError::Validation {
                    what: err.to_string(),
                }
            }
        }
    }
}
