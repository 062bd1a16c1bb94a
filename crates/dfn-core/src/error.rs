use thiserror::Error;

pub type DfnResult<T> = Result<T, DfnError>;

/// Coarse classification shared by every crate error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller-correctable input problem, detected before expensive work.
    Validation,
    /// Operation invoked out of its required order.
    State,
    /// The numerical problem itself is ill-posed.
    Numerical,
}

#[derive(Error, Debug)]
pub enum DfnError {
    #[error("Validation error: {what}")]
    Validation { what: String },

    #[error("State error: {what}")]
    State { what: String },

    #[error("Numerical error: {what}")]
    Numerical { what: String },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },
}

impl DfnError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DfnError::Validation { .. } | DfnError::IndexOob { .. } => ErrorCategory::Validation,
            DfnError::State { .. } => ErrorCategory::State,
            DfnError::Numerical { .. } | DfnError::NonFinite { .. } => ErrorCategory::Numerical,
        }
    }
}
