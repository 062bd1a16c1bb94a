//! Fluid property errors.

use dfn_core::DfnError;
use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Non-physical values (zero or negative density, viscosity, ...).
    #[error("Non-physical value for {what}: {value}")]
    NonPhysical { what: &'static str, value: f64 },

    /// A property needed by the calculation was never provided.
    #[error("Missing fluid property: {what}")]
    MissingProperty { what: &'static str },
}

impl From<FluidError> for DfnError {
    fn from(err: FluidError) -> Self {
        DfnError::Validation {
            what: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dfn_core::ErrorCategory;

    #[test]
    fn error_display() {
        let err = FluidError::NonPhysical {
            what: "density",
            value: -1.0,
        };
        assert!(err.to_string().contains("density"));
    }

    #[test]
    fn error_to_dfn_error() {
        let err: DfnError = FluidError::MissingProperty {
            what: "heat capacity",
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
