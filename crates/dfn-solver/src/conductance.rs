//! Hydraulic conductance models.

use crate::error::SolverResult;
use dfn_core::ensure_finite;
use dfn_fluids::Fluid;
use dfn_network::{NetworkTopology, Segment};

/// Relationship between the pressure drop across a segment and its mass flow.
///
/// A model maps fluid properties and segment geometry to a linear conductance
/// `c` such that `mdot = c * (P_inlet - P_outlet)`. Swapping the model (for
/// example to a turbulent correction) leaves assembly, solve and everything
/// downstream untouched.
pub trait ConductanceModel: Send + Sync + std::fmt::Debug {
    /// Model name for logging.
    fn name(&self) -> &str;

    /// Conductance of one segment in kg/(s·Pa).
    fn conductance(&self, fluid: &Fluid, segment: &Segment) -> SolverResult<f64>;

    /// Conductance of every segment, in segment order.
    fn conductances(&self, fluid: &Fluid, topology: &NetworkTopology) -> SolverResult<Vec<f64>> {
        topology
            .segments()
            .map(|segment| self.conductance(fluid, &segment))
            .collect()
    }
}

/// Laminar flow between parallel plates (Hele-Shaw / cubic law).
///
/// `c = rho * w^3 * H / (12 * mu * L)`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CubicLaw;

impl ConductanceModel for CubicLaw {
    fn name(&self) -> &str {
        "cubic law"
    }

    fn conductance(&self, fluid: &Fluid, segment: &Segment) -> SolverResult<f64> {
        let num = fluid.density * segment.width.powi(3) * segment.thickness;
        let denom = 12.0 * fluid.viscosity * segment.length;
        let c = ensure_finite(num / denom, "conductance").map_err(|e| {
            crate::SolverError::Numeric {
                what: format!("segment {}: {}", segment.index, e),
            }
        })?;
        Ok(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(length: f64, thickness: f64, width: f64) -> Segment {
        Segment {
            index: 0,
            inlet: 0,
            outlet: 1,
            length,
            thickness,
            width,
        }
    }

    #[test]
    fn cubic_law_value() {
        let fluid = Fluid::new(1000.0, 1e-3);
        let c = CubicLaw.conductance(&fluid, &segment(1.0, 1.0, 1.0)).unwrap();
        assert!((c - 1000.0 / 12e-3).abs() < 1e-6);
    }

    #[test]
    fn doubling_width_is_eightfold() {
        let fluid = Fluid::new(1.0, 2.0);
        let c1 = CubicLaw.conductance(&fluid, &segment(1.0, 1.0, 1.0)).unwrap();
        let c2 = CubicLaw.conductance(&fluid, &segment(1.0, 1.0, 2.0)).unwrap();
        let c3 = CubicLaw.conductance(&fluid, &segment(8.0, 1.0, 2.0)).unwrap();
        assert!((c2 / c1 - 8.0).abs() < 1e-12);
        assert!((c3 - c1).abs() < 1e-12);
    }

    #[test]
    fn conductances_follow_segment_order() {
        let topology = NetworkTopology::new(
            vec![(0, 1), (1, 2)],
            vec![1.0, 2.0],
            vec![1.0, 1.0],
            vec![1.0, 1.0],
        )
        .unwrap();
        let c = CubicLaw
            .conductances(&Fluid::new(12.0, 1.0), &topology)
            .unwrap();
        assert_eq!(c.len(), 2);
        assert!((c[0] - 1.0).abs() < 1e-12);
        assert!((c[1] - 0.5).abs() < 1e-12);
    }
}
