//! Derived flow state of a solved network.

use crate::problem::BoundaryConditions;

/// Solution of one flow solve.
///
/// Recomputed from scratch by every `calculate_flow`; never updated in place
/// except by direction correction, which flips signs together with the
/// connectivity it refers to.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowState {
    /// Segment conductances (kg/(s·Pa))
    pub conductance: Vec<f64>,
    /// Node pressures (Pa)
    pub pressure: Vec<f64>,
    /// Segment mass flow (kg/s); positive means inlet -> outlet as currently ordered
    pub mass_flow: Vec<f64>,
    /// True once every segment has been oriented along its flow
    pub corrected: bool,
    /// Conditions the state was solved for
    pub conditions: BoundaryConditions,
}

impl FlowState {
    /// Indices of segments with negative mass flow.
    pub fn negative_segments(&self) -> Vec<usize> {
        self.mass_flow
            .iter()
            .enumerate()
            .filter(|(_, m)| **m < 0.0)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn has_negative_flow(&self) -> bool {
        self.mass_flow.iter().any(|m| *m < 0.0)
    }

    /// Pressure difference `P[a] - P[b]`.
    pub fn pressure_drop(&self, a: usize, b: usize) -> Option<f64> {
        Some(self.pressure.get(a)? - self.pressure.get(b)?)
    }
}
