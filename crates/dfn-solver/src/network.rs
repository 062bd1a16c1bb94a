//! Fracture network with steady-state flow.

use tracing::{info, warn};

use crate::conductance::{ConductanceModel, CubicLaw};
use crate::error::{SolverError, SolverResult};
use crate::problem::{BoundaryConditions, EssentialBc, PointSources};
use crate::solve::solve_pressure;
use crate::state::FlowState;
use dfn_fluids::Fluid;
use dfn_network::NetworkTopology;

/// A network topology together with its (lazily computed) flow state.
///
/// Derived state is absent until `calculate_flow` succeeds and is dropped
/// whenever an input it depends on changes (geometry through the setters,
/// fluid and conditions through a new `calculate_flow`). Reading it while
/// absent is `SolverError::FlowNotCalculated`, never a stale value.
#[derive(Debug, Clone)]
pub struct FlowNetwork<M: ConductanceModel = CubicLaw> {
    topology: NetworkTopology,
    model: M,
    fluid: Option<Fluid>,
    state: Option<FlowState>,
}

impl FlowNetwork<CubicLaw> {
    /// Network with laminar parallel-plate conductance.
    pub fn new(topology: NetworkTopology) -> Self {
        Self::with_model(topology, CubicLaw)
    }
}

impl<M: ConductanceModel> FlowNetwork<M> {
    pub fn with_model(topology: NetworkTopology, model: M) -> Self {
        Self {
            topology,
            model,
            fluid: None,
            state: None,
        }
    }

    pub fn topology(&self) -> &NetworkTopology {
        &self.topology
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Fluid used by the most recent successful flow solve.
    pub fn fluid(&self) -> Option<&Fluid> {
        self.fluid.as_ref()
    }

    /// Calculate the mass flow throughout the network.
    ///
    /// The pressure at each node is solved first; the flow through each
    /// segment is its conductance times the pressure drop from inlet to
    /// outlet. A negative value means the fluid actually travels from the
    /// designated outlet to the inlet. With `correct` set, such segments are
    /// flipped afterwards (see `correct_direction`).
    ///
    /// On failure the previous state is discarded, never half-updated.
    pub fn calculate_flow(
        &mut self,
        fluid: &Fluid,
        essential_bc: &EssentialBc,
        point_sources: &PointSources,
        correct: bool,
    ) -> SolverResult<&FlowState> {
        self.state = None;
        self.fluid = None;

        let conditions = BoundaryConditions::new(essential_bc.clone(), point_sources.clone());
        conditions.validate(&self.topology)?;
        fluid.validate()?;

        let conductance = self.model.conductances(fluid, &self.topology)?;
        let pressure = solve_pressure(&self.topology, &conductance, &conditions)?;

        let mass_flow: Vec<f64> = self
            .topology
            .connectivity()
            .iter()
            .zip(&conductance)
            .map(|(&(inlet, outlet), &c)| c * (pressure[inlet] - pressure[outlet]))
            .collect();

        info!(
            model = self.model.name(),
            n_segments = self.topology.n_segments(),
            "flow solved"
        );

        self.fluid = Some(*fluid);
        self.state = Some(FlowState {
            conductance,
            pressure: pressure.iter().copied().collect(),
            mass_flow,
            corrected: false,
            conditions,
        });

        if correct {
            return self.correct_direction();
        }
        self.state()
    }

    /// Correct the order of the inlet and outlet nodes (direction).
    ///
    /// Connectivity is usually written down before the flow structure is
    /// known. Every segment with negative flow gets its node pair swapped and
    /// its flow negated. The swap happens on a fresh copy of the topology.
    pub fn correct_direction(&mut self) -> SolverResult<&FlowState> {
        let state = self.state.as_mut().ok_or(SolverError::FlowNotCalculated)?;
        let flipped = state.negative_segments();

        if !flipped.is_empty() {
            self.topology = self.topology.with_reversed(&flipped)?;
            for &i in &flipped {
                state.mass_flow[i] = -state.mass_flow[i];
            }
            warn!(segments = ?flipped, "reversed segments with negative flow");
        }
        state.corrected = true;

        self.state()
    }

    /// Current flow state, or `FlowNotCalculated`.
    pub fn state(&self) -> SolverResult<&FlowState> {
        self.state.as_ref().ok_or(SolverError::FlowNotCalculated)
    }

    pub fn mass_flow(&self) -> SolverResult<&[f64]> {
        Ok(&self.state()?.mass_flow)
    }

    pub fn pressure(&self) -> SolverResult<&[f64]> {
        Ok(&self.state()?.pressure)
    }

    pub fn conductance(&self) -> SolverResult<&[f64]> {
        Ok(&self.state()?.conductance)
    }

    pub fn is_corrected(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.corrected)
    }

    /// Net mass leaving each node through its segments.
    ///
    /// At a node without a fixed pressure this equals the imposed point
    /// source (0 if none).
    pub fn node_balance(&self) -> SolverResult<Vec<f64>> {
        let state = self.state()?;
        let mut balance = vec![0.0; self.topology.n_nodes()];
        for (&(inlet, outlet), &m) in self.topology.connectivity().iter().zip(&state.mass_flow) {
            balance[inlet] += m;
            balance[outlet] -= m;
        }
        Ok(balance)
    }

    /// Replace segment apertures; drops any computed flow.
    pub fn set_width(&mut self, width: Vec<f64>) -> SolverResult<()> {
        self.topology.set_width(width)?;
        self.invalidate();
        Ok(())
    }

    pub fn set_length(&mut self, length: Vec<f64>) -> SolverResult<()> {
        self.topology.set_length(length)?;
        self.invalidate();
        Ok(())
    }

    pub fn set_thickness(&mut self, thickness: Vec<f64>) -> SolverResult<()> {
        self.topology.set_thickness(thickness)?;
        self.invalidate();
        Ok(())
    }

    pub fn into_topology(self) -> NetworkTopology {
        self.topology
    }

    fn invalidate(&mut self) {
        self.state = None;
        self.fluid = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn network() -> FlowNetwork {
        let topology = NetworkTopology::new(
            vec![(0, 1), (1, 2), (1, 2), (2, 3)],
            vec![1.0; 4],
            vec![1.0; 4],
            vec![1.0; 4],
        )
        .unwrap();
        FlowNetwork::new(topology)
    }

    fn fluid() -> Fluid {
        Fluid::new(1.0, 2.0).with_heat_capacity(3.0)
    }

    #[test]
    fn state_absent_until_solved() {
        let net = network();
        assert_eq!(net.state(), Err(SolverError::FlowNotCalculated));
        assert_eq!(net.mass_flow(), Err(SolverError::FlowNotCalculated));
        assert!(!net.is_corrected());
        assert!(net.fluid().is_none());
    }

    #[test]
    fn correct_before_flow_fails() {
        let mut net = network();
        assert_eq!(
            net.correct_direction(),
            Err(SolverError::FlowNotCalculated)
        );
    }

    #[test]
    fn pressure_bc_is_exact() {
        let mut net = network();
        net.calculate_flow(
            &fluid(),
            &BTreeMap::from([(0, 0.0)]),
            &BTreeMap::from([(3, -1.0)]),
            false,
        )
        .unwrap();
        assert_eq!(net.pressure().unwrap()[0], 0.0);
    }

    #[test]
    fn ebc_and_point_source_on_same_node() {
        let mut net = network();
        let err = net
            .calculate_flow(
                &fluid(),
                &BTreeMap::from([(0, 0.0)]),
                &BTreeMap::from([(0, -1.0)]),
                false,
            )
            .unwrap_err();
        assert_eq!(err, SolverError::ConflictingNodes { nodes: vec![0] });
    }

    #[test]
    fn failed_solve_discards_previous_state() {
        let mut net = network();
        let bc = BTreeMap::from([(0, 0.0)]);
        net.calculate_flow(&fluid(), &bc, &BTreeMap::from([(3, -1.0)]), false)
            .unwrap();
        assert!(
            net.calculate_flow(&fluid(), &bc, &BTreeMap::from([(0, -1.0)]), false)
                .is_err()
        );
        assert!(net.state().is_err());
    }

    #[test]
    fn set_width_invalidates() {
        let mut net = network();
        net.calculate_flow(
            &fluid(),
            &BTreeMap::from([(0, 0.0)]),
            &BTreeMap::from([(3, -1.0)]),
            false,
        )
        .unwrap();
        net.set_width(vec![2.0; 4]).unwrap();
        assert!(net.state().is_err());
    }

    #[test]
    fn correction_flips_connectivity_and_sign() {
        let topology = NetworkTopology::new(
            vec![(0, 1), (2, 1), (1, 2), (3, 2)],
            vec![1.0; 4],
            vec![1.0; 4],
            vec![1.0; 4],
        )
        .unwrap();
        let mut net = FlowNetwork::new(topology);
        let state = net
            .calculate_flow(
                &fluid(),
                &BTreeMap::from([(0, 0.0)]),
                &BTreeMap::from([(3, -1.0)]),
                true,
            )
            .unwrap();

        assert!(state.corrected);
        assert!(state.mass_flow.iter().all(|m| *m >= 0.0));
        assert_eq!(
            net.topology().connectivity(),
            &[(0, 1), (1, 2), (1, 2), (2, 3)]
        );
    }

    #[test]
    fn balanced_bridge_has_positive_zero_flow() {
        let topology = NetworkTopology::new(
            vec![(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)],
            vec![1.0; 5],
            vec![1.0; 5],
            vec![1.0; 5],
        )
        .unwrap();
        let mut net = FlowNetwork::new(topology);
        let state = net
            .calculate_flow(
                &fluid(),
                &BTreeMap::from([(0, 0.0)]),
                &BTreeMap::from([(3, -10.0)]),
                false,
            )
            .unwrap();

        let bridge = state.mass_flow[2];
        assert!(bridge.abs() < 1e-12);
        // an exact balance must not come out as -0.0
        assert!(!(bridge == 0.0 && bridge.is_sign_negative()));
    }
}
