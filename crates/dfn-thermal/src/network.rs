//! Fracture network with flow and thermal performance.

use std::sync::OnceLock;

use nalgebra::DMatrix;
use tracing::debug;

use crate::error::{ThermalError, ThermalResult};
use crate::properties::ThermalProperties;
use crate::temperature::{Superposition, mass_contribution};
use dfn_fluids::Fluid;
use dfn_graph::FlowGraph;
use dfn_network::NetworkTopology;
use dfn_solver::{ConductanceModel, CubicLaw, EssentialBc, FlowNetwork, FlowState, PointSources};

/// A flow network plus the thermal properties of the surrounding rock.
///
/// The directed graph used for path queries is built on first use from the
/// current connectivity and dropped by every method that can change it.
/// Graph and temperature queries require a solved flow with no negative
/// segment flow.
#[derive(Debug, Clone)]
pub struct ThermalNetwork<M: ConductanceModel = CubicLaw> {
    flow: FlowNetwork<M>,
    properties: ThermalProperties,
    graph: OnceLock<FlowGraph>,
}

impl ThermalNetwork<CubicLaw> {
    pub fn new(topology: NetworkTopology, properties: ThermalProperties) -> ThermalResult<Self> {
        Self::from_flow(FlowNetwork::new(topology), properties)
    }
}

impl<M: ConductanceModel> ThermalNetwork<M> {
    pub fn from_flow(flow: FlowNetwork<M>, properties: ThermalProperties) -> ThermalResult<Self> {
        properties.validate()?;
        Ok(Self {
            flow,
            properties,
            graph: OnceLock::new(),
        })
    }

    pub fn flow(&self) -> &FlowNetwork<M> {
        &self.flow
    }

    pub fn topology(&self) -> &NetworkTopology {
        self.flow.topology()
    }

    pub fn properties(&self) -> ThermalProperties {
        self.properties
    }

    pub fn into_flow(self) -> FlowNetwork<M> {
        self.flow
    }

    /// See `FlowNetwork::calculate_flow`.
    pub fn calculate_flow(
        &mut self,
        fluid: &Fluid,
        essential_bc: &EssentialBc,
        point_sources: &PointSources,
        correct: bool,
    ) -> ThermalResult<&FlowState> {
        self.graph.take();
        Ok(self
            .flow
            .calculate_flow(fluid, essential_bc, point_sources, correct)?)
    }

    /// See `FlowNetwork::correct_direction`.
    pub fn correct_direction(&mut self) -> ThermalResult<&FlowState> {
        self.graph.take();
        Ok(self.flow.correct_direction()?)
    }

    pub fn set_width(&mut self, width: Vec<f64>) -> ThermalResult<()> {
        self.graph.take();
        Ok(self.flow.set_width(width)?)
    }

    pub fn set_length(&mut self, length: Vec<f64>) -> ThermalResult<()> {
        self.graph.take();
        Ok(self.flow.set_length(length)?)
    }

    pub fn set_thickness(&mut self, thickness: Vec<f64>) -> ThermalResult<()> {
        self.graph.take();
        Ok(self.flow.set_thickness(thickness)?)
    }

    /// Mass flow, provided it has been calculated and is nowhere negative.
    fn checked_mass_flow(&self) -> ThermalResult<&[f64]> {
        let state = self.flow.state()?;
        let negative = state.negative_segments();
        if !negative.is_empty() {
            return Err(ThermalError::NegativeFlow { segments: negative });
        }
        Ok(&state.mass_flow)
    }

    /// Directed multigraph of the flow-consistent network.
    pub fn graph(&self) -> ThermalResult<&FlowGraph> {
        self.checked_mass_flow()?;
        Ok(self
            .graph
            .get_or_init(|| FlowGraph::from_topology(self.flow.topology())))
    }

    /// Nodes without incoming segments.
    pub fn injection_nodes(&self) -> ThermalResult<Vec<usize>> {
        Ok(self.graph()?.injection_nodes())
    }

    /// Flow-split fraction of every segment at its outlet node.
    pub fn mass_contribution(&self) -> ThermalResult<Vec<f64>> {
        let mass_flow = self.checked_mass_flow()?;
        Ok(mass_contribution(self.flow.topology(), mass_flow))
    }

    /// Every segment path from `injection_nodes` to `target`.
    pub fn find_paths(&self, injection_nodes: &[usize], target: usize) -> ThermalResult<Vec<Vec<usize>>> {
        Ok(self.graph()?.find_paths(injection_nodes, target)?)
    }

    /// Calculate the dimensionless temperature of a segment.
    ///
    /// `distance` is measured from the segment's inlet node and `time` from
    /// the start of operation. The result has one row per time and one
    /// column per distance.
    pub fn calculate_temperature(
        &self,
        fluid: &Fluid,
        segment: usize,
        distance: &[f64],
        time: &[f64],
    ) -> ThermalResult<DMatrix<f64>> {
        let mass_flow = self.checked_mass_flow()?;
        fluid.validate()?;
        let heat_capacity = fluid.require_heat_capacity()?;

        let topology = self.flow.topology();
        let Some(target) = topology.segment(segment) else {
            return Err(ThermalError::UnknownSegment {
                segment,
                n_segments: topology.n_segments(),
            });
        };

        let graph = self.graph()?;
        let paths = graph.find_paths(&graph.injection_nodes(), target.inlet)?;
        debug!(segment, inlet = target.inlet, paths = paths.len(), "superposing paths");

        let model = Superposition::new(
            topology,
            mass_flow,
            heat_capacity,
            self.properties.thermal_cond,
            self.properties.thermal_diff,
        );
        model.evaluate(segment, &paths, distance, time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dfn_solver::SolverError;
    use std::collections::BTreeMap;

    fn network() -> ThermalNetwork {
        let topology = NetworkTopology::new(
            vec![(0, 1), (1, 2), (1, 3)],
            vec![1.0; 3],
            vec![1.0; 3],
            vec![1.0; 3],
        )
        .unwrap();
        ThermalNetwork::new(topology, ThermalProperties::new(2.9, 1e-6).unwrap()).unwrap()
    }

    fn fluid() -> Fluid {
        Fluid::new(1000.0, 1e-3).with_heat_capacity(4300.0)
    }

    #[test]
    fn queries_before_flow_are_state_errors() {
        let net = network();
        let not_calculated = ThermalError::Solver(SolverError::FlowNotCalculated);
        assert_eq!(net.graph().unwrap_err(), not_calculated);
        assert_eq!(net.mass_contribution(), Err(not_calculated.clone()));
        assert_eq!(
            net.calculate_temperature(&fluid(), 0, &[1.0], &[1.0]),
            Err(not_calculated)
        );
    }

    #[test]
    fn negative_flow_rejected_until_corrected() {
        let mut net = network();
        let bc = BTreeMap::from([(0, 0.0)]);
        let sources = BTreeMap::from([(3, -1.0)]);

        // fixing node 2 makes it feed node 1 against the order of segment 1
        let bc_two = BTreeMap::from([(0, 0.0), (2, 0.0)]);
        net.calculate_flow(&fluid(), &bc_two, &sources, false).unwrap();
        assert!(matches!(
            net.find_paths(&[0], 3),
            Err(ThermalError::NegativeFlow { .. })
        ));

        net.correct_direction().unwrap();
        assert!(net.find_paths(&[0, 2], 3).is_ok());

        net.calculate_flow(&fluid(), &bc, &sources, true).unwrap();
        assert!(net.graph().is_ok());
    }

    #[test]
    fn graph_rebuilt_after_correction() {
        let mut net = network();
        let bc = BTreeMap::from([(0, 0.0), (2, 0.0)]);
        let sources = BTreeMap::from([(3, -1.0)]);
        net.calculate_flow(&fluid(), &bc, &sources, false).unwrap();
        net.correct_direction().unwrap();

        let edges: Vec<_> = net.graph().unwrap().edges().collect();
        assert_eq!(edges, vec![(0, 1, 0), (2, 1, 1), (1, 3, 2)]);
        assert_eq!(net.injection_nodes().unwrap(), vec![0, 2]);
    }

    #[test]
    fn missing_heat_capacity() {
        let mut net = network();
        net.calculate_flow(
            &fluid(),
            &BTreeMap::from([(0, 0.0), (2, 0.0)]),
            &BTreeMap::from([(3, -1.0)]),
            true,
        )
        .unwrap();
        assert!(matches!(
            net.calculate_temperature(&Fluid::new(1000.0, 1e-3), 2, &[1.0], &[1.0]),
            Err(ThermalError::Fluid(_))
        ));
        assert!(matches!(
            net.calculate_temperature(&fluid(), 3, &[1.0], &[1.0]),
            Err(ThermalError::UnknownSegment { segment: 3, .. })
        ));
    }
}
