//! Linear solve for nodal pressure.

use nalgebra::DVector;
use tracing::debug;

use crate::assembly::{apply_essential_bc, assemble_conductance_matrix, assemble_sources};
use crate::error::{SolverError, SolverResult};
use crate::problem::BoundaryConditions;
use dfn_network::NetworkTopology;

/// Solve `[D]{P} = {f}` for the pressure at each node.
///
/// `conductance` holds one value per segment. Boundary conditions are
/// validated first, so an unanchored part of the network is reported as
/// `SolverError::Singular` instead of producing meaningless pressures.
pub fn solve_pressure(
    topology: &NetworkTopology,
    conductance: &[f64],
    bc: &BoundaryConditions,
) -> SolverResult<DVector<f64>> {
    if conductance.len() != topology.n_segments() {
        return Err(SolverError::Numeric {
            what: format!(
                "{} conductance values for {} segments",
                conductance.len(),
                topology.n_segments()
            ),
        });
    }
    bc.validate(topology)?;

    let mut d = assemble_conductance_matrix(topology, conductance);
    let mut f = assemble_sources(topology.n_nodes(), &bc.sources);
    apply_essential_bc(&mut d, &mut f, &bc.essential);

    debug!(
        n_nodes = topology.n_nodes(),
        n_fixed = bc.essential.len(),
        n_sources = bc.sources.len(),
        "assembled pressure system"
    );

    let pressure = d.lu().solve(&f).ok_or_else(|| SolverError::Numeric {
        what: "pressure system is singular".to_string(),
    })?;

    if let Some(node) = pressure.iter().position(|p| !p.is_finite()) {
        return Err(SolverError::Numeric {
            what: format!("non-finite pressure at node {}", node),
        });
    }

    Ok(pressure)
}
