//! Assembly of the nodal mass-conservation system.

use nalgebra::{DMatrix, DVector};

use crate::problem::{EssentialBc, PointSources};
use dfn_network::NetworkTopology;

/// Assemble the global conductance (coefficient) matrix.
///
/// Each segment adds `c * [[1, -1], [-1, 1]]` into the rows and columns of
/// its inlet and outlet nodes.
pub fn assemble_conductance_matrix(topology: &NetworkTopology, conductance: &[f64]) -> DMatrix<f64> {
    let n = topology.n_nodes();
    let mut d = DMatrix::zeros(n, n);

    for (&(inlet, outlet), &c) in topology.connectivity().iter().zip(conductance) {
        d[(inlet, inlet)] += c;
        d[(outlet, outlet)] += c;
        d[(inlet, outlet)] -= c;
        d[(outlet, inlet)] -= c;
    }

    d
}

/// Assemble the source vector.
pub fn assemble_sources(n_nodes: usize, sources: &PointSources) -> DVector<f64> {
    let mut f = DVector::zeros(n_nodes);
    for (&node, &rate) in sources {
        f[node] = rate;
    }
    f
}

/// Eliminate essential (Dirichlet) boundary conditions from the system.
///
/// The known term moves to the right-hand side, then the node's row and
/// column are cleared with a unit diagonal so the solved pressure equals the
/// prescribed value exactly.
pub fn apply_essential_bc(d: &mut DMatrix<f64>, f: &mut DVector<f64>, essential: &EssentialBc) {
    let n = d.nrows();
    for (&node, &value) in essential {
        for row in 0..n {
            f[row] -= d[(row, node)] * value;
        }
        f[node] = value;

        d.fill_row(node, 0.0);
        d.fill_column(node, 0.0);
        d[(node, node)] = 1.0;
    }
}
