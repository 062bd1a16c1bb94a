//! Steady-state pipe-network flow solver for fracture networks.
//!
//! Each segment is a lumped hydraulic conductance between its two nodes.
//! Mass conservation at every node gives a linear system `[D]{P} = {f}` for
//! the nodal pressures; essential (fixed-pressure) boundary conditions are
//! eliminated from the system before it is solved, and the segment mass
//! flow follows from the pressure difference across each segment.

pub mod assembly;
pub mod conductance;
pub mod error;
pub mod network;
pub mod problem;
pub mod solve;
pub mod state;

pub use conductance::{ConductanceModel, CubicLaw};
pub use error::{SolverError, SolverResult};
pub use network::FlowNetwork;
pub use problem::{BoundaryConditions, EssentialBc, PointSources};
pub use solve::solve_pressure;
pub use state::FlowState;
