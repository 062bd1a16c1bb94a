//! dfn-thermal: analytical thermal breakthrough in a fracture network.
//!
//! Fluid enters the network cold and is heated by conduction from the rock
//! matrix around each segment. For a single segment the dimensionless outlet
//! temperature is `erf(xi)`, with `xi` a similarity variable growing with
//! segment length and shrinking with time. A branching network is handled
//! by superposing that solution over every flow path from the injection
//! nodes, each path weighted by the fraction of flow that follows it.
//!
//! `ThermalNetwork` wraps a `FlowNetwork`: flow is solved first, then the
//! temperature of any segment can be queried on a grid of times and
//! distances.

pub mod error;
pub mod network;
pub mod properties;
pub mod temperature;

pub use error::{ThermalError, ThermalResult};
pub use network::ThermalNetwork;
pub use properties::ThermalProperties;
pub use temperature::{Superposition, mass_contribution};
