//! dfn-fluids: the fluid flowing through a fracture network.
//!
//! A `Fluid` is a plain value object: density and viscosity feed the
//! hydraulic conductance, the optional heat capacity feeds the thermal model.

pub mod error;
pub mod fluid;

pub use error::{FluidError, FluidResult};
pub use fluid::Fluid;
