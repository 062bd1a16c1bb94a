//! Fluid value object.

use crate::error::{FluidError, FluidResult};
use dfn_core::units::{Density, DynVisc, SpecHeatCapacity};

/// Fluid injected into the fracture network.
///
/// All values are SI: density in kg/m³, dynamic viscosity in Pa·s and
/// specific heat capacity in J/(kg·K). The heat capacity is only needed for
/// thermal calculations and may be left out for flow-only work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fluid {
    pub density: f64,
    pub viscosity: f64,
    pub heat_capacity: Option<f64>,
}

impl Fluid {
    /// Create a fluid without a heat capacity.
    pub fn new(density: f64, viscosity: f64) -> Self {
        Self {
            density,
            viscosity,
            heat_capacity: None,
        }
    }

    pub fn with_heat_capacity(mut self, heat_capacity: f64) -> Self {
        self.heat_capacity = Some(heat_capacity);
        self
    }

    /// Create a fluid from unit-checked quantities.
    pub fn from_quantities(
        density: Density,
        viscosity: DynVisc,
        heat_capacity: Option<SpecHeatCapacity>,
    ) -> Self {
        Self {
            density: density.value,
            viscosity: viscosity.value,
            heat_capacity: heat_capacity.map(|c| c.value),
        }
    }

    /// Check that density and viscosity (and heat capacity, if present) are
    /// finite and strictly positive.
    pub fn validate(&self) -> FluidResult<()> {
        positive(self.density, "density")?;
        positive(self.viscosity, "viscosity")?;
        if let Some(c) = self.heat_capacity {
            positive(c, "heat capacity")?;
        }
        Ok(())
    }

    /// Heat capacity, or an error if the fluid was built for flow only.
    pub fn require_heat_capacity(&self) -> FluidResult<f64> {
        let c = self.heat_capacity.ok_or(FluidError::MissingProperty {
            what: "heat capacity",
        })?;
        positive(c, "heat capacity")
    }
}

fn positive(value: f64, what: &'static str) -> FluidResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FluidError::NonPhysical { what, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dfn_core::units::{j_per_kg_k, kg_per_m3, pa_s};

    #[test]
    fn heat_capacity_defaults_to_none() {
        let fluid = Fluid::new(1.0, 2.0);
        assert_eq!(fluid.density, 1.0);
        assert_eq!(fluid.viscosity, 2.0);
        assert!(fluid.heat_capacity.is_none());
        assert_eq!(
            fluid.require_heat_capacity(),
            Err(FluidError::MissingProperty {
                what: "heat capacity"
            })
        );
    }

    #[test]
    fn heat_capacity_attr() {
        let fluid = Fluid::new(1.0, 2.0).with_heat_capacity(3.0);
        assert_eq!(fluid.require_heat_capacity(), Ok(3.0));
    }

    #[test]
    fn from_quantities_matches_raw() {
        let fluid = Fluid::from_quantities(
            kg_per_m3(1000.0),
            pa_s(1e-3),
            Some(j_per_kg_k(4300.0)),
        );
        assert_eq!(fluid, Fluid::new(1000.0, 1e-3).with_heat_capacity(4300.0));
    }

    #[test]
    fn validate_rejects_non_physical() {
        assert!(Fluid::new(1000.0, 1e-3).validate().is_ok());
        assert!(matches!(
            Fluid::new(0.0, 1e-3).validate(),
            Err(FluidError::NonPhysical { what: "density", .. })
        ));
        assert!(matches!(
            Fluid::new(1000.0, f64::NAN).validate(),
            Err(FluidError::NonPhysical {
                what: "viscosity",
                ..
            })
        ));
        assert!(
            Fluid::new(1000.0, 1e-3)
                .with_heat_capacity(-1.0)
                .validate()
                .is_err()
        );
    }
}
