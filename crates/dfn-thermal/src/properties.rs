//! Rock matrix thermal properties.

use crate::error::{ThermalError, ThermalResult};
use dfn_core::units::{Diffusivity, ThermalCond};

/// Thermal conductivity (W/(m·K)) and diffusivity (m²/s) of the rock
/// surrounding the fractures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalProperties {
    pub thermal_cond: f64,
    pub thermal_diff: f64,
}

impl ThermalProperties {
    pub fn new(thermal_cond: f64, thermal_diff: f64) -> ThermalResult<Self> {
        let props = Self {
            thermal_cond,
            thermal_diff,
        };
        props.validate()?;
        Ok(props)
    }

    pub fn from_quantities(thermal_cond: ThermalCond, thermal_diff: Diffusivity) -> ThermalResult<Self> {
        Self::new(thermal_cond.value, thermal_diff.value)
    }

    /// Diffusivity from conductivity, density and heat capacity of the rock.
    pub fn from_rock(thermal_cond: f64, density: f64, heat_capacity: f64) -> ThermalResult<Self> {
        Self::new(thermal_cond, thermal_cond / (density * heat_capacity))
    }

    pub fn validate(&self) -> ThermalResult<()> {
        for (what, value) in [
            ("thermal conductivity", self.thermal_cond),
            ("thermal diffusivity", self.thermal_diff),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ThermalError::NonPhysical { what, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dfn_core::units::{m2ps, w_per_m_k};

    #[test]
    fn granite_like_rock() {
        let props = ThermalProperties::from_rock(2.9, 2700.0, 1050.0).unwrap();
        assert_eq!(props.thermal_diff, 2.9 / (2700.0 * 1050.0));
        assert_eq!(
            ThermalProperties::from_quantities(w_per_m_k(2.9), m2ps(props.thermal_diff)),
            Ok(props)
        );
    }

    #[test]
    fn rejects_non_physical() {
        assert!(matches!(
            ThermalProperties::new(0.0, 1e-6),
            Err(ThermalError::NonPhysical {
                what: "thermal conductivity",
                ..
            })
        ));
        assert!(ThermalProperties::new(2.9, f64::NAN).is_err());
    }
}
