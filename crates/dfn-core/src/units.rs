// dfn-core/src/units.rs

use uom::si::f64::{
    DiffusionCoefficient as UomDiffusivity, DynamicViscosity as UomDynamicViscosity,
    MassDensity as UomMassDensity, SpecificHeatCapacity as UomSpecificHeatCapacity,
    ThermalConductivity as UomThermalConductivity,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type Diffusivity = UomDiffusivity;
pub type DynVisc = UomDynamicViscosity;
pub type SpecHeatCapacity = UomSpecificHeatCapacity;
pub type ThermalCond = UomThermalConductivity;

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn pa_s(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

#[inline]
pub fn j_per_kg_k(v: f64) -> SpecHeatCapacity {
    use uom::si::specific_heat_capacity::joule_per_kilogram_kelvin;
    SpecHeatCapacity::new::<joule_per_kilogram_kelvin>(v)
}

#[inline]
pub fn w_per_m_k(v: f64) -> ThermalCond {
    use uom::si::thermal_conductivity::watt_per_meter_kelvin;
    ThermalCond::new::<watt_per_meter_kelvin>(v)
}

#[inline]
pub fn m2ps(v: f64) -> Diffusivity {
    use uom::si::diffusion_coefficient::square_meter_per_second;
    Diffusivity::new::<square_meter_per_second>(v)
}

pub mod constants {
    /// Seconds in a Julian year.
    pub const SECONDS_PER_YEAR: f64 = 86_400.0 * 365.25;
}
