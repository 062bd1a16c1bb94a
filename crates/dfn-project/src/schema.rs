//! Case document schema.
//!
//! Field names follow the constructor arguments of the library types, so a
//! document reads like the call it stands for.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FluidDef {
    pub density: f64,
    pub viscosity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heat_capacity: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkDef {
    /// `[inlet, outlet]` node pair of every segment
    pub connectivity: Vec<(usize, usize)>,
    pub length: Vec<f64>,
    pub thickness: Vec<f64>,
    pub width: Vec<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ThermalDef {
    pub thermal_cond: f64,
    pub thermal_diff: f64,
}

/// Network and rock properties in one document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThermalNetworkDef {
    #[serde(flatten)]
    pub network: NetworkDef,
    #[serde(flatten)]
    pub thermal: ThermalDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowDef {
    /// Node -> fixed pressure (Pa)
    pub essential_bc: BTreeMap<usize, f64>,
    /// Node -> imposed mass rate (kg/s), negative for extraction
    #[serde(default)]
    pub point_sources: BTreeMap<usize, f64>,
    #[serde(default)]
    pub correct: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemperatureQueryDef {
    pub segment: usize,
    /// Distances from the segment inlet (m)
    pub distance: Vec<f64>,
    /// Times since start of operation (s)
    pub time: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudyDef {
    pub segment: usize,
    pub distance: f64,
    pub time: f64,
    pub mean_width: f64,
    /// One study per relative standard deviation of the aperture
    pub relative_sigma: Vec<f64>,
    pub n_sims: usize,
    #[serde(default)]
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseDef {
    pub name: String,
    pub fluid: FluidDef,
    pub network: NetworkDef,
    pub flow: FlowDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thermal: Option<ThermalDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub temperature: Vec<TemperatureQueryDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub study: Option<StudyDef>,
}
