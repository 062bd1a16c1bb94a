//! dfn-project: case documents for fracture network models.
//!
//! A case bundles the fluid, network geometry, flow conditions and optional
//! thermal properties, temperature queries and aperture study of one model.
//! Documents are YAML (`.yaml`/`.yml`) or JSON (`.json`), chosen by file
//! extension. Single-part documents (a fluid, a network, a thermal network)
//! can be read on their own.

pub mod build;
pub mod schema;
pub mod validate;

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use dfn_core::DfnError;
use dfn_fluids::Fluid;
use dfn_network::NetworkTopology;
use dfn_solver::{FlowNetwork, SolverError};
use dfn_study::StudyError;
use dfn_thermal::{ThermalError, ThermalNetwork};

pub use schema::*;
pub use validate::{ValidationError, validate_case};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported file format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    #[error("Thermal error: {0}")]
    Thermal(#[from] ThermalError),

    #[error("Study error: {0}")]
    Study(#[from] StudyError),
}

impl From<ProjectError> for DfnError {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::Solver(e) => e.into(),
            ProjectError::Thermal(e) => e.into(),
            ProjectError::Study(e) => e.into(),
            other => DfnError::Validation {
                what: other.to_string(),
            },
        }
    }
}

/// Document format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    pub fn from_path(path: &Path) -> ProjectResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => Err(ProjectError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

pub fn read_document<T: DeserializeOwned>(path: &Path) -> ProjectResult<T> {
    let format = Format::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), ?format, "reading document");
    Ok(match format {
        Format::Yaml => serde_yaml::from_str(&content)?,
        Format::Json => serde_json::from_str(&content)?,
    })
}

pub fn write_document<T: Serialize>(path: &Path, value: &T) -> ProjectResult<()> {
    let content = match Format::from_path(path)? {
        Format::Yaml => serde_yaml::to_string(value)?,
        Format::Json => serde_json::to_string_pretty(value)?,
    };
    std::fs::write(path, content)?;
    Ok(())
}

pub fn read_fluid(path: &Path) -> ProjectResult<Fluid> {
    let def: FluidDef = read_document(path)?;
    let fluid = Fluid::from(&def);
    fluid.validate().map_err(ValidationError::from)?;
    Ok(fluid)
}

pub fn read_network(path: &Path) -> ProjectResult<NetworkTopology> {
    read_document::<NetworkDef>(path)?.to_topology()
}

pub fn read_flow_network(path: &Path) -> ProjectResult<FlowNetwork> {
    Ok(FlowNetwork::new(read_network(path)?))
}

pub fn read_thermal_network(path: &Path) -> ProjectResult<ThermalNetwork> {
    read_document::<ThermalNetworkDef>(path)?.to_network()
}

pub fn load_case(path: &Path) -> ProjectResult<CaseDef> {
    let case: CaseDef = read_document(path)?;
    validate_case(&case)?;
    Ok(case)
}

pub fn save_case(path: &Path, case: &CaseDef) -> ProjectResult<()> {
    validate_case(case)?;
    write_document(path, case)
}
