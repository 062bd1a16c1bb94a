//! Case validation.
//!
//! Everything here is checked before any numerical work: geometry, fluid,
//! node and segment references, query grids and study settings.

use crate::schema::{CaseDef, FluidDef, StudyDef, TemperatureQueryDef};
use dfn_fluids::{Fluid, FluidError};
use dfn_network::{NetworkError, NetworkTopology};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Network: {0}")]
    Network(#[from] NetworkError),

    #[error("Fluid: {0}")]
    Fluid(#[from] FluidError),

    #[error("Missing reference: {kind} {index} in {context}")]
    MissingReference {
        kind: &'static str,
        index: usize,
        context: String,
    },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: f64,
        reason: &'static str,
    },

    #[error("Section '{section}' is required by {needed_by}")]
    MissingSection {
        section: &'static str,
        needed_by: &'static str,
    },

    #[error("Nodes {nodes:?} have both a fixed pressure and a point source")]
    ConflictingNodes { nodes: Vec<usize> },

    #[error("At least one essential boundary condition is required")]
    NoEssentialBc,
}

pub fn validate_case(case: &CaseDef) -> Result<(), ValidationError> {
    let topology = NetworkTopology::new(
        case.network.connectivity.clone(),
        case.network.length.clone(),
        case.network.thickness.clone(),
        case.network.width.clone(),
    )?;
    let fluid = validate_fluid(&case.fluid)?;

    if case.flow.essential_bc.is_empty() {
        return Err(ValidationError::NoEssentialBc);
    }
    for (context, nodes) in [
        ("essential_bc", &case.flow.essential_bc),
        ("point_sources", &case.flow.point_sources),
    ] {
        for (&node, &value) in nodes {
            node_exists(&topology, node, context)?;
            finite(&format!("{context}[{node}]"), value)?;
        }
    }
    let conflicts: Vec<usize> = case
        .flow
        .essential_bc
        .keys()
        .filter(|n| case.flow.point_sources.contains_key(n))
        .copied()
        .collect();
    if !conflicts.is_empty() {
        return Err(ValidationError::ConflictingNodes { nodes: conflicts });
    }

    if let Some(thermal) = &case.thermal {
        positive("thermal.thermal_cond", thermal.thermal_cond)?;
        positive("thermal.thermal_diff", thermal.thermal_diff)?;
    }

    let thermal_needed = if !case.temperature.is_empty() {
        Some("temperature")
    } else if case.study.is_some() {
        Some("study")
    } else {
        None
    };
    if let Some(needed_by) = thermal_needed {
        if case.thermal.is_none() {
            return Err(ValidationError::MissingSection {
                section: "thermal",
                needed_by,
            });
        }
        fluid.require_heat_capacity()?;
    }

    for (i, query) in case.temperature.iter().enumerate() {
        validate_query(&topology, i, query)?;
    }
    if let Some(study) = &case.study {
        validate_study(&topology, study)?;
    }

    Ok(())
}

fn validate_fluid(def: &FluidDef) -> Result<Fluid, ValidationError> {
    let fluid = Fluid::from(def);
    fluid.validate()?;
    Ok(fluid)
}

fn validate_query(
    topology: &NetworkTopology,
    i: usize,
    query: &TemperatureQueryDef,
) -> Result<(), ValidationError> {
    let context = format!("temperature[{i}]");
    segment_exists(topology, query.segment, &context)?;
    for (j, &z) in query.distance.iter().enumerate() {
        non_negative(&format!("{context}.distance[{j}]"), z)?;
    }
    for (j, &t) in query.time.iter().enumerate() {
        positive(&format!("{context}.time[{j}]"), t)?;
    }
    Ok(())
}

fn validate_study(topology: &NetworkTopology, study: &StudyDef) -> Result<(), ValidationError> {
    segment_exists(topology, study.segment, "study")?;
    non_negative("study.distance", study.distance)?;
    positive("study.time", study.time)?;
    positive("study.mean_width", study.mean_width)?;
    if study.n_sims == 0 {
        return Err(ValidationError::InvalidValue {
            field: "study.n_sims".to_string(),
            value: 0.0,
            reason: "must be at least 1",
        });
    }
    if study.relative_sigma.is_empty() {
        return Err(ValidationError::MissingSection {
            section: "study.relative_sigma",
            needed_by: "study",
        });
    }
    for (j, &s) in study.relative_sigma.iter().enumerate() {
        non_negative(&format!("study.relative_sigma[{j}]"), s)?;
    }
    Ok(())
}

fn node_exists(topology: &NetworkTopology, node: usize, context: &str) -> Result<(), ValidationError> {
    if node < topology.n_nodes() {
        Ok(())
    } else {
        Err(ValidationError::MissingReference {
            kind: "node",
            index: node,
            context: context.to_string(),
        })
    }
}

fn segment_exists(topology: &NetworkTopology, segment: usize, context: &str) -> Result<(), ValidationError> {
    if segment < topology.n_segments() {
        Ok(())
    } else {
        Err(ValidationError::MissingReference {
            kind: "segment",
            index: segment,
            context: context.to_string(),
        })
    }
}

fn check(field: &str, value: f64, ok: bool, reason: &'static str) -> Result<(), ValidationError> {
    if value.is_finite() && ok {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value,
            reason,
        })
    }
}

fn finite(field: &str, value: f64) -> Result<(), ValidationError> {
    check(field, value, true, "must be finite")
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    check(field, value, value > 0.0, "must be positive")
}

fn non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    check(field, value, value >= 0.0, "must not be negative")
}
