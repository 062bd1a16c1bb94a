//! Conversion of case documents into library types.

use crate::schema::{CaseDef, FluidDef, NetworkDef, ThermalDef, ThermalNetworkDef};
use crate::validate::ValidationError;
use crate::{ProjectError, ProjectResult};
use dfn_fluids::Fluid;
use dfn_network::NetworkTopology;
use dfn_solver::FlowNetwork;
use dfn_study::{ApertureSampling, ApertureStudy};
use dfn_thermal::{ThermalNetwork, ThermalProperties};

impl From<&FluidDef> for Fluid {
    fn from(def: &FluidDef) -> Self {
        let fluid = Fluid::new(def.density, def.viscosity);
        match def.heat_capacity {
            Some(c) => fluid.with_heat_capacity(c),
            None => fluid,
        }
    }
}

impl From<&Fluid> for FluidDef {
    fn from(fluid: &Fluid) -> Self {
        Self {
            density: fluid.density,
            viscosity: fluid.viscosity,
            heat_capacity: fluid.heat_capacity,
        }
    }
}

impl NetworkDef {
    pub fn to_topology(&self) -> ProjectResult<NetworkTopology> {
        let topology = NetworkTopology::new(
            self.connectivity.clone(),
            self.length.clone(),
            self.thickness.clone(),
            self.width.clone(),
        )
        .map_err(ValidationError::from)?;
        Ok(topology)
    }
}

impl From<&NetworkTopology> for NetworkDef {
    fn from(topology: &NetworkTopology) -> Self {
        Self {
            connectivity: topology.connectivity().to_vec(),
            length: topology.length().to_vec(),
            thickness: topology.thickness().to_vec(),
            width: topology.width().to_vec(),
        }
    }
}

impl ThermalDef {
    pub fn to_properties(&self) -> ProjectResult<ThermalProperties> {
        Ok(ThermalProperties::new(self.thermal_cond, self.thermal_diff)?)
    }
}

impl ThermalNetworkDef {
    pub fn to_network(&self) -> ProjectResult<ThermalNetwork> {
        Ok(ThermalNetwork::new(
            self.network.to_topology()?,
            self.thermal.to_properties()?,
        )?)
    }
}

impl CaseDef {
    pub fn fluid(&self) -> Fluid {
        Fluid::from(&self.fluid)
    }

    pub fn flow_network(&self) -> ProjectResult<FlowNetwork> {
        Ok(FlowNetwork::new(self.network.to_topology()?))
    }

    pub fn thermal_network(&self) -> ProjectResult<ThermalNetwork> {
        let thermal = self.thermal.ok_or(ValidationError::MissingSection {
            section: "thermal",
            needed_by: "thermal network",
        })?;
        Ok(ThermalNetwork::new(
            self.network.to_topology()?,
            thermal.to_properties()?,
        )?)
    }

    /// Aperture study for the first relative sigma of the `study` section.
    ///
    /// Use `ApertureStudy::sweep` with `study.relative_sigma` to run them all.
    pub fn aperture_study(&self) -> ProjectResult<ApertureStudy> {
        let Some(def) = &self.study else {
            return Err(ValidationError::MissingSection {
                section: "study",
                needed_by: "aperture study",
            }
            .into());
        };
        let relative_sigma = def.relative_sigma.first().copied().ok_or(ProjectError::Validation(
            ValidationError::MissingSection {
                section: "study.relative_sigma",
                needed_by: "aperture study",
            },
        ))?;

        Ok(ApertureStudy {
            network: self.thermal_network()?,
            fluid: self.fluid(),
            essential_bc: self.flow.essential_bc.clone(),
            point_sources: self.flow.point_sources.clone(),
            segment: def.segment,
            distance: def.distance,
            time: def.time,
            sampling: ApertureSampling::new(def.mean_width, relative_sigma, def.n_sims, def.seed),
        })
    }
}
