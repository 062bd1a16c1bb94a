//! Thermal performance under aperture uncertainty.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{StudyError, StudyResult};
use crate::sampling::ApertureSampling;
use crate::stats::Percentiles;
use dfn_fluids::Fluid;
use dfn_solver::{ConductanceModel, CubicLaw, EssentialBc, PointSources};
use dfn_thermal::ThermalNetwork;

/// Temperature of one point of one segment, sampled over random apertures.
///
/// Each simulation resamples every width, solves the flow with direction
/// correction and evaluates the temperature of `segment` at
/// (`distance`, `time`).
#[derive(Debug, Clone)]
pub struct ApertureStudy<M: ConductanceModel + Clone = CubicLaw> {
    pub network: ThermalNetwork<M>,
    pub fluid: Fluid,
    pub essential_bc: EssentialBc,
    pub point_sources: PointSources,
    pub segment: usize,
    pub distance: f64,
    pub time: f64,
    pub sampling: ApertureSampling,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApertureOutcome {
    pub relative_sigma: f64,
    /// Dimensionless temperature of every simulation, in simulation order
    pub samples: Vec<f64>,
    pub percentiles: Percentiles,
}

impl<M: ConductanceModel + Clone> ApertureStudy<M> {
    pub fn run(&self) -> StudyResult<ApertureOutcome> {
        self.run_with(&self.sampling)
    }

    /// Run the study once for each relative standard deviation.
    pub fn sweep(&self, relative_sigmas: &[f64]) -> StudyResult<Vec<ApertureOutcome>> {
        relative_sigmas
            .iter()
            .map(|&s| self.run_with(&self.sampling.with_relative_sigma(s)))
            .collect()
    }

    fn run_with(&self, sampling: &ApertureSampling) -> StudyResult<ApertureOutcome> {
        let dist = sampling.distribution()?;
        let n_segments = self.network.topology().n_segments();
        if self.segment >= n_segments {
            return Err(StudyError::UnknownSegment {
                segment: self.segment,
                n_segments,
            });
        }

        info!(
            n_sims = sampling.n_sims,
            relative_sigma = sampling.relative_sigma,
            segment = self.segment,
            "running aperture study"
        );

        let samples = (0..sampling.n_sims)
            .into_par_iter()
            .map(|sim| {
                let mut network = self.network.clone();
                let width = sampling.widths(&dist, sim, n_segments);
                self.simulate(&mut network, width)
                    .map_err(|source| StudyError::Thermal { sim, source })
            })
            .collect::<StudyResult<Vec<f64>>>()?;

        let percentiles = Percentiles::from_samples(&samples).ok_or(StudyError::InvalidParameter {
            what: "temperature sample",
            value: f64::NAN,
        })?;
        debug!(p25 = percentiles.p25, p50 = percentiles.p50, p75 = percentiles.p75, "aperture study done");

        Ok(ApertureOutcome {
            relative_sigma: sampling.relative_sigma,
            samples,
            percentiles,
        })
    }

    fn simulate(&self, network: &mut ThermalNetwork<M>, width: Vec<f64>) -> dfn_thermal::ThermalResult<f64> {
        network.set_width(width)?;
        network.calculate_flow(&self.fluid, &self.essential_bc, &self.point_sources, true)?;
        let theta = network.calculate_temperature(&self.fluid, self.segment, &[self.distance], &[self.time])?;
        Ok(theta[(0, 0)])
    }
}
