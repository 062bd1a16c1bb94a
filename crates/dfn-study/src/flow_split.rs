//! Flow split between two parallel branches under aperture uncertainty.

use rayon::prelude::*;
use tracing::info;

use crate::error::{StudyError, StudyResult};
use crate::sampling::ApertureSampling;
use crate::stats::Percentiles;
use dfn_fluids::Fluid;
use dfn_solver::{ConductanceModel, CubicLaw, EssentialBc, FlowNetwork, PointSources, SolverResult};

/// Fraction `m[a] / (m[a] + m[b])` of the flow through branch `a` of the
/// branch pair `(a, b)`, sampled over random apertures.
#[derive(Debug, Clone)]
pub struct FlowSplitStudy<M: ConductanceModel + Clone = CubicLaw> {
    pub network: FlowNetwork<M>,
    pub fluid: Fluid,
    pub essential_bc: EssentialBc,
    pub point_sources: PointSources,
    pub branches: (usize, usize),
    pub sampling: ApertureSampling,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowSplitOutcome {
    /// Fraction of every simulation, in simulation order
    pub fractions: Vec<f64>,
    pub percentiles: Percentiles,
}

impl<M: ConductanceModel + Clone> FlowSplitStudy<M> {
    pub fn run(&self) -> StudyResult<FlowSplitOutcome> {
        let dist = self.sampling.distribution()?;
        let n_segments = self.network.topology().n_segments();
        let (a, b) = self.branches;
        for segment in [a, b] {
            if segment >= n_segments {
                return Err(StudyError::UnknownSegment {
                    segment,
                    n_segments,
                });
            }
        }

        info!(n_sims = self.sampling.n_sims, branches = ?self.branches, "running flow split study");

        let fractions = (0..self.sampling.n_sims)
            .into_par_iter()
            .map(|sim| {
                let mut network = self.network.clone();
                let width = self.sampling.widths(&dist, sim, n_segments);
                self.simulate(&mut network, width)
                    .map_err(|source| StudyError::Flow { sim, source })
            })
            .collect::<StudyResult<Vec<f64>>>()?;

        let percentiles = Percentiles::from_samples(&fractions).ok_or(StudyError::InvalidParameter {
            what: "flow fraction",
            value: f64::NAN,
        })?;

        Ok(FlowSplitOutcome {
            fractions,
            percentiles,
        })
    }

    fn simulate(&self, network: &mut FlowNetwork<M>, width: Vec<f64>) -> SolverResult<f64> {
        network.set_width(width)?;
        let m = network.calculate_flow(&self.fluid, &self.essential_bc, &self.point_sources, true)?;
        let (a, b) = self.branches;
        Ok(m.mass_flow[a] / (m.mass_flow[a] + m.mass_flow[b]))
    }
}
