//! Log-normal aperture sampling.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, LogNormal};

use crate::error::{StudyError, StudyResult};

/// Monte Carlo settings shared by the aperture studies.
///
/// Widths are drawn from a log-normal distribution with mean `mean_width`
/// and standard deviation `relative_sigma * mean_width`. The underlying
/// normal has `mu = ln(w0 / sqrt(1 + s^2))` and `var = ln(1 + s^2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApertureSampling {
    pub mean_width: f64,
    pub relative_sigma: f64,
    pub n_sims: usize,
    pub seed: u64,
}

impl ApertureSampling {
    pub fn new(mean_width: f64, relative_sigma: f64, n_sims: usize, seed: u64) -> Self {
        Self {
            mean_width,
            relative_sigma,
            n_sims,
            seed,
        }
    }

    pub fn with_relative_sigma(self, relative_sigma: f64) -> Self {
        Self {
            relative_sigma,
            ..self
        }
    }

    pub fn validate(&self) -> StudyResult<()> {
        if !(self.mean_width.is_finite() && self.mean_width > 0.0) {
            return Err(StudyError::InvalidParameter {
                what: "mean width",
                value: self.mean_width,
            });
        }
        if !(self.relative_sigma.is_finite() && self.relative_sigma >= 0.0) {
            return Err(StudyError::InvalidParameter {
                what: "relative sigma",
                value: self.relative_sigma,
            });
        }
        if self.n_sims == 0 {
            return Err(StudyError::NoSimulations);
        }
        Ok(())
    }

    /// Mean of the underlying normal distribution.
    pub fn mu(&self) -> f64 {
        (self.mean_width / (1.0 + self.relative_sigma.powi(2)).sqrt()).ln()
    }

    /// Standard deviation of the underlying normal distribution.
    pub fn sigma(&self) -> f64 {
        (1.0 + self.relative_sigma.powi(2)).ln().sqrt()
    }

    pub fn distribution(&self) -> StudyResult<LogNormal<f64>> {
        self.validate()?;
        LogNormal::new(self.mu(), self.sigma()).map_err(|_| StudyError::InvalidParameter {
            what: "relative sigma",
            value: self.relative_sigma,
        })
    }

    /// RNG of simulation `sim`, independent of which thread runs it.
    pub fn rng(&self, sim: usize) -> StdRng {
        StdRng::seed_from_u64(self.seed.wrapping_add(sim as u64))
    }

    /// Widths for `n_segments` segments drawn for simulation `sim`.
    pub fn widths(&self, dist: &LogNormal<f64>, sim: usize, n_segments: usize) -> Vec<f64> {
        let mut rng = self.rng(sim);
        (0..n_segments).map(|_| dist.sample(&mut rng)).collect()
    }
}
