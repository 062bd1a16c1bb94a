//! Flow-split fractions and path superposition of the breakthrough solution.

use libm::erf;
use nalgebra::DMatrix;

use crate::error::{ThermalError, ThermalResult};
use dfn_network::NetworkTopology;

/// Fraction of the flow arriving at each segment's outlet node that the
/// segment itself carries.
///
/// `chi[i] = m[i] / sum(m[j])` over the segments `j` sharing the outlet of
/// `i`, so the fractions of segments merging at one node sum to 1. A segment
/// whose merge carries no flow at all gets 0.
pub fn mass_contribution(topology: &NetworkTopology, mass_flow: &[f64]) -> Vec<f64> {
    let mut inflow = vec![0.0; topology.n_nodes()];
    for (&(_, outlet), &m) in topology.connectivity().iter().zip(mass_flow) {
        inflow[outlet] += m;
    }

    topology
        .connectivity()
        .iter()
        .zip(mass_flow)
        .map(|(&(_, outlet), &m)| {
            let total = inflow[outlet];
            if total == 0.0 { 0.0 } else { m / total }
        })
        .collect()
}

/// Per-segment coefficients of the superposed breakthrough solution.
///
/// `beta[i] = 2 k_r H[i] / (m[i] c_f)`, infinite for a segment without
/// flow; the similarity variable of a whole
/// segment at time `t` is `beta[i] L[i] / (2 sqrt(alpha_r t))`.
#[derive(Debug, Clone)]
pub struct Superposition {
    chi: Vec<f64>,
    beta: Vec<f64>,
    length: Vec<f64>,
    thermal_diff: f64,
}

impl Superposition {
    pub fn new(
        topology: &NetworkTopology,
        mass_flow: &[f64],
        heat_capacity: f64,
        thermal_cond: f64,
        thermal_diff: f64,
    ) -> Self {
        let beta = topology
            .thickness()
            .iter()
            .zip(mass_flow)
            .map(|(&h, &m)| {
                // stagnant segment: fully equilibrated with the rock
                if m == 0.0 {
                    f64::INFINITY
                } else {
                    2.0 * thermal_cond * h / (m * heat_capacity)
                }
            })
            .collect();

        Self {
            chi: mass_contribution(topology, mass_flow),
            beta,
            length: topology.length().to_vec(),
            thermal_diff,
        }
    }

    pub fn chi(&self) -> &[f64] {
        &self.chi
    }

    pub fn beta(&self) -> &[f64] {
        &self.beta
    }

    /// Dimensionless temperature of `segment` on a time x distance grid.
    ///
    /// `paths` are the segment paths from the injection nodes to the inlet of
    /// `segment`. Rows follow `time`, columns follow `distance` (measured
    /// from the segment's inlet). With no upstream path the segment is fed
    /// directly by an injection node and the response is `erf(xi_segment)`.
    pub fn evaluate(
        &self,
        segment: usize,
        paths: &[Vec<usize>],
        distance: &[f64],
        time: &[f64],
    ) -> ThermalResult<DMatrix<f64>> {
        let n_segments = self.beta.len();
        if segment >= n_segments {
            return Err(ThermalError::UnknownSegment {
                segment,
                n_segments,
            });
        }
        check_query("distance", distance, |z| z >= 0.0)?;
        check_query("time", time, |t| t > 0.0)?;

        // (chi product, sum of beta * L) for each path
        let mut weights = Vec::with_capacity(paths.len());
        for path in paths {
            let mut chi_prod = 1.0;
            let mut beta_length = 0.0;
            for &s in path {
                if s >= n_segments {
                    return Err(ThermalError::UnknownSegment {
                        segment: s,
                        n_segments,
                    });
                }
                chi_prod *= self.chi[s];
                beta_length += self.beta[s] * self.length[s];
            }
            weights.push((chi_prod, beta_length));
        }

        let beta_target = self.beta[segment];
        let theta = DMatrix::from_fn(time.len(), distance.len(), |row, col| {
            let denom = 2.0 * (self.thermal_diff * time[row]).sqrt();
            let z = distance[col];
            let xi_segment = if z == 0.0 { 0.0 } else { beta_target * z / denom };

            if weights.is_empty() {
                erf(xi_segment)
            } else {
                weights
                    .iter()
                    .map(|&(chi_prod, beta_length)| chi_prod * erf(beta_length / denom + xi_segment))
                    .sum::<f64>()
            }
        });

        Ok(theta)
    }
}

fn check_query(what: &'static str, values: &[f64], ok: impl Fn(f64) -> bool) -> ThermalResult<()> {
    match values
        .iter()
        .enumerate()
        .find(|&(_, &v)| !(v.is_finite() && ok(v)))
    {
        Some((index, &value)) => Err(ThermalError::InvalidQuery { what, index, value }),
        None => Ok(()),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn pair(split: f64) -> (NetworkTopology, [f64; 4]) {
        let topology = NetworkTopology::new(
            vec![(0, 1), (1, 2), (1, 2), (2, 3)],
            vec![100.0, 500.0, 500.0, 100.0],
            vec![500.0; 4],
            vec![1e-3; 4],
        )
        .unwrap();
        (topology, [1.0, split, 1.0 - split, 1.0])
    }

    proptest! {
        #[test]
        fn fractions_at_merge_sum_to_one(split in 0.01f64..0.99) {
            let (topology, m) = pair(split);
            let chi = mass_contribution(&topology, &m);
            prop_assert!((chi[1] + chi[2] - 1.0).abs() < 1e-12);
        }

        #[test]
        fn theta_bounded_and_monotone_in_distance(
            split in 0.01f64..0.99,
            z in 0.0f64..100.0,
            t in 1e6f64..1e9,
        ) {
            let (topology, m) = pair(split);
            let model = Superposition::new(&topology, &m, 4300.0, 2.9, 1e-6);
            let paths = vec![vec![0, 1], vec![0, 2]];
            let theta = model.evaluate(3, &paths, &[z, z + 1.0], &[t]).unwrap();
            prop_assert!(theta[(0, 0)] >= 0.0 && theta[(0, 0)] <= 1.0 + 1e-12);
            prop_assert!(theta[(0, 1)] >= theta[(0, 0)]);
        }
    }
}
