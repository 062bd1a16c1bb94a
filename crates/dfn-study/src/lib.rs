//! dfn-study: Monte Carlo studies of aperture uncertainty.
//!
//! Apertures of a fracture network are rarely known. These studies resample
//! every segment width from a log-normal distribution, re-solve the network
//! for each sample and summarise the spread of the result:
//!
//! - `ApertureStudy`: dimensionless temperature at one point of one segment
//! - `FlowSplitStudy`: fraction of flow taking one of two parallel branches
//!
//! Simulations run in parallel (rayon), each on its own copy of the network
//! with its own RNG seeded from the study seed and the simulation index, so
//! results do not depend on the number of threads.

pub mod aperture;
pub mod error;
pub mod flow_split;
pub mod sampling;
pub mod stats;

pub use aperture::{ApertureOutcome, ApertureStudy};
pub use error::{StudyError, StudyResult};
pub use flow_split::{FlowSplitOutcome, FlowSplitStudy};
pub use sampling::ApertureSampling;
pub use stats::Percentiles;
