//! dfn-network: topology and geometry of a discrete fracture network.
//!
//! Provides:
//! - `NetworkTopology`: segment connectivity plus length, thickness and width
//! - `NetworkBuilder`: incremental construction with validation on `build()`
//!
//! # Example
//!
//! ```
//! use dfn_network::NetworkBuilder;
//!
//! let mut builder = NetworkBuilder::new();
//! builder.add_segment(0, 1, 100.0, 500.0, 1e-3);
//! builder.add_segment(1, 2, 500.0, 500.0, 1e-3);
//! let network = builder.build().unwrap();
//!
//! assert_eq!(network.n_nodes(), 3);
//! assert_eq!(network.n_segments(), 2);
//! ```

pub mod builder;
pub mod error;
pub mod topology;
pub(crate) mod validate;

pub use builder::NetworkBuilder;
pub use error::{NetworkError, NetworkResult};
pub use topology::{NetworkTopology, Segment};
