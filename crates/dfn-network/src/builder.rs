//! Incremental network builder.

use crate::error::NetworkResult;
use crate::topology::NetworkTopology;

/// Builder for constructing a network one segment at a time.
///
/// Use `add_segment` to build up the network, then call `build()` to
/// validate and freeze it into a `NetworkTopology`.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    connectivity: Vec<(usize, usize)>,
    length: Vec<f64>,
    thickness: Vec<f64>,
    width: Vec<f64>,
}

impl NetworkBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a segment from `inlet` to `outlet` and return its index.
    pub fn add_segment(
        &mut self,
        inlet: usize,
        outlet: usize,
        length: f64,
        thickness: f64,
        width: f64,
    ) -> usize {
        let index = self.connectivity.len();
        self.connectivity.push((inlet, outlet));
        self.length.push(length);
        self.thickness.push(thickness);
        self.width.push(width);
        index
    }

    /// Validate and build the network.
    pub fn build(self) -> NetworkResult<NetworkTopology> {
        NetworkTopology::new(self.connectivity, self.length, self.thickness, self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NetworkError;

    #[test]
    fn indices_follow_insertion_order() {
        let mut builder = NetworkBuilder::new();
        assert_eq!(builder.add_segment(0, 1, 1.0, 1.0, 1.0), 0);
        assert_eq!(builder.add_segment(1, 2, 1.0, 1.0, 1.0), 1);
        let net = builder.build().unwrap();
        assert_eq!(net.connectivity(), &[(0, 1), (1, 2)]);
    }

    #[test]
    fn build_validates() {
        let mut builder = NetworkBuilder::new();
        builder.add_segment(0, 1, 1.0, 1.0, 0.0);
        assert_eq!(
            builder.build().unwrap_err(),
            NetworkError::NonPositive {
                params: vec!["width"]
            }
        );
    }
}
