//! Boundary conditions and point sources for a flow solve.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{SolverError, SolverResult};
use dfn_network::NetworkTopology;

/// Node index -> fixed pressure (Pa).
pub type EssentialBc = BTreeMap<usize, f64>;

/// Node index -> imposed mass rate (kg/s); negative removes mass, positive injects.
pub type PointSources = BTreeMap<usize, f64>;

/// External conditions imposed on the network for one flow solve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryConditions {
    pub essential: EssentialBc,
    pub sources: PointSources,
}

impl BoundaryConditions {
    pub fn new(essential: EssentialBc, sources: PointSources) -> Self {
        Self { essential, sources }
    }

    /// Imposed source at a node (0 if none).
    pub fn source_at(&self, node: usize) -> f64 {
        self.sources.get(&node).copied().unwrap_or(0.0)
    }

    pub fn is_fixed(&self, node: usize) -> bool {
        self.essential.contains_key(&node)
    }

    /// Validate against a topology before any assembly work.
    ///
    /// Checks, in order: referenced nodes exist, values are finite, no node is
    /// both fixed and a source, and every connected part of the network has a
    /// fixed-pressure node to anchor its pressure level.
    pub fn validate(&self, topology: &NetworkTopology) -> SolverResult<()> {
        let n_nodes = topology.n_nodes();
        for (what, map) in [
            ("Essential boundary condition", &self.essential),
            ("Point source", &self.sources),
        ] {
            for (&node, &value) in map {
                if node >= n_nodes {
                    return Err(SolverError::UnknownNode {
                        what,
                        node,
                        n_nodes,
                    });
                }
                if !value.is_finite() {
                    return Err(SolverError::Numeric {
                        what: format!("{} at node {} is not finite", what, node),
                    });
                }
            }
        }

        let conflicts: Vec<usize> = self
            .essential
            .keys()
            .filter(|node| self.sources.contains_key(node))
            .copied()
            .collect();
        if !conflicts.is_empty() {
            return Err(SolverError::ConflictingNodes { nodes: conflicts });
        }

        let floating = self.floating_nodes(topology);
        if !floating.is_empty() {
            return Err(SolverError::Singular { floating });
        }

        Ok(())
    }

    /// Nodes whose connected part of the network holds no fixed-pressure node.
    fn floating_nodes(&self, topology: &NetworkTopology) -> Vec<usize> {
        let n = topology.n_nodes();
        let mut parent: Vec<usize> = (0..n).collect();

        fn find(parent: &mut [usize], mut x: usize) -> usize {
            while parent[x] != x {
                parent[x] = parent[parent[x]];
                x = parent[x];
            }
            x
        }

        for &(a, b) in topology.connectivity() {
            let ra = find(&mut parent, a);
            let rb = find(&mut parent, b);
            if ra != rb {
                parent[ra] = rb;
            }
        }

        let anchored: BTreeSet<usize> = self
            .essential
            .keys()
            .map(|&node| find(&mut parent, node))
            .collect();

        (0..n)
            .filter(|&node| !anchored.contains(&find(&mut parent, node)))
            .collect()
    }
}
