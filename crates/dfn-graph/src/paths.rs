//! Flow path enumeration.
//!
//! Paths are found in two stages: distinct simple node paths first, then
//! each node path is expanded into every choice of parallel segment at each
//! hop. Keeping the stages apart means a node path is expanded only once no
//! matter how many parallel edges produced it.

use std::collections::BTreeSet;
use std::hash::RandomState;

use petgraph::algo::all_simple_paths;
use petgraph::graph::NodeIndex;
use tracing::debug;

use crate::error::GraphResult;
use crate::graph::FlowGraph;

impl FlowGraph {
    /// Find every segment path from the injection nodes to `target`.
    ///
    /// Each path is the ordered list of segment indices traversed. Paths are
    /// unique and returned in lexicographic order. A target that is itself an
    /// injection node (or unreachable) yields no paths.
    pub fn find_paths(&self, injection_nodes: &[usize], target: usize) -> GraphResult<Vec<Vec<usize>>> {
        self.node_index(target)?;

        let mut node_paths = BTreeSet::new();
        for &source in injection_nodes {
            self.node_index(source)?;
            if source == target {
                continue;
            }
            node_paths.extend(self.simple_node_paths(source, target)?);
        }

        let mut segment_paths = BTreeSet::new();
        for nodes in &node_paths {
            segment_paths.extend(self.expand_segments(nodes)?);
        }

        debug!(
            target,
            node_paths = node_paths.len(),
            segment_paths = segment_paths.len(),
            "enumerated flow paths"
        );

        Ok(segment_paths.into_iter().collect())
    }

    /// Distinct simple (no repeated node) paths from `source` to `target`,
    /// in lexicographic order.
    ///
    /// Parallel segments make the traversal report the same node path more
    /// than once; those repeats are collapsed here.
    pub fn simple_node_paths(&self, source: usize, target: usize) -> GraphResult<Vec<Vec<usize>>> {
        let from = self.node_index(source)?;
        let to = self.node_index(target)?;

        let paths: BTreeSet<Vec<usize>> =
            all_simple_paths::<Vec<NodeIndex>, _, RandomState>(&self.graph, from, to, 0, None)
                .map(|path| path.into_iter().map(|n| n.index()).collect())
                .collect();
        Ok(paths.into_iter().collect())
    }

    /// Cartesian product of the parallel segments at each hop of a node path.
    ///
    /// `[0, 1, 2]` with one segment `0 -> 1` (index 0) and two segments
    /// `1 -> 2` (indices 1 and 2) expands to `[[0, 1], [0, 2]]`.
    fn expand_segments(&self, nodes: &[usize]) -> GraphResult<Vec<Vec<usize>>> {
        let mut paths: Vec<Vec<usize>> = vec![Vec::with_capacity(nodes.len().saturating_sub(1))];
        for hop in nodes.windows(2) {
            let choices = self.segments_between(hop[0], hop[1])?;
            paths = paths
                .iter()
                .flat_map(|prefix| {
                    choices.iter().map(move |&segment| {
                        let mut path = prefix.clone();
                        path.push(segment);
                        path
                    })
                })
                .collect();
        }
        Ok(paths)
    }
}
