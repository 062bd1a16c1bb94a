//! Topology validation logic.

use std::collections::BTreeSet;

use dfn_core::non_positive_indices;

use crate::error::{NetworkError, NetworkResult};

/// Geometry arrays must hold one finite, positive entry per segment.
pub(crate) fn validate_geometry(
    n_segments: usize,
    params: [(&'static str, &[f64]); 3],
) -> NetworkResult<()> {
    let wrong_size: Vec<&'static str> = params
        .iter()
        .filter(|(_, values)| values.len() != n_segments)
        .map(|(name, _)| *name)
        .collect();
    if !wrong_size.is_empty() {
        return Err(NetworkError::SizeMismatch {
            params: wrong_size,
            n_segments,
        });
    }

    let non_positive: Vec<&'static str> = params
        .iter()
        .filter(|(_, values)| !non_positive_indices(values).is_empty())
        .map(|(name, _)| *name)
        .collect();
    if !non_positive.is_empty() {
        return Err(NetworkError::NonPositive {
            params: non_positive,
        });
    }

    Ok(())
}

/// Validate connectivity and return the number of distinct nodes.
///
/// Every id in `0..n_nodes` must be referenced by at least one segment.
pub(crate) fn validate_connectivity(connectivity: &[(usize, usize)]) -> NetworkResult<usize> {
    if connectivity.is_empty() {
        return Err(NetworkError::Empty);
    }

    let mut nodes = BTreeSet::new();
    for (segment, &(inlet, outlet)) in connectivity.iter().enumerate() {
        if inlet == outlet {
            return Err(NetworkError::SelfLoop {
                segment,
                node: inlet,
            });
        }
        nodes.insert(inlet);
        nodes.insert(outlet);
    }

    let n_nodes = nodes.len();
    // BTreeSet is sorted, so dense numbering means the largest id is n_nodes - 1
    let max = nodes.iter().next_back().copied().unwrap_or(0);
    if max + 1 != n_nodes {
        let missing = (0..max).filter(|n| !nodes.contains(n)).collect();
        return Err(NetworkError::SparseNodeNumbering { missing });
    }

    Ok(n_nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_numbering_counts_distinct_nodes() {
        let n = validate_connectivity(&[(0, 1), (1, 2), (1, 2), (2, 3)]).unwrap();
        assert_eq!(n, 4);
    }

    #[test]
    fn sparse_numbering_lists_missing_ids() {
        let err = validate_connectivity(&[(0, 1), (1, 4)]).unwrap_err();
        assert_eq!(
            err,
            NetworkError::SparseNodeNumbering {
                missing: vec![2, 3]
            }
        );
    }

    #[test]
    fn self_loop_rejected() {
        let err = validate_connectivity(&[(0, 1), (1, 1)]).unwrap_err();
        assert_eq!(err, NetworkError::SelfLoop { segment: 1, node: 1 });
    }

    #[test]
    fn geometry_reports_every_bad_parameter() {
        let err = validate_geometry(
            2,
            [
                ("length", &[1.0, 0.0][..]),
                ("thickness", &[1.0, 1.0][..]),
                ("width", &[-1.0, 1.0][..]),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err,
            NetworkError::NonPositive {
                params: vec!["length", "width"]
            }
        );

        let err = validate_geometry(
            2,
            [
                ("length", &[1.0, 1.0][..]),
                ("thickness", &[1.0][..]),
                ("width", &[1.0, 1.0, 1.0][..]),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err,
            NetworkError::SizeMismatch {
                params: vec!["thickness", "width"],
                n_segments: 2
            }
        );
    }
}
