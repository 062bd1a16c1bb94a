//! Core topology data structure.

use tracing::debug;

use crate::error::{NetworkError, NetworkResult};
use crate::validate::{validate_connectivity, validate_geometry};

/// Read-only view of one segment of the network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub index: usize,
    pub inlet: usize,
    pub outlet: usize,
    pub length: f64,
    pub thickness: f64,
    pub width: f64,
}

/// Connectivity and geometry of a discrete fracture network.
///
/// Segments are identified by their position in the connectivity list. Each
/// entry is an `(inlet, outlet)` node pair; nodes are implicit and must be
/// numbered densely from 0. The geometry arrays hold one strictly positive
/// value per segment:
/// - `length`: distance between the segment's nodes
/// - `thickness`: extent orthogonal to the network plane
/// - `width`: fracture aperture
///
/// Only the node order of a segment and the geometry values can change after
/// construction, and every change is validated.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkTopology {
    connectivity: Vec<(usize, usize)>,
    length: Vec<f64>,
    thickness: Vec<f64>,
    width: Vec<f64>,
    n_nodes: usize,
}

impl NetworkTopology {
    pub fn new(
        connectivity: Vec<(usize, usize)>,
        length: Vec<f64>,
        thickness: Vec<f64>,
        width: Vec<f64>,
    ) -> NetworkResult<Self> {
        let n_nodes = validate_connectivity(&connectivity)?;
        validate_geometry(
            connectivity.len(),
            [
                ("length", length.as_slice()),
                ("thickness", thickness.as_slice()),
                ("width", width.as_slice()),
            ],
        )?;

        debug!(
            n_segments = connectivity.len(),
            n_nodes, "built fracture network topology"
        );

        Ok(Self {
            connectivity,
            length,
            thickness,
            width,
            n_nodes,
        })
    }

    pub fn n_segments(&self) -> usize {
        self.connectivity.len()
    }

    pub fn n_nodes(&self) -> usize {
        self.n_nodes
    }

    /// `(inlet, outlet)` node pair of every segment.
    pub fn connectivity(&self) -> &[(usize, usize)] {
        &self.connectivity
    }

    pub fn length(&self) -> &[f64] {
        &self.length
    }

    pub fn thickness(&self) -> &[f64] {
        &self.thickness
    }

    pub fn width(&self) -> &[f64] {
        &self.width
    }

    /// Get a segment by index (returns None if out of bounds).
    pub fn segment(&self, index: usize) -> Option<Segment> {
        let (inlet, outlet) = *self.connectivity.get(index)?;
        Some(Segment {
            index,
            inlet,
            outlet,
            length: self.length[index],
            thickness: self.thickness[index],
            width: self.width[index],
        })
    }

    /// Get a segment by index, failing with `SegmentOob`.
    pub fn try_segment(&self, index: usize) -> NetworkResult<Segment> {
        self.segment(index).ok_or(NetworkError::SegmentOob {
            index,
            len: self.n_segments(),
        })
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..self.n_segments()).filter_map(|i| self.segment(i))
    }

    /// Indices of all segments whose outlet is `node`.
    pub fn segments_into(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.connectivity
            .iter()
            .enumerate()
            .filter(move |(_, (_, outlet))| *outlet == node)
            .map(|(i, _)| i)
    }

    /// Replace the aperture of every segment.
    pub fn set_width(&mut self, width: Vec<f64>) -> NetworkResult<()> {
        validate_geometry(
            self.n_segments(),
            [
                ("length", self.length.as_slice()),
                ("thickness", self.thickness.as_slice()),
                ("width", width.as_slice()),
            ],
        )?;
        self.width = width;
        Ok(())
    }

    pub fn set_length(&mut self, length: Vec<f64>) -> NetworkResult<()> {
        validate_geometry(
            self.n_segments(),
            [
                ("length", length.as_slice()),
                ("thickness", self.thickness.as_slice()),
                ("width", self.width.as_slice()),
            ],
        )?;
        self.length = length;
        Ok(())
    }

    pub fn set_thickness(&mut self, thickness: Vec<f64>) -> NetworkResult<()> {
        validate_geometry(
            self.n_segments(),
            [
                ("length", self.length.as_slice()),
                ("thickness", thickness.as_slice()),
                ("width", self.width.as_slice()),
            ],
        )?;
        self.thickness = thickness;
        Ok(())
    }

    /// Return a copy with the inlet and outlet swapped for the given segments.
    ///
    /// The node set, geometry and segment order are unchanged.
    pub fn with_reversed(&self, segments: &[usize]) -> NetworkResult<Self> {
        let mut reversed = self.clone();
        for &index in segments {
            let pair = reversed
                .connectivity
                .get_mut(index)
                .ok_or(NetworkError::SegmentOob {
                    index,
                    len: self.n_segments(),
                })?;
            *pair = (pair.1, pair.0);
        }
        Ok(reversed)
    }
}
