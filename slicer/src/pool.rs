//! Per-plane segment pool. All facet contributions for one plane land here,
//! deduplicated, before reconstruction drains them.

use crate::{
    geometry::{round, Point, Segment},
    intersection::intersect_facet,
    mesh::Mesh,
};

/// A flat, duplicate-free set of contour segments for one plane.
///
/// Reconstruction consumes segments by index against a consumed mask; the
/// backing array is never mutated while it is being searched, so there is no
/// iterate-while-removing aliasing to reason about.
#[derive(Debug)]
pub struct SegmentPool {
    segments: Vec<Segment>,
    consumed: Vec<bool>,
}

impl SegmentPool {
    /// Intersect every facet of `mesh` with the plane `z = level` and pool
    /// the resulting segments.
    pub fn build(mesh: &Mesh, level: f64) -> Self {
        let level = round(level);
        Self::from_segments(
            mesh.facets()
                .iter()
                .filter_map(|facet| intersect_facet(facet, level)),
        )
    }

    /// Pool pre-cut segments, dropping exact duplicates (orientation
    /// independent).
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        let mut unique: Vec<Segment> = Vec::new();
        for segment in segments {
            if !unique.contains(&segment) {
                unique.push(segment);
            }
        }

        Self {
            consumed: vec![false; unique.len()],
            segments: unique,
        }
    }

    /// Count of segments originally pooled, consumed or not.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.consumed.iter().filter(|&&taken| !taken).count()
    }

    /// Take the first unconsumed segment, if any, to seed a new chain.
    pub fn take_next(&mut self) -> Option<Segment> {
        let index = self.consumed.iter().position(|&taken| !taken)?;
        Some(self.take(index))
    }

    /// Consume the segment at `index`.
    pub fn take(&mut self, index: usize) -> Segment {
        debug_assert!(!self.consumed[index]);
        self.consumed[index] = true;
        self.segments[index]
    }

    /// Indices of unconsumed segments with an endpoint at `point`.
    pub fn candidates_at(&self, point: Point) -> impl Iterator<Item = usize> + '_ {
        self.segments
            .iter()
            .enumerate()
            .filter(move |&(index, segment)| !self.consumed[index] && segment.touches(point))
            .map(|(index, _)| index)
    }
}
