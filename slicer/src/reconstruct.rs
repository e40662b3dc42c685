//! Polygon reconstruction: turns the unordered segment pool for one plane
//! back into closed contours, then classifies each as fill or hole.
//!
//! The pool is a consumable edge multiset; each chain grows by looking for
//! the single unconsumed segment sharing an endpoint with the current edge.
//! Two or more candidates at one endpoint mean the mesh is non-manifold
//! there, which fails the whole plane. Chains that run out of continuations
//! before closing are open polylines and are silently discarded.

use std::f64::consts::FRAC_PI_2;

use nalgebra::Vector2;
use tracing::debug;

use crate::{
    error::{Result, SliceError},
    geometry::{polygon::centroid, Point, Polygon, Segment},
    pool::SegmentPool,
};

/// Reassemble all closed polygons from a segment pool. Fails with
/// [`SliceError::InvalidMesh`] on the first ambiguous junction.
pub fn polygons_from_pool(mut pool: SegmentPool) -> Result<Vec<Polygon>> {
    let mut polygons = Vec::new();

    while let Some(seed) = pool.take_next() {
        if let Some(polygon) = trace_loop(seed, &mut pool)? {
            polygons.push(polygon);
        }
    }

    debug!("reconstructed {} polygon(s)", polygons.len());
    Ok(polygons)
}

/// Grow one chain from `seed` until it closes, dead-ends, or hits an
/// ambiguous junction.
fn trace_loop(seed: Segment, pool: &mut SegmentPool) -> Result<Option<Polygon>> {
    let mut chain: Vec<Segment> = vec![seed];
    let mut current = seed;

    loop {
        let at_p: Vec<usize> = pool.candidates_at(current.p).collect();
        let at_q: Vec<usize> = pool.candidates_at(current.q).collect();

        if at_p.len() > 1 {
            return Err(SliceError::InvalidMesh { vertex: current.p });
        }
        if at_q.len() > 1 {
            return Err(SliceError::InvalidMesh { vertex: current.q });
        }

        // Singular candidates at both ends take the p-side continuation.
        let found = match (at_p.first(), at_q.first()) {
            (Some(&index), _) | (None, Some(&index)) => pool.take(index),
            (None, None) => return Ok(None),
        };

        if current.is_parallel(&found) {
            // Collinear continuation: extend the last committed edge instead
            // of fragmenting the contour.
            let merged = current.merge(&found);
            *chain.last_mut().unwrap() = merged;
            current = merged;
        } else {
            chain.push(found);
            current = found;
        }

        if chain.len() > 2 && current.is_consecutive(&chain[0]) {
            return Ok(close_chain(chain));
        }
    }
}

/// Seal a closed chain into a polygon: merge the seam if it is collinear,
/// extract the corner points in traversal order, classify, canonicalize.
fn close_chain(mut chain: Vec<Segment>) -> Option<Polygon> {
    let last = *chain.last().unwrap();
    if chain.len() > 3 && last.is_parallel(&chain[0]) {
        chain[0] = last.merge(&chain[0]);
        chain.pop();
    }

    let count = chain.len();
    let mut points = Vec::with_capacity(count);
    for index in 0..count {
        let next = &chain[(index + 1) % count];
        if let Some(point) = shared_endpoint(&chain[index], next) {
            points.push(point);
        }
    }

    if points.len() < 3 {
        return None;
    }

    let fill = classify(&chain[0], &points);
    Some(Polygon::new(points, fill))
}

/// The endpoint `a` has in common with `b`, if any.
fn shared_endpoint(a: &Segment, b: &Segment) -> Option<Point> {
    if b.touches(a.q) {
        Some(a.q)
    } else if b.touches(a.p) {
        Some(a.p)
    } else {
        None
    }
}

/// Winding-based fill test. The facet normal behind the contour's first edge
/// points away from solid material; if its horizontal projection points away
/// from the contour's interior (angle to the centroid-to-edge direction
/// under a right angle), the contour bounds fill, otherwise it is a hole.
fn classify(first: &Segment, points: &[Point]) -> bool {
    let Some(normal) = first.normal else {
        return true;
    };

    let reference = Vector2::new(normal.x, normal.y);
    let center = centroid(points);
    let outward = Vector2::new(first.midpoint().x - center.x, first.midpoint().y - center.y);

    let lengths = reference.magnitude() * outward.magnitude();
    if lengths == 0.0 {
        return true;
    }

    let angle = (reference.dot(&outward) / lengths).clamp(-1.0, 1.0).acos();
    angle < FRAC_PI_2
}

#[cfg(test)]
mod tests {
    use super::polygons_from_pool;
    use crate::{
        error::SliceError,
        geometry::{Point, Segment},
        pool::SegmentPool,
    };

    fn segment(p: (f64, f64), q: (f64, f64)) -> Segment {
        Segment::new(Point::new(p.0, p.1, 0.0), Point::new(q.0, q.1, 0.0))
    }

    #[test]
    fn open_polylines_yield_no_polygons() {
        let pool = SegmentPool::from_segments([
            segment((0.0, 0.0), (1.0, 0.0)),
            segment((1.0, 0.0), (2.0, 0.0)),
        ]);
        assert!(polygons_from_pool(pool).unwrap().is_empty());

        let pool = SegmentPool::from_segments([
            segment((0.0, 0.0), (1.0, 0.0)),
            segment((1.0, 0.0), (2.0, 0.0)),
            segment((-1.0, 0.0), (0.0, 0.0)),
        ]);
        assert!(polygons_from_pool(pool).unwrap().is_empty());
    }

    #[test]
    fn closed_triangle_survives_a_stray_segment() {
        let pool = SegmentPool::from_segments([
            segment((0.0, 0.0), (1.0, 0.0)),
            segment((1.0, 0.0), (1.0, 1.0)),
            segment((1.0, 1.0), (0.0, 0.0)),
            segment((-4.0, 0.0), (-2.0, 0.0)),
        ]);

        let polygons = polygons_from_pool(pool).unwrap();
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].len(), 3);
    }

    #[test]
    fn two_loops_among_strays() {
        let pool = SegmentPool::from_segments([
            segment((1.0, -1.0), (2.0, -3.0)),
            segment((4.0, 1.0), (4.0, 2.0)),
            segment((2.0, 1.0), (3.0, 1.0)),
            segment((4.0, 1.0), (3.0, 1.0)),
            segment((3.0, 3.0), (2.0, 4.0)),
            segment((7.0, 0.0), (8.0, 0.0)),
            segment((4.0, 2.0), (3.0, 3.0)),
            segment((2.0, 4.0), (1.0, 3.0)),
            segment((1.0, 3.0), (2.0, 1.0)),
            segment((1.0, -1.0), (2.0, -1.0)),
            segment((2.0, -1.0), (2.0, -3.0)),
            segment((6.0, 0.0), (7.0, 0.0)),
        ]);

        let polygons = polygons_from_pool(pool).unwrap();
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0].len(), 3);
        assert_eq!(polygons[1].len(), 5);
    }

    #[test]
    fn collinear_runs_collapse_to_corners() {
        // A rectangle outline chopped into 22 pieces, several within
        // tolerance of each other. It must come back as 4 corners.
        let z = -0.010_99;
        let pieces = [
            ((-1.846_087, -1.846_087), (-1.846_087, -0.182_797)),
            ((-1.846_087, -0.182_797), (-1.846_087, 1.846_087)),
            ((1.846_087, 1.846_087), (1.846_087, -0.182_797)),
            ((1.846_087, -0.182_797), (1.846_087, -0.377_563)),
            ((1.846_087, -1.846_087), (1.846_087, -1.244_798)),
            ((1.846_087, -1.244_798), (1.846_087, -0.833_369)),
            ((1.846_087, -0.377_563), (1.846_087, -0.729_869)),
            ((1.846_087, -0.833_369), (1.846_087, -0.729_869)),
            ((-1.846_087, 1.846_087), (0.182_797, 1.846_087)),
            ((0.182_797, 1.846_087), (0.423_13, 1.846_087)),
            ((1.846_087, 1.846_087), (1.507_202, 1.846_087)),
            ((0.423_13, 1.846_087), (0.713_859, 1.846_087)),
            ((1.507_202, 1.846_087), (0.713_859, 1.846_087)),
            ((1.846_087, -2.076_021), (-0.182_797, -2.076_021)),
            ((-0.182_797, -2.076_021), (-0.521_682, -2.076_021)),
            ((-1.846_087, -2.076_021), (-1.608_179, -2.076_021)),
            ((-0.521_682, -2.076_021), (-1.315_026, -2.076_021)),
            ((-1.608_179, -2.076_021), (-1.315_026, -2.076_021)),
            ((-1.846_087, -1.846_087), (-1.846_087, -1.972_438)),
            ((-1.846_087, -1.972_438), (-1.846_087, -2.076_021)),
            ((1.846_087, -1.846_087), (1.846_087, -1.949_67)),
            ((1.846_087, -1.949_67), (1.846_087, -2.076_021)),
        ];

        let pool = SegmentPool::from_segments(pieces.map(|(p, q)| {
            Segment::new(Point::new(p.0, p.1, z), Point::new(q.0, q.1, z))
        }));

        let polygons = polygons_from_pool(pool).unwrap();
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].len(), 4);
    }

    #[test]
    fn ambiguous_junction_is_an_invalid_mesh() {
        let pool = SegmentPool::from_segments([
            segment((0.0, 0.0), (1.0, 0.0)),
            segment((1.0, 0.0), (1.0, 1.0)),
            segment((1.0, 0.0), (1.0, -1.0)),
        ]);

        match polygons_from_pool(pool) {
            Err(SliceError::InvalidMesh { vertex }) => {
                assert_eq!(vertex, Point::new(1.0, 0.0, 0.0));
            }
            other => panic!("expected InvalidMesh, got {other:?}"),
        }
    }

    #[test]
    fn disjoint_triangles_reconstruct_in_any_order() {
        let triangles = [
            segment((0.0, 0.0), (1.0, 0.0)),
            segment((1.0, 0.0), (0.0, 1.0)),
            segment((0.0, 1.0), (0.0, 0.0)),
            segment((5.0, 5.0), (6.0, 5.0)),
            segment((6.0, 5.0), (5.0, 6.0)),
            segment((5.0, 6.0), (5.0, 5.0)),
            segment((-3.0, 0.0), (-4.0, 0.0)),
            segment((-4.0, 0.0), (-3.0, 1.0)),
            segment((-3.0, 1.0), (-3.0, 0.0)),
        ];

        let mut reversed = triangles;
        reversed.reverse();
        let interleaved = [
            triangles[0],
            triangles[3],
            triangles[6],
            triangles[1],
            triangles[4],
            triangles[7],
            triangles[2],
            triangles[5],
            triangles[8],
        ];

        for pool in [triangles.to_vec(), reversed.to_vec(), interleaved.to_vec()] {
            let polygons = polygons_from_pool(SegmentPool::from_segments(pool)).unwrap();
            assert_eq!(polygons.len(), 3);
            assert!(polygons.iter().all(|polygon| polygon.len() == 3));
        }
    }
}
