//! Plane-facet intersection. Every triangle/plane topology funnels into one
//! of three per-edge outcomes, and the per-facet combination keeps only the
//! clean two-point cuts; vertex-only touches and other degenerate point
//! counts produce nothing.

use crate::{
    geometry::{round, Point, Segment},
    mesh::Facet,
};

/// How one edge meets the plane `z = level`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeCrossing {
    /// The edge lies in the plane; both endpoints are on the contour.
    InPlane(Point, Point),
    /// The edge pierces the plane at a single point.
    Transversal(Point),
    /// The edge does not reach the plane within its span.
    Miss,
}

/// Intersect one edge with a horizontal plane.
pub fn intersect_edge(edge: &Segment, level: f64) -> EdgeCrossing {
    let displacement = edge.displacement();

    // A z-constant edge either lies on the plane or misses it entirely.
    if round(displacement.z) == 0.0 {
        return if edge.q.z() == round(level) {
            EdgeCrossing::InPlane(edge.p, edge.q)
        } else {
            EdgeCrossing::Miss
        };
    }

    let t = (level - edge.p.z()) / displacement.z;
    if !(0.0..=1.0).contains(&t) {
        return EdgeCrossing::Miss;
    }

    EdgeCrossing::Transversal(Point::from_pos(edge.p.pos() + t * displacement))
}

/// Intersect a whole facet with a horizontal plane, returning the boundary
/// segment it contributes, if any.
///
/// Facets whose normal has no horizontal component (horizontal walls,
/// coplanar caps) are excluded outright: they cannot bound a fillable
/// region on the slicing plane.
pub fn intersect_facet(facet: &Facet, level: f64) -> Option<Segment> {
    let normal = facet.normal();
    if round(normal.x) == 0.0 && round(normal.y) == 0.0 {
        return None;
    }

    let mut points: Vec<Point> = Vec::new();
    for edge in facet.edges() {
        match intersect_edge(&edge, level) {
            EdgeCrossing::InPlane(p, q) => {
                push_unique(&mut points, p);
                push_unique(&mut points, q);
            }
            EdgeCrossing::Transversal(p) => push_unique(&mut points, p),
            EdgeCrossing::Miss => {}
        }
    }

    // Exactly two distinct points is the only usable outcome. One point is
    // a vertex touch, three or more is a degenerate coincidence.
    match points.as_slice() {
        &[p, q] => Some(Segment::with_normal(p, q, normal)),
        _ => None,
    }
}

fn push_unique(points: &mut Vec<Point>, point: Point) {
    if !points.contains(&point) {
        points.push(point);
    }
}

#[cfg(test)]
mod tests {
    use super::{intersect_edge, intersect_facet, EdgeCrossing};
    use crate::{
        geometry::{Point, Segment},
        mesh::Facet,
        Pos,
    };

    fn segment(p: (f64, f64, f64), q: (f64, f64, f64)) -> Segment {
        Segment::new(Point::new(p.0, p.1, p.2), Point::new(q.0, q.1, q.2))
    }

    #[test]
    fn edge_on_plane_contributes_both_endpoints() {
        let edge = segment((1.0, 0.0, 0.0), (2.0, 0.0, 0.0));
        assert_eq!(
            intersect_edge(&edge, 0.0),
            EdgeCrossing::InPlane(edge.p, edge.q)
        );
    }

    #[test]
    fn edge_parallel_off_plane_misses() {
        let edge = segment((1.0, 0.0, 0.0), (2.0, 0.0, 0.0));
        assert_eq!(intersect_edge(&edge, 1.0), EdgeCrossing::Miss);
    }

    #[test]
    fn transversal_crossing_yields_one_point() {
        let edge = segment((1.0, 0.0, 0.0), (1.0, 0.0, 1.0));
        assert_eq!(
            intersect_edge(&edge, 0.5),
            EdgeCrossing::Transversal(Point::new(1.0, 0.0, 0.5))
        );
    }

    #[test]
    fn crossing_at_an_endpoint_counts() {
        let edge = segment((1.0, 0.0, 0.0), (1.0, 0.0, 1.0));
        assert_eq!(
            intersect_edge(&edge, 1.0),
            EdgeCrossing::Transversal(Point::new(1.0, 0.0, 1.0))
        );
    }

    #[test]
    fn edge_out_of_span_misses() {
        let edge = segment((1.0, 0.0, 0.0), (1.0, 0.0, 1.0));
        assert_eq!(intersect_edge(&edge, 2.0), EdgeCrossing::Miss);
    }

    fn wall_facet() -> Facet {
        // Vertical wall triangle on x = 1, outward normal +x.
        Facet::new(
            [
                Point::new(1.0, 0.0, 0.0),
                Point::new(1.0, 1.0, 0.0),
                Point::new(1.0, 0.0, 1.0),
            ],
            Pos::new(1.0, 0.0, 0.0),
        )
    }

    #[test]
    fn split_facet_yields_one_segment() {
        let segment = intersect_facet(&wall_facet(), 0.5).unwrap();
        assert_eq!(segment.p, Point::new(1.0, 0.5, 0.5));
        assert_eq!(segment.q, Point::new(1.0, 0.0, 0.5));
        assert_eq!(segment.normal, Some(Pos::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn vertex_touch_yields_nothing() {
        // Plane through the single apex vertex at z = 1.
        assert_eq!(intersect_facet(&wall_facet(), 1.0), None);
    }

    #[test]
    fn miss_yields_nothing() {
        assert_eq!(intersect_facet(&wall_facet(), 2.0), None);
    }

    #[test]
    fn coplanar_facet_is_excluded() {
        let cap = Facet::new(
            [
                Point::new(0.0, 0.0, 0.0),
                Point::new(1.0, 0.0, 0.0),
                Point::new(0.0, 1.0, 0.0),
            ],
            Pos::new(0.0, 0.0, 1.0),
        );
        assert_eq!(intersect_facet(&cap, 0.0), None);
    }

    #[test]
    fn in_plane_edge_merges_with_endpoint_crossings() {
        // The bottom edge lies on the plane; the other two edges cross at
        // its endpoints. Dedup must leave exactly the two edge ends.
        let facet = Facet::new(
            [
                Point::new(1.0, 0.0, 0.0),
                Point::new(1.0, 1.0, 0.0),
                Point::new(1.0, 0.5, 1.0),
            ],
            Pos::new(1.0, 0.0, 0.0),
        );

        let segment = intersect_facet(&facet, 0.0).unwrap();
        assert_eq!(
            segment,
            Segment::new(Point::new(1.0, 0.0, 0.0), Point::new(1.0, 1.0, 0.0))
        );
    }
}
