use ordered_float::OrderedFloat;

use crate::{
    geometry::{Point, Segment},
    Pos,
};

/// A closed contour on one slicing plane. Edge `i` connects point `i` to
/// point `i + 1`, with the last point wrapping back to the first. `fill`
/// marks whether the contour bounds solid material or a hole.
///
/// Only reconstruction builds these; the point order is canonicalized
/// clockwise around the centroid on construction and never changes after.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
    fill: bool,
}

impl Polygon {
    pub(crate) fn new(mut points: Vec<Point>, fill: bool) -> Self {
        let center = centroid(&points);
        points.sort_by_key(|point| {
            let delta = point.pos() - center;
            OrderedFloat(-delta.y.atan2(delta.x))
        });

        Self { points, fill }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn fill(&self) -> bool {
        self.fill
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn centroid(&self) -> Pos {
        centroid(&self.points)
    }

    /// The contour's edges in point order, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let count = self.points.len();
        (0..count).map(move |i| Segment::new(self.points[i], self.points[(i + 1) % count]))
    }
}

/// Arithmetic mean of a point set.
pub fn centroid(points: &[Point]) -> Pos {
    let sum = points
        .iter()
        .fold(Pos::zeros(), |total, point| total + point.pos());
    sum / points.len().max(1) as f64
}

#[cfg(test)]
mod tests {
    use super::Polygon;
    use crate::geometry::Point;

    #[test]
    fn points_are_ordered_clockwise_from_largest_angle() {
        let square = Polygon::new(
            vec![
                Point::new(1.0, -1.0, 0.0),
                Point::new(-1.0, 1.0, 0.0),
                Point::new(-1.0, -1.0, 0.0),
                Point::new(1.0, 1.0, 0.0),
            ],
            true,
        );

        assert_eq!(
            square.points(),
            &[
                Point::new(-1.0, 1.0, 0.0),
                Point::new(1.0, 1.0, 0.0),
                Point::new(1.0, -1.0, 0.0),
                Point::new(-1.0, -1.0, 0.0),
            ]
        );
    }

    #[test]
    fn edges_close_the_loop() {
        let triangle = Polygon::new(
            vec![
                Point::new(0.0, 0.0, 0.0),
                Point::new(1.0, 0.0, 0.0),
                Point::new(0.0, 1.0, 0.0),
            ],
            true,
        );

        let edges: Vec<_> = triangle.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2].q, edges[0].p);
    }
}
