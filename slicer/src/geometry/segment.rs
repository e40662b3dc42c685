use crate::{
    geometry::{round, Point},
    Pos,
};

/// An unordered pair of endpoints cut from one facet by a slicing plane. The
/// originating facet's normal rides along for fill classification; `None`
/// means the segment was built without a facet attached (hand-assembled
/// pools, merged stubs).
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub p: Point,
    pub q: Point,
    pub normal: Option<Pos>,
}

impl Segment {
    pub fn new(p: Point, q: Point) -> Self {
        Self { p, q, normal: None }
    }

    pub fn with_normal(p: Point, q: Point, normal: Pos) -> Self {
        Self {
            p,
            q,
            normal: Some(normal),
        }
    }

    pub fn displacement(&self) -> Pos {
        self.q - self.p
    }

    pub fn midpoint(&self) -> Pos {
        (self.p.pos() + self.q.pos()) / 2.0
    }

    /// Whether `point` is one of the two endpoints.
    pub fn touches(&self, point: Point) -> bool {
        self.p == point || self.q == point
    }

    /// Whether the two segments share at least one endpoint.
    pub fn is_consecutive(&self, other: &Segment) -> bool {
        other.touches(self.p) || other.touches(self.q)
    }

    /// Proportionality test on the displacement vectors. The ratio basis is
    /// the first axis (x, y, z) with a nonzero component in `other`'s
    /// displacement; a degenerate `other` counts as parallel by convention.
    pub fn is_parallel(&self, other: &Segment) -> bool {
        let a = self.displacement();
        let b = other.displacement();

        let ratio = if round(b.x) != 0.0 {
            a.x / b.x
        } else if round(b.y) != 0.0 {
            a.y / b.y
        } else if round(b.z) != 0.0 {
            a.z / b.z
        } else {
            return true;
        };

        (0..3).all(|axis| round(a[axis] - ratio * b[axis]) == 0.0)
    }

    /// Combine two consecutive collinear segments into one spanning both of
    /// their outer endpoints. The shared endpoint is dropped; a new value is
    /// returned, neither input is touched.
    pub fn merge(&self, other: &Segment) -> Segment {
        let (p, q) = if self.q == other.p {
            (self.p, other.q)
        } else if self.q == other.q {
            (self.p, other.p)
        } else if self.p == other.q {
            (other.p, self.q)
        } else {
            (other.q, self.q)
        };

        Segment {
            p,
            q,
            normal: self.normal.or(other.normal),
        }
    }
}

// Orientation-independent: (p, q) == (q, p). The normal does not take part
// in equality, matching how duplicate segments from adjacent facets are
// collapsed in the pool.
impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        (self.p == other.p && self.q == other.q) || (self.p == other.q && self.q == other.p)
    }
}

impl Eq for Segment {}
