use crate::{
    geometry::{Point, Segment},
    Pos,
};

/// One triangular face with its outward normal, as read from the mesh file.
#[derive(Debug, Clone, Copy)]
pub struct Facet {
    vertices: [Point; 3],
    normal: Pos,
}

impl Facet {
    pub fn new(vertices: [Point; 3], normal: Pos) -> Self {
        Self { vertices, normal }
    }

    pub fn vertices(&self) -> &[Point; 3] {
        &self.vertices
    }

    pub fn normal(&self) -> Pos {
        self.normal
    }

    /// The triangle's three edges, each tagged with the facet normal.
    pub fn edges(&self) -> [Segment; 3] {
        let [a, b, c] = self.vertices;
        [
            Segment::with_normal(a, b, self.normal),
            Segment::with_normal(b, c, self.normal),
            Segment::with_normal(c, a, self.normal),
        ]
    }
}

/// A triangulated surface: the facets in file order plus a count of the
/// malformed facet blocks the parser had to drop.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    facets: Vec<Facet>,
    dropped: usize,
}

impl Mesh {
    pub fn new(facets: Vec<Facet>) -> Self {
        Self { facets, dropped: 0 }
    }

    pub(crate) fn with_dropped(facets: Vec<Facet>, dropped: usize) -> Self {
        Self { facets, dropped }
    }

    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    /// Facet blocks discarded during parsing for not holding exactly three
    /// vertices.
    pub fn dropped_facets(&self) -> usize {
        self.dropped
    }

    /// Minimum and maximum z over all vertices, or `None` for an empty mesh.
    pub fn z_extent(&self) -> Option<(f64, f64)> {
        let mut vertices = self.facets.iter().flat_map(|facet| facet.vertices());
        let first = vertices.next()?.z();

        let (min, max) = vertices.fold((first, first), |(min, max), vertex| {
            (min.min(vertex.z()), max.max(vertex.z()))
        });
        Some((min, max))
    }
}
