//! Contact-sheet dump of sliced layers. One cell per layer, laid out on a
//! square grid, contours stroked black for fill and red for holes. Purely a
//! diagnostic aid for eyeballing slicer output.

use std::{io, path::Path};

use svg::{
    node::element::{Polygon as SvgPolygon, Rectangle},
    Document,
};

use crate::slicer::Layer;

pub struct SvgSheet<'a> {
    layers: &'a [Layer],
}

impl<'a> SvgSheet<'a> {
    pub fn new(layers: &'a [Layer]) -> Self {
        Self { layers }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        svg::save(path, &self.document())
    }

    pub fn document(&self) -> Document {
        let (min, max) = self.bounds();
        let (width, height) = (max.0 - min.0, max.1 - min.1);
        let sides = self.layers.len().isqrt() + 1;

        let size = (width * sides as f64, height * sides as f64);
        let mut document = Document::new().set("viewBox", (0.0, 0.0, size.0, size.1));

        for (idx, layer) in self.layers.iter().enumerate() {
            let (column, row) = (idx % sides, idx / sides);
            let offset = (column as f64 * width, row as f64 * height);

            document = document.add(
                Rectangle::new()
                    .set("x", offset.0)
                    .set("y", offset.1)
                    .set("width", width)
                    .set("height", height)
                    .set("fill", "none")
                    .set("stroke", "gray")
                    .set("stroke-width", "0.05"),
            );

            for polygon in layer.polygons.iter() {
                let points = polygon
                    .points()
                    .iter()
                    .map(|point| (point.x() - min.0 + offset.0, point.y() - min.1 + offset.1))
                    .collect::<Vec<_>>();

                let stroke = if polygon.fill() { "black" } else { "red" };
                document = document.add(
                    SvgPolygon::new()
                        .set("points", points)
                        .set("fill", "none")
                        .set("stroke", stroke)
                        .set("stroke-width", "0.05"),
                );
            }
        }

        document
    }

    /// Horizontal extent over every contour of every layer.
    fn bounds(&self) -> ((f64, f64), (f64, f64)) {
        let points = self
            .layers
            .iter()
            .flat_map(|layer| layer.polygons.iter())
            .flat_map(|polygon| polygon.points().iter());

        let mut any = false;
        let (mut min, mut max) = ((f64::MAX, f64::MAX), (f64::MIN, f64::MIN));
        for point in points {
            any = true;
            min = (min.0.min(point.x()), min.1.min(point.y()));
            max = (max.0.max(point.x()), max.1.max(point.y()));
        }

        if any {
            (min, max)
        } else {
            ((0.0, 0.0), (1.0, 1.0))
        }
    }
}
