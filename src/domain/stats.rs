//! Sorting and aggregate statistics over a shape collection

use serde::Serialize;

use super::shape::Shape;

/// Sorts shapes by ascending area.
///
/// The sort is stable, so shapes with equal area keep their input order.
/// NaN areas (degenerate triangles) sort after every number regardless of
/// the NaN's sign bit, which `sqrt` of a negative sets on most targets.
pub fn sort_by_area(shapes: &mut [Shape]) {
    shapes.sort_by(|a, b| {
        let (x, y) = (a.area(), b.area());
        x.is_nan().cmp(&y.is_nan()).then(x.total_cmp(&y))
    });
}

/// Totals gathered in a single pass over the shapes
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ShapeStats {
    pub total_shapes: usize,
    pub total_perimeter: f64,
    pub total_polygons: u32,
    pub total_polygon_sides: u32,
}

impl ShapeStats {
    pub fn aggregate<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> Self {
        let mut stats = Self::default();
        for shape in shapes {
            stats.total_shapes += 1;
            stats.total_perimeter += shape.perimeter();
            if let Some(sides) = shape.side_count() {
                stats.total_polygons += 1;
                stats.total_polygon_sides += sides;
            }
        }
        stats
    }

    /// Mean side count over polygons.
    ///
    /// Not guarded: with no polygons this is `0 / 0`, i.e. NaN.
    pub fn average_polygon_sides(&self) -> f64 {
        f64::from(self.total_polygon_sides) / f64::from(self.total_polygons)
    }
}
