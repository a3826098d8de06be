//! Planar primitives for the jump reachability test
//!
//! Points are `[x, y]` with `x` the column and `y` the row, so the geometry
//! reads the same way the level is drawn.

/// A point in continuous column/row space
pub type Point = [f64; 2];

/// Unsigned area of the triangle spanned by three points
pub fn triangle_area(a: Point, b: Point, c: Point) -> f64 {
    ((a[0] * (b[1] - c[1]) + b[0] * (c[1] - a[1]) + c[0] * (a[1] - b[1])) / 2.0).abs()
}

/// Triangle given by its three vertices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Vertices in any winding order
    pub vertices: [Point; 3],
}

impl Triangle {
    /// Create a triangle from three vertices
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Area of the triangle
    pub fn area(&self) -> f64 {
        let [a, b, c] = self.vertices;
        triangle_area(a, b, c)
    }

    /// Point-in-triangle by area decomposition
    ///
    /// The three sub-triangles formed with `point` add up to the full area
    /// exactly when the point is inside or on an edge. `tolerance` absorbs
    /// rounding so boundary points are admitted. Degenerate (zero-area)
    /// triangles contain the points of their collapsed segment.
    pub fn contains(&self, point: Point, tolerance: f64) -> bool {
        let [a, b, c] = self.vertices;
        let parts = triangle_area(point, b, c) + triangle_area(a, point, c) + triangle_area(a, b, point);
        (parts - self.area()).abs() <= tolerance
    }
}
