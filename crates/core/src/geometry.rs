//! Planar geometry primitives: index triangles, orientation and circumcircle
//! predicates, and the mesh produced by triangulation.
//!
//! Points are `glam::DVec2` in canvas space. Triangles store indices into
//! the point slice they were built from rather than coordinates, so a mesh
//! is the pair of both.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Three indices into a point slice, stored in counter-clockwise order.
///
/// Invariant: all three indices are valid offsets into the grid the triangle
/// was produced from, and the referenced points are not collinear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Triangle {
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// The three vertex positions, in stored order.
    pub fn vertices(&self, points: &[DVec2]) -> [DVec2; 3] {
        [points[self.a], points[self.b], points[self.c]]
    }

    /// Arithmetic mean of the three vertices, the color-sampling position
    /// for flat shading.
    pub fn centroid(&self, points: &[DVec2]) -> DVec2 {
        (points[self.a] + points[self.b] + points[self.c]) / 3.0
    }

    /// Signed area; positive for counter-clockwise vertex order.
    pub fn signed_area(&self, points: &[DVec2]) -> f64 {
        orient2d(points[self.a], points[self.b], points[self.c]) / 2.0
    }
}

/// A triangulated point set: the grid and the triangles indexing into it.
///
/// Both are ephemeral: built fresh per render and discarded after
/// rasterization.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub points: Vec<DVec2>,
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    /// True if the mesh has no triangles (degenerate input).
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Total unsigned area of all triangles.
    pub fn area(&self) -> f64 {
        self.triangles
            .iter()
            .map(|t| t.signed_area(&self.points).abs())
            .sum()
    }
}

/// Twice the signed area of triangle `abc`.
///
/// Positive if `c` lies to the left of the directed line `a -> b`
/// (counter-clockwise), negative to the right, zero if collinear.
pub fn orient2d(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    (b - a).perp_dot(c - a)
}

/// True if `p` lies strictly inside the circumcircle of the CCW triangle
/// `abc`.
///
/// Standard lifted-determinant test. The caller must pass `abc` in CCW
/// order; a CW triangle flips the sign and inverts the answer.
pub fn in_circumcircle(a: DVec2, b: DVec2, c: DVec2, p: DVec2) -> bool {
    let d = a - p;
    let e = b - p;
    let f = c - p;

    let ap = d.length_squared();
    let bp = e.length_squared();
    let cp = f.length_squared();

    d.x * (e.y * cp - bp * f.y) - d.y * (e.x * cp - bp * f.x) + ap * (e.x * f.y - e.y * f.x) > 0.0
}
