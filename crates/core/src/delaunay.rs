//! Bowyer-Watson incremental Delaunay triangulation.
//!
//! Builds a triangulation whose triangles exactly cover the convex hull of
//! the input points: start from a super-triangle enclosing everything,
//! insert one point at a time by carving out the cavity of triangles whose
//! circumcircle contains it and fanning the cavity boundary to the new
//! point, then strip every triangle touching a super-triangle vertex.
//!
//! Each insertion scans all current triangles, so the whole build is O(n^2)
//! worst case. Fine for decorative canvases (point count is canvas area over
//! cell_size^2); a point-location structure would be needed before using
//! this on grids beyond a few tens of thousands of points.

use crate::geometry::{in_circumcircle, orient2d, Triangle};
use glam::{dvec2, DVec2};

const SQRT_3: f64 = 1.7320508075688772;

/// An undirected edge between two point indices, smaller index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Edge(usize, usize);

impl Edge {
    fn new(a: usize, b: usize) -> Self {
        if a < b {
            Edge(a, b)
        } else {
            Edge(b, a)
        }
    }
}

/// Triangulates `points` into a set of CCW triangles covering their convex
/// hull.
///
/// Fewer than three points yield an empty set. Exactly collinear triples are
/// never emitted (the orientation test rejects zero-area fans), so a fully
/// collinear input also yields an empty set rather than degenerate slivers.
/// Duplicate points are ignored.
///
/// The output order is deterministic for a fixed input order; no promise is
/// made across reorderings of the same point set.
pub fn triangulate(points: &[DVec2]) -> Vec<Triangle> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    // Working vertex list: the input points plus three super-triangle
    // vertices appended at indices n, n+1, n+2.
    let mut verts = points.to_vec();
    let (min, max) = bounds(points);
    let span = (max - min).max_element().max(1.0);
    let center = (min + max) * 0.5;
    let r = 64.0 * span;
    // Equilateral enclosure, CCW: apex up, then bottom-left, bottom-right.
    verts.push(center + dvec2(0.0, 2.0 * r));
    verts.push(center + dvec2(-SQRT_3 * r, -r));
    verts.push(center + dvec2(SQRT_3 * r, -r));

    let mut triangles = vec![Triangle::new(n, n + 1, n + 2)];
    for pid in 0..n {
        insert_point(pid, &verts, &mut triangles);
    }

    triangles.retain(|t| t.a < n && t.b < n && t.c < n);
    triangles
}

/// Axis-aligned bounds of a non-empty point slice.
fn bounds(points: &[DVec2]) -> (DVec2, DVec2) {
    let mut min = points[0];
    let mut max = points[0];
    for p in &points[1..] {
        min = min.min(*p);
        max = max.max(*p);
    }
    (min, max)
}

/// Inserts one point: carve the cavity of triangles whose circumcircle
/// strictly contains it, then fan the cavity boundary to the point.
fn insert_point(pid: usize, verts: &[DVec2], triangles: &mut Vec<Triangle>) {
    let p = verts[pid];

    let mut cavity: Vec<usize> = triangles
        .iter()
        .enumerate()
        .filter(|(_, t)| in_circumcircle(verts[t.a], verts[t.b], verts[t.c], p))
        .map(|(i, _)| i)
        .collect();

    // No containing circumcircle means a duplicate of an existing vertex;
    // skip it.
    if cavity.is_empty() {
        return;
    }

    // Boundary edges appear in exactly one cavity triangle.
    let mut edge_count = std::collections::HashMap::new();
    for &i in &cavity {
        let t = triangles[i];
        for e in [
            Edge::new(t.a, t.b),
            Edge::new(t.b, t.c),
            Edge::new(t.c, t.a),
        ] {
            *edge_count.entry(e).or_insert(0u32) += 1;
        }
    }
    let mut boundary: Vec<Edge> = edge_count
        .into_iter()
        .filter_map(|(e, count)| (count == 1).then_some(e))
        .collect();
    // Sorted so the output is a function of the input order alone, not of
    // hash-map iteration order.
    boundary.sort_unstable();

    cavity.sort_unstable();
    for &i in cavity.iter().rev() {
        triangles.swap_remove(i);
    }

    for e in boundary {
        let o = orient2d(verts[e.0], verts[e.1], p);
        // A boundary edge collinear with p would fan into a zero-area
        // triangle; it covers nothing, so drop it.
        if o == 0.0 {
            continue;
        }
        let t = if o > 0.0 {
            Triangle::new(e.0, e.1, pid)
        } else {
            Triangle::new(e.1, e.0, pid)
        };
        triangles.push(t);
    }
}
