//! Jittered point-grid generation.
//!
//! Lays a regular lattice of points over the canvas plus a margin band on
//! every side, then displaces each coordinate by a bounded uniform offset.
//! The margin guarantees the triangulated mesh still covers the whole canvas
//! after displacement: a point can move at most `variance * cell_size`
//! toward the interior, which is exactly the margin width.

use crate::prng::Xorshift64;
use glam::{dvec2, DVec2};

/// Generates the jittered lattice covering
/// `[-margin, width + cell_size + margin) x [-margin, height + cell_size + margin)`
/// where `margin = cell_size * variance`.
///
/// Each coordinate is displaced independently by a uniform sample from
/// `[-variance * cell_size, +variance * cell_size)`. With `variance = 0`
/// every point is exactly its lattice coordinate.
///
/// Iteration is x-outer, y-inner, so the output order is deterministic for a
/// given seed; callers must not rely on any particular order beyond indices
/// staying valid for one generation.
///
/// A degenerate canvas (`width <= 0` or `height <= 0`) yields an empty grid.
/// `cell_size > 0` and `variance >= 0` are enforced upstream by
/// [`PatternSpec::validate`](crate::pattern::PatternSpec::validate).
pub fn generate_grid(
    width: f64,
    height: f64,
    cell_size: f64,
    variance: f64,
    rng: &mut Xorshift64,
) -> Vec<DVec2> {
    if width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }

    // The jitter bound doubles as the margin width: a margin point can move
    // at most `spread` toward the interior, never past the canvas edge.
    let spread = cell_size * variance;
    let margin = spread;

    let mut points = Vec::new();
    let mut x = -margin;
    while x < width + cell_size + margin {
        let mut y = -margin;
        while y < height + cell_size + margin {
            points.push(dvec2(
                x + rng.next_range(-spread, spread),
                y + rng.next_range(-spread, spread),
            ));
            y += cell_size;
        }
        x += cell_size;
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The unjittered lattice coordinates, mirroring the generation loop.
    fn lattice(width: f64, height: f64, cell_size: f64, variance: f64) -> Vec<DVec2> {
        let margin = cell_size * variance;
        let mut coords = Vec::new();
        let mut x = -margin;
        while x < width + cell_size + margin {
            let mut y = -margin;
            while y < height + cell_size + margin {
                coords.push(dvec2(x, y));
                y += cell_size;
            }
            x += cell_size;
        }
        coords
    }

    // -- degenerate canvases --

    #[test]
    fn zero_width_yields_empty_grid() {
        let mut rng = Xorshift64::new(1);
        assert!(generate_grid(0.0, 100.0, 50.0, 0.5, &mut rng).is_empty());
    }

    #[test]
    fn zero_height_yields_empty_grid() {
        let mut rng = Xorshift64::new(1);
        assert!(generate_grid(100.0, 0.0, 50.0, 0.5, &mut rng).is_empty());
    }

    #[test]
    fn negative_dimensions_yield_empty_grid() {
        let mut rng = Xorshift64::new(1);
        assert!(generate_grid(-10.0, 100.0, 50.0, 0.5, &mut rng).is_empty());
    }

    // -- zero variance --

    #[test]
    fn zero_variance_produces_the_exact_3x3_lattice() {
        let mut rng = Xorshift64::new(42);
        let points = generate_grid(100.0, 100.0, 50.0, 0.0, &mut rng);
        assert_eq!(points.len(), 9, "expected a 3x3 lattice");
        for (i, expected) in lattice(100.0, 100.0, 50.0, 0.0).iter().enumerate() {
            assert_eq!(points[i], *expected, "point {i} is not on the lattice");
        }
        // Spot-check the corners of the span.
        assert_eq!(points[0], dvec2(0.0, 0.0));
        assert_eq!(points[8], dvec2(100.0, 100.0));
    }

    #[test]
    fn zero_variance_is_independent_of_the_seed() {
        let mut a = Xorshift64::new(1);
        let mut b = Xorshift64::new(999);
        assert_eq!(
            generate_grid(200.0, 120.0, 40.0, 0.0, &mut a),
            generate_grid(200.0, 120.0, 40.0, 0.0, &mut b),
        );
    }

    // -- jitter bounds --

    #[test]
    fn jitter_stays_within_variance_times_cell_size_per_axis() {
        let (width, height, cell_size, variance) = (300.0, 200.0, 40.0, 0.6);
        let bound = variance * cell_size;
        let base = lattice(width, height, cell_size, variance);
        // Statistical boundary test: many trials, every displacement bounded.
        for seed in 1..=50 {
            let mut rng = Xorshift64::new(seed);
            let points = generate_grid(width, height, cell_size, variance, &mut rng);
            assert_eq!(points.len(), base.len());
            for (p, l) in points.iter().zip(&base) {
                let d = *p - *l;
                assert!(
                    d.x.abs() <= bound && d.y.abs() <= bound,
                    "seed {seed}: displacement {d:?} exceeds {bound}"
                );
            }
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_grid() {
        let mut a = Xorshift64::new(77);
        let mut b = Xorshift64::new(77);
        assert_eq!(
            generate_grid(500.0, 400.0, 75.0, 0.75, &mut a),
            generate_grid(500.0, 400.0, 75.0, 0.75, &mut b),
        );
    }

    // -- coverage span --

    #[test]
    fn lattice_spans_past_every_canvas_edge() {
        let (width, height, cell_size, variance) = (130.0, 90.0, 50.0, 0.0);
        let mut rng = Xorshift64::new(5);
        let points = generate_grid(width, height, cell_size, variance, &mut rng);
        let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        // The last lattice column/row lands at or past the canvas edge.
        assert!(min_x <= 0.0 && min_y <= 0.0);
        assert!(max_x >= width, "max_x {max_x} < width {width}");
        assert!(max_y >= height, "max_y {max_y} < height {height}");
    }

    #[test]
    fn cell_size_larger_than_canvas_still_produces_a_grid() {
        let mut rng = Xorshift64::new(3);
        let points = generate_grid(100.0, 100.0, 150.0, 0.0, &mut rng);
        // x in {0, 150}, y in {0, 150}: a single cell spanning the canvas.
        assert_eq!(points.len(), 4);
    }
}
