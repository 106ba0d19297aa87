//! CPU rasterization of a triangle mesh into an RGBA8 pixel buffer.
//!
//! Each triangle is filled by testing pixel centers against its three edge
//! functions over a canvas-clamped bounding box, then its outline is stroked
//! in the fill color. The fill test carries a small tolerance and the stroke
//! revisits the shared edges, so adjacent triangles never leave a
//! background-colored seam between them. Triangles are drawn strictly in
//! mesh order; where they share edge pixels, the later triangle wins. That
//! order is a rendering contract, not an accident.

use crate::color::Srgb;
use crate::geometry::{orient2d, Mesh, Triangle};
use glam::{dvec2, DVec2};

/// Tolerance on the edge functions when testing pixel centers. Covers
/// floating-point noise for centers that lie exactly on a shared edge; far
/// below anything visible.
const EDGE_EPS: f64 = 1e-6;

/// A `width x height` RGBA8 pixel buffer, row-major, alpha always 255.
///
/// Created fresh per render and owned by the caller; this is the single
/// drawing target both the in-memory image path and the PNG-encoding path
/// consume, which is what makes the two pixel-identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a buffer with every pixel set to `background`.
    ///
    /// The background shows through wherever no triangle lands: degenerate
    /// inputs, and any corner the margin strategy failed to close.
    /// Zero-sized dimensions produce an empty buffer.
    pub fn new(width: usize, height: usize, background: Srgb) -> Self {
        Self {
            width,
            height,
            data: background.to_rgba8().repeat(width * height),
        }
    }

    /// Buffer width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Buffer height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGBA8 bytes, row-major, `width * height * 4` long.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The four RGBA bytes at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the buffer.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let idx = (y * self.width + x) * 4;
        self.data[idx..idx + 4].try_into().expect("pixel slice is 4 bytes")
    }

    fn put(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        let idx = (y * self.width + x) * 4;
        self.data[idx..idx + 4].copy_from_slice(&rgba);
    }

    fn put_clipped(&mut self, x: i64, y: i64, rgba: [u8; 4]) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.put(x as usize, y as usize, rgba);
        }
    }

    /// Draws every triangle of `mesh` in order: flat fill, then a one-pixel
    /// stroke of the outline in the same color.
    ///
    /// `color_of` is consulted once per triangle. Neither the mesh nor the
    /// color source is mutated; the buffer is the only side effect.
    pub fn draw_mesh<F>(&mut self, mesh: &Mesh, mut color_of: F)
    where
        F: FnMut(&Triangle) -> Srgb,
    {
        for tri in &mesh.triangles {
            let color = color_of(tri);
            let v = tri.vertices(&mesh.points);
            self.fill_triangle(v, color);
            let rgba = color.to_rgba8();
            self.stroke_line(v[0], v[1], rgba);
            self.stroke_line(v[1], v[2], rgba);
            self.stroke_line(v[2], v[0], rgba);
        }
    }

    /// Fills the triangle `v` with `color`.
    ///
    /// Pixel centers are tested against the three CCW edge functions with a
    /// small tolerance, over the triangle's bounding box clamped to the
    /// canvas. Zero-area triangles fill nothing.
    pub fn fill_triangle(&mut self, v: [DVec2; 3], color: Srgb) {
        if self.width == 0 || self.height == 0 {
            return;
        }

        let orientation = orient2d(v[0], v[1], v[2]);
        if orientation == 0.0 {
            return;
        }
        // Normalize to CCW so all three edge functions are non-negative
        // inside.
        let (a, b, c) = if orientation > 0.0 {
            (v[0], v[1], v[2])
        } else {
            (v[0], v[2], v[1])
        };

        let x0 = v.iter().map(|p| p.x).fold(f64::INFINITY, f64::min).floor().max(0.0);
        let y0 = v.iter().map(|p| p.y).fold(f64::INFINITY, f64::min).floor().max(0.0);
        let x1 = v
            .iter()
            .map(|p| p.x)
            .fold(f64::NEG_INFINITY, f64::max)
            .ceil()
            .min(self.width as f64 - 1.0);
        let y1 = v
            .iter()
            .map(|p| p.y)
            .fold(f64::NEG_INFINITY, f64::max)
            .ceil()
            .min(self.height as f64 - 1.0);
        if x1 < x0 || y1 < y0 {
            return;
        }

        let rgba = color.to_rgba8();
        for y in y0 as usize..=y1 as usize {
            for x in x0 as usize..=x1 as usize {
                let q = dvec2(x as f64 + 0.5, y as f64 + 0.5);
                if orient2d(a, b, q) >= -EDGE_EPS
                    && orient2d(b, c, q) >= -EDGE_EPS
                    && orient2d(c, a, q) >= -EDGE_EPS
                {
                    self.put(x, y, rgba);
                }
            }
        }
    }

    /// Strokes the segment from `p0` to `p1` (Bresenham over rounded
    /// endpoints), skipping pixels outside the canvas.
    fn stroke_line(&mut self, p0: DVec2, p1: DVec2, rgba: [u8; 4]) {
        let (mut x, mut y) = (p0.x.round() as i64, p0.y.round() as i64);
        let (x_end, y_end) = (p1.x.round() as i64, p1.y.round() as i64);

        let dx = (x_end - x).abs();
        let dy = -(y_end - y).abs();
        let sx = if x < x_end { 1 } else { -1 };
        let sy = if y < y_end { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put_clipped(x, y, rgba);
            if x == x_end && y == y_end {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}
