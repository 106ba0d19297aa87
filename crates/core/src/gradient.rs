//! Position-keyed color gradients: the pluggable palette capability.
//!
//! The rasterization pipeline never sees palette internals; it maps each
//! triangle centroid to a unit-square position and asks a [`Gradient`] for
//! the color there. Implementations: a bare [`Srgb`] is a solid color,
//! [`AxisGradient`] projects the position onto an axis and samples a
//! [`Palette`].

use crate::color::Srgb;
use crate::palette::Palette;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Maps a position in the unit square to a color.
///
/// Implementations must be pure for a fixed state: the same `(u, v)` always
/// yields the same color within one generation.
///
/// This trait is **object-safe**; the pattern orchestrator holds a
/// `Box<dyn Gradient>`.
pub trait Gradient {
    /// The color at `(u, v)`, both in [0, 1].
    fn color_at(&self, u: f64, v: f64) -> Srgb;
}

/// A solid color is the trivial gradient.
impl Gradient for Srgb {
    fn color_at(&self, _u: f64, _v: f64) -> Srgb {
        *self
    }
}

/// The axis a palette sweeps along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Left to right.
    X,
    /// Top to bottom.
    Y,
    /// Top-left to bottom-right.
    #[default]
    Diagonal,
}

impl Axis {
    /// Projects a unit-square position onto this axis, yielding the palette
    /// parameter in [0, 1].
    pub fn project(self, u: f64, v: f64) -> f64 {
        match self {
            Axis::X => u,
            Axis::Y => v,
            Axis::Diagonal => (u + v) / 2.0,
        }
    }
}

/// Sweeps a [`Palette`] across the canvas along an [`Axis`].
#[derive(Debug, Clone)]
pub struct AxisGradient {
    palette: Palette,
    axis: Axis,
}

impl AxisGradient {
    pub fn new(palette: Palette, axis: Axis) -> Self {
        Self { palette, axis }
    }
}

impl Gradient for AxisGradient {
    fn color_at(&self, u: f64, v: f64) -> Srgb {
        self.palette.sample(self.axis.project(u, v))
    }
}

/// Scales a canvas-space position into the unit square, clamped.
///
/// Margin-band centroids fall outside the canvas rect; clamping maps them to
/// the nearest edge color instead of erroring. Degenerate dimensions map to
/// 0 so a gradient still returns its first stop.
pub fn unit_position(p: DVec2, width: f64, height: f64) -> (f64, f64) {
    let u = if width > 0.0 {
        (p.x / width).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let v = if height > 0.0 {
        (p.y / height).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (u, v)
}
