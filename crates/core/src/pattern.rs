//! The pattern orchestrator: configuration in, pixels out.
//!
//! [`PatternSpec`] is the immutable, serializable description of one
//! artwork: canvas size, cell size, variance, seed, palette, sweep axis,
//! background. [`Pattern`] pairs a validated spec with a gradient and runs
//! the pipeline (grid, triangulation, per-centroid color, rasterization)
//! as one blocking call. There is no caching and no observer wiring: change
//! the spec, build a new `Pattern`, render again.

use crate::color::Srgb;
use crate::error::PatternError;
use crate::geometry::Mesh;
use crate::gradient::{unit_position, Axis, AxisGradient, Gradient};
use crate::grid::generate_grid;
use crate::palette::Palette;
use crate::params::{param_f64, param_string, param_u64};
use crate::prng::Xorshift64;
use crate::raster::PixelBuffer;
use crate::{delaunay, Triangle};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default background, a light gray.
const DEFAULT_BACKGROUND: Srgb = Srgb::new(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);

/// Reproducible specification for one pattern.
///
/// Two identical specs rendered by the same binary produce bit-identical
/// buffers. Mutating a field does not touch any existing render; build a new
/// [`Pattern`] from the changed spec and render again.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatternSpec {
    /// Canvas width in pixels. Must be positive.
    pub width: f64,
    /// Canvas height in pixels. Must be positive.
    pub height: f64,
    /// Lattice spacing. Must be positive.
    pub cell_size: f64,
    /// Jitter amount as a fraction of `cell_size`. Must be non-negative;
    /// 0 is a perfectly regular grid.
    pub variance: f64,
    /// PRNG seed for the jitter.
    pub seed: u64,
    /// Built-in palette name.
    pub palette: String,
    /// Axis the palette sweeps along.
    pub axis: Axis,
    /// Background color, visible only where no triangle lands.
    pub background: Srgb,
}

impl Default for PatternSpec {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            cell_size: 75.0,
            variance: 0.75,
            seed: 42,
            palette: "ocean".to_string(),
            axis: Axis::Diagonal,
            background: DEFAULT_BACKGROUND,
        }
    }
}

impl PatternSpec {
    /// Creates a spec with the given geometry and defaults for everything
    /// else.
    pub fn new(width: f64, height: f64, cell_size: f64, variance: f64) -> Self {
        Self {
            width,
            height,
            cell_size,
            variance,
            ..Self::default()
        }
    }

    /// Builds a spec from a loose JSON object, defaulting every missing or
    /// mistyped field. The result still has to pass [`validate`].
    ///
    /// [`validate`]: PatternSpec::validate
    pub fn from_json(params: &Value) -> Self {
        let d = Self::default();
        Self {
            width: param_f64(params, "width", d.width),
            height: param_f64(params, "height", d.height),
            cell_size: param_f64(params, "cell_size", d.cell_size),
            variance: param_f64(params, "variance", d.variance),
            seed: param_u64(params, "seed", d.seed),
            palette: param_string(params, "palette", &d.palette),
            axis: params
                .get("axis")
                .and_then(|v| serde_json::from_value(v.clone()).ok())
                .unwrap_or(d.axis),
            background: params
                .get("background")
                .and_then(Value::as_str)
                .and_then(|s| Srgb::from_hex(s).ok())
                .unwrap_or(d.background),
        }
    }

    /// Rejects out-of-range fields before any generation begins.
    ///
    /// NaN fails every comparison below, so non-finite configs are rejected
    /// too.
    pub fn validate(&self) -> Result<(), PatternError> {
        let positive = |field, value: f64| {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(PatternError::InvalidConfig {
                    field,
                    requirement: "positive",
                    value,
                })
            }
        };
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("cell_size", self.cell_size)?;
        if self.variance >= 0.0 && self.variance.is_finite() {
            Ok(())
        } else {
            Err(PatternError::InvalidConfig {
                field: "variance",
                requirement: "non-negative",
                value: self.variance,
            })
        }
    }

    /// Pixel dimensions of the output buffer (fractional sizes truncate).
    fn pixel_size(&self) -> (usize, usize) {
        (self.width as usize, self.height as usize)
    }
}

/// A validated spec plus the gradient it colors with.
pub struct Pattern {
    spec: PatternSpec,
    gradient: Box<dyn Gradient>,
}

impl Pattern {
    /// Creates a pattern with an explicit gradient.
    ///
    /// Returns `PatternError::InvalidConfig` if the spec fails validation;
    /// nothing is generated in that case.
    pub fn new(spec: PatternSpec, gradient: Box<dyn Gradient>) -> Result<Self, PatternError> {
        spec.validate()?;
        Ok(Self { spec, gradient })
    }

    /// Creates a pattern whose gradient is the spec's named palette swept
    /// along the spec's axis.
    pub fn from_spec(spec: PatternSpec) -> Result<Self, PatternError> {
        let palette = Palette::from_name(&spec.palette)?;
        let gradient = AxisGradient::new(palette, spec.axis);
        Self::new(spec, Box::new(gradient))
    }

    /// The spec this pattern renders.
    pub fn spec(&self) -> &PatternSpec {
        &self.spec
    }

    /// Generates the jittered, triangulated mesh for this spec.
    ///
    /// A fresh PRNG is seeded from the spec each call, so repeated calls
    /// yield the same mesh. Fewer than three grid points (impossible for a
    /// validated spec, but cheap to honor) yield an empty mesh.
    pub fn generate(&self) -> Mesh {
        let mut rng = Xorshift64::new(self.spec.seed);
        let points = generate_grid(
            self.spec.width,
            self.spec.height,
            self.spec.cell_size,
            self.spec.variance,
            &mut rng,
        );
        let triangles = delaunay::triangulate(&points);
        Mesh { points, triangles }
    }

    /// The color for one triangle: its centroid scaled into the unit square
    /// and looked up in the gradient. Flat-shaded; computed once per
    /// triangle.
    fn triangle_color(&self, mesh: &Mesh, triangle: &Triangle) -> Srgb {
        let centroid = triangle.centroid(&mesh.points);
        let (u, v) = unit_position(centroid, self.spec.width, self.spec.height);
        self.gradient.color_at(u, v)
    }

    /// Runs the full pipeline and returns a fresh pixel buffer.
    ///
    /// One blocking call: grid, triangulation, per-centroid colors,
    /// background fill, triangle fill + stroke in mesh order. The buffer is
    /// owned by the caller; nothing is cached.
    pub fn image(&self) -> PixelBuffer {
        let mesh = self.generate();
        let (width, height) = self.spec.pixel_size();
        let mut buffer = PixelBuffer::new(width, height, self.spec.background);
        buffer.draw_mesh(&mesh, |t| self.triangle_color(&mesh, t));
        buffer
    }
}
