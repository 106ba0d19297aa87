#![deny(unsafe_code)]
//! Core types and algorithms for the lowpoly pattern generator.
//!
//! Provides the full geometry and colorization pipeline: jittered point-grid
//! generation (`grid`), Bowyer-Watson Delaunay triangulation (`delaunay`),
//! position-keyed gradients over OKLCh palettes (`gradient`, `palette`),
//! triangle-mesh rasterization into an RGBA8 buffer (`raster`), and the
//! `Pattern` orchestrator that composes them.

pub mod color;
pub mod delaunay;
pub mod error;
pub mod geometry;
pub mod gradient;
pub mod grid;
pub mod palette;
pub mod params;
pub mod pattern;
pub mod prng;
pub mod raster;

pub use color::{LinearRgb, OkLab, OkLch, Srgb};
pub use error::PatternError;
pub use geometry::{Mesh, Triangle};
pub use gradient::{Axis, AxisGradient, Gradient};
pub use palette::Palette;
pub use pattern::{Pattern, PatternSpec};
pub use prng::Xorshift64;
pub use raster::PixelBuffer;
