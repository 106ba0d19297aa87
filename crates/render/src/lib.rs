#![deny(unsafe_code)]
//! Encoding of lowpoly pixel buffers to file formats.
//!
//! The pipeline in `lowpoly-core` renders into a plain RGBA8
//! [`PixelBuffer`](lowpoly_core::PixelBuffer); this crate feeds that buffer
//! to the `image` crate for PNG emission. The dependency is feature-gated
//! behind `png` (default on) so targets that only need in-memory rendering
//! can opt out of the encoder entirely.

#[cfg(feature = "png")]
pub mod png;

#[cfg(feature = "png")]
pub use png::{encode_png, write_png};
