//! PNG emission for rendered pixel buffers.
//!
//! The buffer is already RGBA8 in row-major order, so encoding is a direct
//! handoff to the `image` crate. Failures (dimension overflow, a
//! zero-sized buffer the format cannot express, write errors) surface as
//! recoverable [`PatternError`] values; the in-memory render path is never
//! affected by an encoding failure.

use lowpoly_core::{PatternError, PixelBuffer};
use std::io::Cursor;
use std::path::Path;

/// Converts a pixel buffer into an `image` RGBA buffer.
fn to_image(buffer: &PixelBuffer) -> Result<image::RgbaImage, PatternError> {
    let w = u32::try_from(buffer.width())
        .map_err(|_| PatternError::Encoding(format!("width {} exceeds u32", buffer.width())))?;
    let h = u32::try_from(buffer.height())
        .map_err(|_| PatternError::Encoding(format!("height {} exceeds u32", buffer.height())))?;
    image::RgbaImage::from_raw(w, h, buffer.data().to_vec())
        .ok_or_else(|| PatternError::Encoding("RGBA buffer size mismatch".into()))
}

/// Encodes the buffer as PNG bytes.
///
/// This is the persistence-facing counterpart of the in-memory buffer: the
/// same pixels, serialized. Returns `PatternError::Encoding` if the buffer
/// cannot be represented (for example a zero-sized degenerate canvas).
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, PatternError> {
    let img = to_image(buffer)?;
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .map_err(|e| PatternError::Encoding(e.to_string()))?;
    Ok(bytes)
}

/// Writes the buffer as a PNG file.
///
/// Returns `PatternError::Encoding` for unrepresentable buffers and
/// `PatternError::Io` on write failure.
pub fn write_png(buffer: &PixelBuffer, path: &Path) -> Result<(), PatternError> {
    let img = to_image(buffer)?;
    img.save(path).map_err(|e| PatternError::Io(e.to_string()))
}
