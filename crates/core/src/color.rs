//! Color types and conversions for the lowpoly pipeline.
//!
//! Triangle fills travel through four spaces: `Srgb` is the interchange and
//! output form (hex serde, RGBA8 for the rasterizer), `LinearRgb` is the
//! gamma-decoded intermediate, and `OkLab`/`OkLch` are where palette
//! interpolation happens: OKLCh gradients stay perceptually even where
//! naive sRGB lerps would drift muddy. All components are `f64`.

use crate::error::PatternError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// sRGB color with components in [0, 1].
///
/// Serializes as a hex string `"#rrggbb"`. The hex round-trip quantizes to
/// 8 bits per channel, which matches the RGBA8 output format anyway.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Linear RGB color (gamma-decoded).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// OKLab perceptual color space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OkLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// OKLCh, the cylindrical form of OKLab. Hue in degrees, [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OkLch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Srgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color like "#ff00aa" or "ff00aa" (case insensitive).
    pub fn from_hex(hex: &str) -> Result<Srgb, PatternError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return Err(PatternError::InvalidColor(format!(
                "expected 6 hex digits, got {}",
                hex.len()
            )));
        }
        let component = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|e| PatternError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        Ok(Srgb {
            r: component(0..2, "red")?,
            g: component(2..4, "green")?,
            b: component(4..6, "blue")?,
        })
    }

    /// Formats as `"#rrggbb"`, quantizing each component to 8 bits.
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Quantizes to four RGBA bytes with alpha 255, clamping each component.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), 255]
    }

    /// Decodes sRGB gamma to linear RGB.
    pub fn to_linear(self) -> LinearRgb {
        LinearRgb {
            r: gamma_decode(self.r),
            g: gamma_decode(self.g),
            b: gamma_decode(self.b),
        }
    }

    /// Converts through linear RGB and OKLab into OKLCh.
    pub fn to_oklch(self) -> OkLch {
        self.to_linear().to_oklab().to_oklch()
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl LinearRgb {
    /// Encodes linear RGB with sRGB gamma.
    pub fn to_srgb(self) -> Srgb {
        Srgb {
            r: gamma_encode(self.r),
            g: gamma_encode(self.g),
            b: gamma_encode(self.b),
        }
    }

    /// Applies the OKLab forward matrix transform.
    pub fn to_oklab(self) -> OkLab {
        let l = 0.4122214708 * self.r + 0.5363325363 * self.g + 0.0514459929 * self.b;
        let m = 0.2119034982 * self.r + 0.6806995451 * self.g + 0.1073969566 * self.b;
        let s = 0.0883024619 * self.r + 0.2817188376 * self.g + 0.6299787005 * self.b;

        let (l, m, s) = (l.cbrt(), m.cbrt(), s.cbrt());

        OkLab {
            l: 0.2104542553 * l + 0.7936177850 * m - 0.0040720468 * s,
            a: 1.9779984951 * l - 2.4285922050 * m + 0.4505937099 * s,
            b: 0.0259040371 * l + 0.7827717662 * m - 0.8086757660 * s,
        }
    }
}

impl OkLab {
    /// Applies the inverse OKLab matrix transform.
    pub fn to_linear(self) -> LinearRgb {
        let l = self.l + 0.3963377774 * self.a + 0.2158037573 * self.b;
        let m = self.l - 0.1055613458 * self.a - 0.0638541728 * self.b;
        let s = self.l - 0.0894841775 * self.a - 1.2914855480 * self.b;

        let (l, m, s) = (l * l * l, m * m * m, s * s * s);

        LinearRgb {
            r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
            g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
            b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
        }
    }

    /// Converts to the cylindrical form.
    ///
    /// Chroma below 1e-10 pins hue to 0.0 to avoid an indeterminate
    /// `atan2(0, 0)`.
    pub fn to_oklch(self) -> OkLch {
        let c = (self.a * self.a + self.b * self.b).sqrt();
        let h = if c < 1e-10 {
            0.0
        } else {
            self.b.atan2(self.a).to_degrees().rem_euclid(360.0)
        };
        OkLch { l: self.l, c, h }
    }
}

impl OkLch {
    /// Converts back to rectangular OKLab.
    pub fn to_oklab(self) -> OkLab {
        let h = self.h.to_radians();
        OkLab {
            l: self.l,
            a: self.c * h.cos(),
            b: self.c * h.sin(),
        }
    }

    /// Converts through OKLab and linear RGB into sRGB, clamping each
    /// component to [0, 1] (high-chroma stops can leave the sRGB gamut).
    pub fn to_srgb(self) -> Srgb {
        let srgb = self.to_oklab().to_linear().to_srgb();
        Srgb {
            r: srgb.r.clamp(0.0, 1.0),
            g: srgb.g.clamp(0.0, 1.0),
            b: srgb.b.clamp(0.0, 1.0),
        }
    }
}

/// Inverse sRGB gamma for a single component.
fn gamma_decode(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Forward sRGB gamma for a single component.
fn gamma_encode(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}
