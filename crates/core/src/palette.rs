//! Palettes: ordered OKLCh color stops sampled by interpolation.
//!
//! Interpolation happens in OKLCh space so gradients across the canvas stay
//! perceptually even. Hue interpolation uses shortest-arc wrapping to avoid
//! unexpected journeys around the color wheel.

use crate::color::{OkLch, Srgb};
use crate::error::PatternError;

/// Names of the built-in palettes, in the order `list_names` reports them.
const PALETTE_NAMES: &[&str] = &["ocean", "sunset", "meadow", "slate", "grape", "ember"];

/// An ordered set of OKLCh color stops, sampled by interpolation.
///
/// Stops are evenly spaced along the `t` parameter: `sample(0.0)` returns the
/// first stop, `sample(1.0)` the last.
#[derive(Debug, Clone)]
pub struct Palette {
    stops: Vec<OkLch>,
}

impl Palette {
    /// Creates a palette from OKLCh stops. Requires at least one.
    pub fn new(stops: Vec<OkLch>) -> Result<Self, PatternError> {
        if stops.is_empty() {
            return Err(PatternError::InvalidPalette(
                "palette requires at least 1 color".to_string(),
            ));
        }
        Ok(Self { stops })
    }

    /// Creates a palette by parsing hex color strings into OKLCh stops.
    pub fn from_hex(hexes: &[&str]) -> Result<Self, PatternError> {
        let stops: Result<Vec<OkLch>, PatternError> = hexes
            .iter()
            .map(|h| Srgb::from_hex(h).map(Srgb::to_oklch))
            .collect();
        Self::new(stops?)
    }

    /// Looks up a built-in palette by name.
    pub fn from_name(name: &str) -> Result<Self, PatternError> {
        match name {
            "ocean" => Ok(Self::ocean()),
            "sunset" => Ok(Self::sunset()),
            "meadow" => Ok(Self::meadow()),
            "slate" => Ok(Self::slate()),
            "grape" => Ok(Self::grape()),
            "ember" => Ok(Self::ember()),
            _ => Err(PatternError::UnknownPalette(name.to_string())),
        }
    }

    /// Names of all built-in palettes.
    pub fn list_names() -> &'static [&'static str] {
        PALETTE_NAMES
    }

    /// Number of color stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false for a constructed palette.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Samples the palette at `t` in [0, 1].
    ///
    /// `t` is clamped and NaN maps to 0. A single-stop palette returns that
    /// stop for any `t`.
    pub fn sample(&self, t: f64) -> Srgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let n = self.stops.len();

        if n == 1 {
            return self.stops[0].to_srgb();
        }

        let scaled = t * (n - 1) as f64;
        let idx = (scaled as usize).min(n - 2);
        let frac = scaled - idx as f64;

        let c0 = self.stops[idx];
        let c1 = self.stops[idx + 1];

        OkLch {
            l: c0.l + frac * (c1.l - c0.l),
            c: c0.c + frac * (c1.c - c0.c),
            h: interpolate_hue(c0.h, c1.h, frac),
        }
        .to_srgb()
    }

    // -- Built-in palettes --

    /// Deep blues to seafoam.
    pub fn ocean() -> Self {
        Self::from_hex(&["#001f3f", "#003366", "#005f73", "#0a9396", "#94d2bd"])
            .expect("ocean palette hex values are valid")
    }

    /// Dusk purples through orange to pale gold.
    pub fn sunset() -> Self {
        Self::from_hex(&["#355070", "#6d597a", "#b56576", "#e56b6f", "#eaac8b"])
            .expect("sunset palette hex values are valid")
    }

    /// Dark pine to spring green.
    pub fn meadow() -> Self {
        Self::from_hex(&["#1b4332", "#2d6a4f", "#40916c", "#74c69d", "#b7e4c7"])
            .expect("meadow palette hex values are valid")
    }

    /// Near-black to silver grays.
    pub fn slate() -> Self {
        Self::from_hex(&["#0b090a", "#343a40", "#6c757d", "#adb5bd", "#dee2e6"])
            .expect("slate palette hex values are valid")
    }

    /// Deep violet to lavender.
    pub fn grape() -> Self {
        Self::from_hex(&["#10002b", "#3c096c", "#7b2cbf", "#c77dff", "#e0aaff"])
            .expect("grape palette hex values are valid")
    }

    /// Maroon through orange to gold.
    pub fn ember() -> Self {
        Self::from_hex(&["#800000", "#cc0000", "#ff4500", "#ff8c00", "#ffd700"])
            .expect("ember palette hex values are valid")
    }
}

/// Interpolates hue along the shortest arc, wrapping at 360.
fn interpolate_hue(h0: f64, h1: f64, t: f64) -> f64 {
    let delta = match h1 - h0 {
        d if d > 180.0 => d - 360.0,
        d if d < -180.0 => d + 360.0,
        d => d,
    };
    (h0 + t * delta).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-5;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn assert_same_color(a: Srgb, b: Srgb, context: &str) {
        assert!(
            approx_eq(a.r, b.r) && approx_eq(a.g, b.g) && approx_eq(a.b, b.b),
            "{context}: {a:?} vs {b:?}"
        );
    }

    // -- construction --

    #[test]
    fn new_with_empty_vec_returns_error() {
        assert!(Palette::new(vec![]).is_err());
    }

    #[test]
    fn from_hex_with_valid_colors_succeeds() {
        let palette = Palette::from_hex(&["#ff0000", "#00ff00", "#0000ff"]).unwrap();
        assert_eq!(palette.len(), 3);
    }

    #[test]
    fn from_hex_with_empty_slice_returns_error() {
        assert!(Palette::from_hex(&[]).is_err());
    }

    #[test]
    fn from_hex_with_invalid_hex_returns_error() {
        assert!(Palette::from_hex(&["#ff0000", "#zzzzzz"]).is_err());
    }

    // -- name registry --

    #[test]
    fn from_name_resolves_every_listed_palette() {
        for name in Palette::list_names() {
            let palette = Palette::from_name(name)
                .unwrap_or_else(|e| panic!("listed palette {name} failed: {e}"));
            assert!(palette.len() >= 2, "{name} has only {} stops", palette.len());
        }
    }

    #[test]
    fn from_name_rejects_unknown_names() {
        let err = Palette::from_name("tropical").unwrap_err();
        assert!(matches!(err, PatternError::UnknownPalette(_)));
    }

    // -- sampling --

    #[test]
    fn sample_at_zero_returns_first_stop() {
        let palette = Palette::from_hex(&["#ff0000", "#00ff00", "#0000ff"]).unwrap();
        let expected = Srgb::new(1.0, 0.0, 0.0).to_oklch().to_srgb();
        assert_same_color(palette.sample(0.0), expected, "t=0");
    }

    #[test]
    fn sample_at_one_returns_last_stop() {
        let palette = Palette::from_hex(&["#ff0000", "#00ff00", "#0000ff"]).unwrap();
        let expected = Srgb::new(0.0, 0.0, 1.0).to_oklch().to_srgb();
        assert_same_color(palette.sample(1.0), expected, "t=1");
    }

    #[test]
    fn single_stop_palette_is_constant() {
        let stop = OkLch { l: 0.7, c: 0.15, h: 200.0 };
        let palette = Palette::new(vec![stop]).unwrap();
        let expected = stop.to_srgb();
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_same_color(palette.sample(t), expected, &format!("t={t}"));
        }
    }

    #[test]
    fn sample_clamps_t_outside_the_unit_interval() {
        let palette = Palette::from_hex(&["#ff0000", "#0000ff"]).unwrap();
        assert_same_color(palette.sample(-0.5), palette.sample(0.0), "below");
        assert_same_color(palette.sample(1.5), palette.sample(1.0), "above");
    }

    #[test]
    fn sample_nan_returns_a_valid_color() {
        let palette = Palette::from_hex(&["#ff0000", "#0000ff"]).unwrap();
        let srgb = palette.sample(f64::NAN);
        for c in [srgb.r, srgb.g, srgb.b] {
            assert!((0.0..=1.0).contains(&c), "component out of range: {c}");
        }
    }

    // -- hue wraparound --

    #[test]
    fn hue_interpolation_crosses_zero_on_the_short_arc() {
        // 350 -> 10 should pass through 0 (arc of 20), not back through 180.
        let mid = interpolate_hue(350.0, 10.0, 0.5);
        assert!(approx_eq(mid, 0.0) || approx_eq(mid, 360.0), "got {mid}");
        let mid = interpolate_hue(10.0, 350.0, 0.5);
        assert!(approx_eq(mid, 0.0) || approx_eq(mid, 360.0), "got {mid}");
    }

    #[test]
    fn hue_interpolation_without_wraparound_is_linear() {
        assert!(approx_eq(interpolate_hue(90.0, 180.0, 0.5), 135.0));
        assert!(approx_eq(interpolate_hue(100.0, 200.0, 0.0), 100.0));
        assert!(approx_eq(interpolate_hue(100.0, 200.0, 1.0), 200.0));
    }

    // -- property-based --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn sample_always_produces_valid_srgb(t in -0.5_f64..=1.5) {
                let palette = Palette::from_hex(&[
                    "#ff0000", "#00ff00", "#0000ff", "#ffff00",
                ]).unwrap();
                let srgb = palette.sample(t);
                prop_assert!(srgb.r >= 0.0 && srgb.r <= 1.0, "r: {}", srgb.r);
                prop_assert!(srgb.g >= 0.0 && srgb.g <= 1.0, "g: {}", srgb.g);
                prop_assert!(srgb.b >= 0.0 && srgb.b <= 1.0, "b: {}", srgb.b);
            }

            #[test]
            fn hue_interpolation_stays_in_range(
                h0 in 0.0_f64..360.0,
                h1 in 0.0_f64..360.0,
                t in 0.0_f64..=1.0,
            ) {
                let h = interpolate_hue(h0, h1, t);
                prop_assert!(h >= 0.0 && h < 360.0, "hue {h} for h0={h0}, h1={h1}, t={t}");
            }
        }
    }
}
