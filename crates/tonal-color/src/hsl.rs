// SPDX-License-Identifier: MIT
//
// RGB ↔ HSL.
//
// All three HSL components live in [0, 1] (hue as a fraction of a turn,
// not degrees). Callers doing hue arithmetic in degrees multiply by 360
// on the way in and divide on the way out.
//
// Achromatic colors (max == min) have no defined hue; they report h = 0
// and s = 0 exactly, and any hue with s = 0 maps back to a pure gray.

use crate::hex::{Rgb, hex_to_rgb, rgb_to_hex};

/// A color in HSL form, every component in [0, 1] for well-formed input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    /// Hue as a fraction of a full turn.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Lightness.
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Hue in degrees, [0, 360) for well-formed input.
    #[inline]
    #[must_use]
    pub fn hue_degrees(self) -> f64 {
        self.h * 360.0
    }

    /// Return a copy with lightness replaced.
    #[inline]
    #[must_use]
    pub const fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    /// Return a copy with hue replaced.
    #[inline]
    #[must_use]
    pub const fn with_hue(self, h: f64) -> Self {
        Self { h, ..self }
    }
}

/// Convert 8-bit RGB to HSL.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

    // Exact comparisons: `max` is one of r, g, b bit-for-bit.
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h / 6.0, s, l)
}

/// Convert HSL to 8-bit RGB, rounding each channel to the nearest integer.
///
/// Hue is taken modulo one turn; results outside [0, 255] (from
/// out-of-range saturation or lightness) saturate.
#[must_use]
#[allow(clippy::float_cmp, clippy::suboptimal_flops)]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let Hsl { h, s, l } = hsl;

    if s == 0.0 {
        let v = to_channel(l);
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_channel(p, q, h)),
        to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

/// Parse `hex` leniently and convert to HSL.
#[must_use]
pub fn hex_to_hsl(hex: &str) -> Hsl {
    rgb_to_hsl(hex_to_rgb(hex))
}

/// Convert HSL to a `#rrggbb` string.
#[must_use]
pub fn hsl_to_hex(hsl: Hsl) -> String {
    rgb_to_hex(hsl_to_rgb(hsl))
}

/// One channel of the piecewise HSL → RGB ramp; `t` is the channel's
/// hue position, wrapped into [0, 1).
// Unfused arithmetic throughout: channel values are rounded afterwards and
// must land on the same side of .5 as the plain formula.
#[allow(clippy::suboptimal_flops)]
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Scale a [0, 1] component to a rounded `u8`, saturating out-of-range
/// values (NaN becomes 0).
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
