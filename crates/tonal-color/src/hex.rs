// SPDX-License-Identifier: MIT
//
// Hex ↔ RGB codec.
//
// Two parsing regimes exist side by side:
//
//   lenient  → `hex_to_rgb`: reads the leading run of hex digits as an
//              integer and slices channels out of its low 24 bits. Garbage
//              in, some color out. Never fails.
//   strict   → `parse_hex(_, ParseMode::Strict)`: exactly six hex digits
//              with an optional `#`, otherwise `ColorError::InvalidHex`.
//
// Output is always `#rrggbb` in lowercase, except for the alpha suffix
// appended by `with_alpha`, which is uppercase.

use std::fmt;

use crate::error::ColorError;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque sRGB color with 8-bit integer channels.
///
/// Channels are `u8`, so the codec can never be handed an out-of-range
/// value; conversions that overshoot saturate at 0 or 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Slice the low 24 bits of `value` into channels (`0xRRGGBB`).
    #[inline]
    #[must_use]
    pub const fn from_u24(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    /// Format as `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }

    /// Whether all three channels are equal (a gray, black or white).
    #[inline]
    #[must_use]
    pub const fn is_achromatic(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// How hex input is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Accept anything; malformed input yields a defined but arbitrary color.
    #[default]
    Lenient,
    /// Reject anything that is not `#rrggbb` / `rrggbb`.
    Strict,
}

/// Parse a hex color leniently.
///
/// The first `#` is dropped wherever it appears, the longest leading run of
/// hex digits is read as an integer (wrapping at 32 bits) and the channels
/// are taken from its low 24 bits. Input with no leading digits is black.
///
/// ```
/// use tonal_color::{Rgb, hex_to_rgb};
///
/// assert_eq!(hex_to_rgb("#336699"), Rgb::new(0x33, 0x66, 0x99));
/// assert_eq!(hex_to_rgb("336699"), Rgb::new(0x33, 0x66, 0x99));
/// ```
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Rgb {
    if !is_well_formed(hex) {
        tracing::debug!(input = hex, "malformed hex color parsed leniently");
    }

    let mut skipped_hash = false;
    let mut value: u32 = 0;
    for c in hex.chars() {
        if c == '#' && !skipped_hash {
            skipped_hash = true;
            continue;
        }
        match c.to_digit(16) {
            Some(digit) => value = value << 4 | digit,
            None => break,
        }
    }
    Rgb::from_u24(value)
}

/// Parse a hex color under the given [`ParseMode`].
///
/// # Errors
///
/// In [`ParseMode::Strict`], returns [`ColorError::InvalidHex`] unless the
/// input is exactly six hex digits, optionally prefixed by `#`. Lenient
/// parsing never fails.
pub fn parse_hex(hex: &str, mode: ParseMode) -> Result<Rgb, ColorError> {
    match mode {
        ParseMode::Lenient => Ok(hex_to_rgb(hex)),
        ParseMode::Strict => parse_strict(hex).ok_or_else(|| ColorError::InvalidHex(hex.to_owned())),
    }
}

/// Whether `hex` is exactly `#rrggbb` or `rrggbb`.
#[must_use]
pub fn is_well_formed(hex: &str) -> bool {
    parse_strict(hex).is_some()
}

fn parse_strict(hex: &str) -> Option<Rgb> {
    let s = hex.strip_prefix('#').unwrap_or(hex);
    let bytes = s.as_bytes();
    if bytes.len() != 6 {
        return None;
    }
    let r = parse_hex_byte(&bytes[0..2])?;
    let g = parse_hex_byte(&bytes[2..4])?;
    let b = parse_hex_byte(&bytes[4..6])?;
    Some(Rgb::new(r, g, b))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Formatting ──────────────────────────────────────────────────────────────

/// Format a color as `#rrggbb` (lowercase, zero-padded).
#[must_use]
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_string()
}

/// Append a two-digit uppercase alpha suffix to a hex color.
///
/// `opacity` is clamped to [0, 1] and scaled to [0, 255]; NaN counts as
/// fully opaque. A missing `#` is added, and anything past `#rrggbb` is
/// dropped before the suffix goes on.
///
/// ```
/// use tonal_color::with_alpha;
///
/// assert_eq!(with_alpha("#336699", 1.0), "#336699FF");
/// assert_eq!(with_alpha("336699", 0.0), "#33669900");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn with_alpha(color: &str, opacity: f64) -> String {
    let opacity = if opacity.is_nan() { 1.0 } else { opacity.clamp(0.0, 1.0) };
    // In [0, 255] after the clamp.
    let alpha = (opacity * 255.0).round() as u8;

    let head: String = if color.starts_with('#') {
        color.chars().take(7).collect()
    } else {
        std::iter::once('#').chain(color.chars().take(6)).collect()
    };
    format!("{head}{alpha:02X}")
}

/// Linear per-channel interpolation from `c0` (ratio 0) to `c1` (ratio 1).
///
/// `ratio` is clamped to [0, 1] (NaN counts as 0). Channels are floored,
/// not rounded, so the midpoint of `#000000` and `#010101` is `#000000`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops
)]
pub fn interpolate(c0: &str, c1: &str, ratio: f64) -> String {
    let t = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    let from = hex_to_rgb(c0);
    let to = hex_to_rgb(c1);

    // Unfused multiply-add: a fused one moves results across integer
    // boundaries, and the floor makes that visible.
    let mix = |a: u8, b: u8| (f64::from(a) * (1.0 - t) + f64::from(b) * t).floor() as u8;

    rgb_to_hex(Rgb::new(mix(from.r, to.r), mix(from.g, to.g), mix(from.b, to.b)))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Round-trips ──────────────────────────────────────────────────────

    #[test]
    fn hex_roundtrip_every_channel_value() {
        // Each channel independently across its whole range, with the other
        // two held at values that exercise zero-padding and the high nibble.
        for v in 0..=255u8 {
            for rgb in [Rgb::new(v, 0, 255), Rgb::new(15, v, 16), Rgb::new(255, 1, v)] {
                assert_eq!(hex_to_rgb(&rgb_to_hex(rgb)), rgb);
            }
        }
    }

    #[test]
    fn hex_roundtrip_strided_cube() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(17) {
                for b in (0..=255u8).step_by(51) {
                    let rgb = Rgb::new(r, g, b);
                    assert_eq!(hex_to_rgb(&rgb.to_hex()), rgb);
                }
            }
        }
    }

    #[test]
    fn u24_unpacking_keeps_low_bits() {
        let rgb = Rgb::new(0x12, 0x34, 0x56);
        assert_eq!(Rgb::from_u24(0x0012_3456), rgb);
        assert_eq!(Rgb::from_u24(0xff12_3456), rgb);
    }

    // ── Formatting ───────────────────────────────────────────────────────

    #[test]
    fn hex_is_lowercase_and_padded() {
        assert_eq!(rgb_to_hex(Rgb::new(0, 10, 171)), "#000aab");
        assert_eq!(rgb_to_hex(Rgb::WHITE), "#ffffff");
    }

    // ── Lenient Parsing ──────────────────────────────────────────────────

    #[test]
    fn lenient_accepts_missing_hash_and_uppercase() {
        assert_eq!(hex_to_rgb("7CB9D0"), Rgb::new(124, 185, 208));
        assert_eq!(hex_to_rgb("#7cb9d0"), Rgb::new(124, 185, 208));
    }

    #[test]
    fn lenient_reads_leading_digits_only() {
        // "#12zz56" → 0x12
        assert_eq!(hex_to_rgb("#12zz56"), Rgb::new(0, 0, 0x12));
        // Short input is right-aligned, like any integer.
        assert_eq!(hex_to_rgb("#fff"), Rgb::new(0, 0x0f, 0xff));
    }

    #[test]
    fn lenient_garbage_is_black() {
        assert_eq!(hex_to_rgb("xyz"), Rgb::BLACK);
        assert_eq!(hex_to_rgb(""), Rgb::BLACK);
        assert_eq!(hex_to_rgb("#"), Rgb::BLACK);
    }

    #[test]
    fn lenient_long_input_keeps_low_bits() {
        // 0xff336699 → low 24 bits
        assert_eq!(hex_to_rgb("#ff336699"), Rgb::new(0x33, 0x66, 0x99));
    }

    // ── Strict Parsing ───────────────────────────────────────────────────

    #[test]
    fn strict_accepts_well_formed() {
        assert_eq!(parse_hex("#336699", ParseMode::Strict), Ok(Rgb::new(0x33, 0x66, 0x99)));
        assert_eq!(parse_hex("AbCdEf", ParseMode::Strict), Ok(Rgb::new(0xab, 0xcd, 0xef)));
    }

    #[test]
    fn strict_rejects_malformed() {
        for bad in ["#12345", "xyz", "#gggggg", "", "#1234567", "##123456", "#12 456"] {
            assert_eq!(
                parse_hex(bad, ParseMode::Strict),
                Err(ColorError::InvalidHex(bad.to_owned())),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn lenient_mode_never_fails() {
        for input in ["#12345", "xyz", "#gggggg", "", "ü"] {
            assert!(parse_hex(input, ParseMode::Lenient).is_ok());
        }
    }

    // ── Alpha ────────────────────────────────────────────────────────────

    #[test]
    fn alpha_suffix() {
        assert_eq!(with_alpha("#336699", 1.0), "#336699FF");
        assert_eq!(with_alpha("#336699", 0.0), "#33669900");
        assert_eq!(with_alpha("#336699", 0.5), "#33669980");
        assert_eq!(with_alpha("#336699", 0.38), "#33669961");
    }

    #[test]
    fn alpha_clamps_opacity() {
        assert_eq!(with_alpha("#336699", 7.0), "#336699FF");
        assert_eq!(with_alpha("#336699", -3.0), "#33669900");
        assert_eq!(with_alpha("#336699", f64::NAN), "#336699FF");
    }

    #[test]
    fn alpha_adds_hash_and_replaces_existing_alpha() {
        assert_eq!(with_alpha("336699", 1.0), "#336699FF");
        assert_eq!(with_alpha("#33669980", 0.0), "#33669900");
    }

    // ── Interpolation ────────────────────────────────────────────────────

    #[test]
    fn interpolate_endpoints() {
        assert_eq!(interpolate("#102030", "#f0e0d0", 0.0), "#102030");
        assert_eq!(interpolate("#102030", "#f0e0d0", 1.0), "#f0e0d0");
    }

    #[test]
    fn interpolate_clamps_ratio() {
        assert_eq!(interpolate("#102030", "#f0e0d0", -2.0), "#102030");
        assert_eq!(interpolate("#102030", "#f0e0d0", 9.0), "#f0e0d0");
        assert_eq!(interpolate("#102030", "#f0e0d0", f64::NAN), "#102030");
    }

    #[test]
    fn interpolate_floors() {
        // 0.5 between 0 and 1 is 0.5, floored to 0 (rounding would give 1).
        assert_eq!(interpolate("#000000", "#010101", 0.5), "#000000");
        assert_eq!(interpolate("#000000", "#ffffff", 0.5), "#7f7f7f");
    }
}
