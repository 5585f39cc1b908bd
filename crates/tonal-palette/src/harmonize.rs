//! Hue harmonization — nudging one color toward another.
//!
//! A custom color (say, a brand green) dropped into a theme built around a
//! blue seed looks foreign. Harmonizing rotates its hue part of the way
//! toward the seed's: half the angular distance, at most 15°, along the
//! shorter arc. Saturation and lightness are untouched, so the color stays
//! recognizably itself.

use tonal_color::math::{difference_degrees, rotation_direction, sanitize_degrees};
use tonal_color::{Hsl, hex_to_hsl, hsl_to_hex};

/// Fraction of the hue distance covered by one harmonization.
pub const BLEND_FACTOR: f64 = 0.5;

/// Upper bound on the hue rotation, in degrees.
pub const MAX_ROTATION_DEGREES: f64 = 15.0;

/// Rotate `from`'s hue toward `to`'s, keeping `from`'s saturation and
/// lightness.
///
/// ```
/// use tonal_palette::harmonize;
///
/// // Red pulled toward blue goes the short way round, through magenta.
/// assert_eq!(harmonize("#ff0000", "#0000ff"), "#ff0040");
/// assert_eq!(harmonize("#7cb9d0", "#7cb9d0"), "#7cb9d0");
/// ```
#[must_use]
pub fn harmonize(from: &str, to: &str) -> String {
    hsl_to_hex(harmonize_hsl(hex_to_hsl(from), hex_to_hsl(to)))
}

/// [`harmonize`] without the hex round-trip.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn harmonize_hsl(from: Hsl, to: Hsl) -> Hsl {
    let from_hue = from.hue_degrees();
    let to_hue = to.hue_degrees();

    let rotation = (difference_degrees(from_hue, to_hue) * BLEND_FACTOR).min(MAX_ROTATION_DEGREES);
    let hue = sanitize_degrees(from_hue + rotation * rotation_direction(from_hue, to_hue));

    from.with_hue(hue / 360.0)
}
