//! Deterministic colors for text labels (tags, course codes, categories).
//!
//! A label's color comes from a 31-multiplier string hash over UTF-16 code
//! units, so the same text always maps to the same color. Optionally the
//! hue is folded into a window around an anchor color's hue, keeping label
//! colors from clashing with the rest of the theme.

use tonal_color::math::modulo;
use tonal_color::{Rgb, hex_to_hsl, hsl_to_hex, rgb_to_hsl};

/// Width of the hue window around the anchor, as a fraction of a turn.
pub const HUE_WINDOW: f64 = 0.4;

/// 32-bit string hash: `h = 31·h + unit` over UTF-16 code units, wrapping.
#[must_use]
pub fn string_hash(text: &str) -> i32 {
    text.encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Color for `text`, optionally restricted to hues near `anchor`'s.
///
/// The low 24 bits of [`string_hash`] give the unrestricted color, returned
/// like every other color here as lowercase `#rrggbb`. With
/// `restrict_hue`, its hue is folded into a window of width [`HUE_WINDOW`]
/// centred on the anchor's hue; saturation and lightness are kept.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn label_color(text: &str, anchor: &str, restrict_hue: bool) -> String {
    let rgb = Rgb::from_u24(string_hash(text) as u32);
    if !restrict_hue {
        return rgb.to_hex();
    }

    let anchor_hue = hex_to_hsl(anchor).h;
    let min_hue = anchor_hue - HUE_WINDOW / 2.0;
    let max_hue = anchor_hue + HUE_WINDOW / 2.0;

    let hsl = rgb_to_hsl(rgb);
    let hue = modulo(modulo(hsl.h, max_hue - min_hue) + min_hue, 1.0);
    hsl_to_hex(hsl.with_hue(hue))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tonal_color::math::difference_degrees;

    const LABELS: [&str; 12] = [
        "MAT1900", "INF1120", "LOG2410", "exam", "groceries", "Übung", "chem lab", "gym",
        "PHY1501", "history essay", "read ch. 4", "💡 ideas",
    ];

    #[test]
    fn hash_known_values() {
        assert_eq!(string_hash(""), 0);
        assert_eq!(string_hash("a"), 97);
        assert_eq!(string_hash("ab"), 97 * 31 + 98);
        // Wraps like a 32-bit integer.
        assert_eq!(string_hash("polygenelubricants"), i32::MIN);
    }

    #[test]
    fn unrestricted_uses_low_bits() {
        assert_eq!(label_color("", "#7cb9d0", false), "#000000");
        assert_eq!(label_color("ab", "#7cb9d0", false), "#000c21");
    }

    #[test]
    fn unrestricted_is_lowercase_with_hash() {
        for label in LABELS {
            let color = label_color(label, "#7cb9d0", false);
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            assert_eq!(color, color.to_lowercase());
        }
    }

    #[test]
    fn deterministic() {
        for label in LABELS {
            assert_eq!(label_color(label, "#7cb9d0", true), label_color(label, "#7cb9d0", true));
        }
    }

    #[test]
    fn restricted_hue_stays_near_anchor() {
        for anchor in ["#7cb9d0", "#ff0000", "#ddff00"] {
            let anchor_hue = hex_to_hsl(anchor).hue_degrees();
            for label in LABELS {
                let color = hex_to_hsl(&label_color(label, anchor, true));
                // Hue is unreliable once rounded back to 8 bits at low chroma.
                if color.s < 0.25 || color.l < 0.1 || color.l > 0.9 {
                    continue;
                }
                let distance = difference_degrees(color.hue_degrees(), anchor_hue);
                assert!(
                    distance <= HUE_WINDOW * 180.0 + 3.0,
                    "{label:?} near {anchor}: {distance}°"
                );
            }
        }
    }

    #[test]
    fn restriction_keeps_saturation_and_lightness() {
        let free = hex_to_hsl(&label_color("groceries", "#7cb9d0", false));
        let held = hex_to_hsl(&label_color("groceries", "#7cb9d0", true));
        assert!((free.l - held.l).abs() < 0.01);
        assert!((free.s - held.s).abs() < 0.03);
    }
}
