// SPDX-License-Identifier: MIT
//
// tonal-color — the leaf layer of tonal.
//
// Everything above this crate speaks in `#rrggbb` strings, because that is
// what theming layers consume. Underneath, colors move between three forms:
//
//   hex string ↔ Rgb (u8 channels) ↔ Hsl (h, s, l in [0, 1])
//
// plus the handful of circular-angle helpers that hue arithmetic needs.
// Nothing here allocates beyond the output strings, nothing blocks, and
// the lenient entry points never fail.

// r, g, b, h, s, l are the standard names in color math.
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

pub mod error;
pub mod hex;
pub mod hsl;
pub mod math;

pub use error::ColorError;
pub use hex::{ParseMode, Rgb, hex_to_rgb, interpolate, parse_hex, rgb_to_hex, with_alpha};
pub use hsl::{Hsl, hex_to_hsl, hsl_to_hex, hsl_to_rgb, rgb_to_hsl};
