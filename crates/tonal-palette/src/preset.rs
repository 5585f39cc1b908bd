//! Named preset palettes — ready-to-use configurations.
//!
//! Each preset is either a hand-picked set of six role colors or a single
//! seed run through the standard derivation. Palettes are built on demand;
//! nothing here is cached or shared.

use crate::palette::{CustomColors, Policy, RoleSeeds, TonalPalette};

/// The preset used when none is named.
pub const DEFAULT_PRESET: &str = "Default - Cozy Latte";

/// Look up a preset palette by display name (or `"default"`).
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn preset(name: &str) -> Option<TonalPalette> {
    preset_with(name, &CustomColors::new())
}

/// [`preset`] with custom colors blended toward the preset's source.
#[must_use]
pub fn preset_with(name: &str, custom_colors: &CustomColors) -> Option<TonalPalette> {
    let seed = |hex: &str| TonalPalette::from_color(hex, custom_colors, Policy::Standard);

    Some(match name {
        "default" | DEFAULT_PRESET => TonalPalette::new(
            RoleSeeds::new("#ffb86e", "#a88b71", "#71ccff", "#ffb4ab", "#988f89", "#50453a"),
            custom_colors,
        ),
        "Studious Blue" => TonalPalette::new(
            RoleSeeds::new("#8ecdff", "#8293a2", "#f4bf00", "#ffb4ab", "#8f9193", "#41474d"),
            custom_colors,
        ),
        "Dedicated Aqua" => seed("#42ebb5"),
        "Dreamy Rose" => seed("#d998eb"),
        "Nerdy Orange" => seed("#db946b"),
        "Luxurious Green" => seed("#306225"),
        "Disgusting Yellow" => seed("#ddff00"),
        "Angry Red" => seed("#ff0000"),
        "Coffee Beans Brown" => seed("#6b5545"),
        _ => return None,
    })
}

/// List all preset display names.
#[must_use]
pub const fn preset_names() -> &'static [&'static str] {
    &[
        DEFAULT_PRESET,
        "Studious Blue",
        "Dedicated Aqua",
        "Dreamy Rose",
        "Nerdy Orange",
        "Luxurious Green",
        "Disgusting Yellow",
        "Angry Red",
        "Coffee Beans Brown",
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
