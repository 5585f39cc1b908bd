//! Tone generation — one base color to sixteen fixed-lightness colors.
//!
//! Every tone is the base color with its HSL lightness replaced by a
//! constant target (hue and saturation are kept). The targets:
//!
//! | field          | dark.base | dark.container | light.base | light.container |
//! |----------------|-----------|----------------|------------|-----------------|
//! | main           | 80        | 30             | 40         | 90              |
//! | light          | 90        | 35             | 50         | 80              |
//! | dark           | 70        | 25             | 30         | 95              |
//! | contrast_text  | 20        | 90             | 100        | 10              |

use tonal_color::{Hsl, hex_to_hsl, hsl_to_hex, with_alpha};

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Light or dark rendering of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

// ---------------------------------------------------------------------------
// Lightness targets
// ---------------------------------------------------------------------------

/// HSL lightness targets, in percent, for the four fields of a
/// [`PaletteColor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneTargets {
    pub main: u8,
    pub light: u8,
    pub dark: u8,
    pub contrast_text: u8,
}

pub const DARK_BASE: ToneTargets = ToneTargets { main: 80, light: 90, dark: 70, contrast_text: 20 };
pub const DARK_CONTAINER: ToneTargets = ToneTargets { main: 30, light: 35, dark: 25, contrast_text: 90 };
pub const LIGHT_BASE: ToneTargets = ToneTargets { main: 40, light: 50, dark: 30, contrast_text: 100 };
pub const LIGHT_CONTAINER: ToneTargets = ToneTargets { main: 90, light: 80, dark: 95, contrast_text: 10 };

// ---------------------------------------------------------------------------
// Luminance scale
// ---------------------------------------------------------------------------

/// Replace the HSL lightness of `base` with `value / 100`, keeping hue and
/// saturation.
///
/// `value` is nominally 0–100; values outside that range saturate to black
/// or white. This is the single primitive every tone is built from, and the
/// entry point theming layers use for one-off surfaces (backgrounds, text,
/// outlines) at arbitrary lightness.
///
/// ```
/// use tonal_palette::luminance_scale;
///
/// assert_eq!(luminance_scale("#336699", 100.0), "#ffffff");
/// assert_eq!(luminance_scale("#336699", 0.0), "#000000");
/// ```
#[must_use]
pub fn luminance_scale(base: &str, value: f64) -> String {
    scale_hsl(hex_to_hsl(base), value)
}

fn scale_hsl(hsl: Hsl, value: f64) -> String {
    hsl_to_hex(hsl.with_lightness(value / 100.0))
}

// ---------------------------------------------------------------------------
// PaletteColor / ThemeTones / ModdedThemeTones
// ---------------------------------------------------------------------------

/// Four colors of one hue/saturation family at different lightness.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaletteColor {
    pub main: String,
    pub light: String,
    pub dark: String,
    pub contrast_text: String,
}

impl PaletteColor {
    /// Scale `color` to each of `targets`.
    #[must_use]
    pub fn from_targets(color: &str, targets: ToneTargets) -> Self {
        Self::from_hsl(hex_to_hsl(color), targets)
    }

    fn from_hsl(hsl: Hsl, targets: ToneTargets) -> Self {
        Self {
            main: scale_hsl(hsl, f64::from(targets.main)),
            light: scale_hsl(hsl, f64::from(targets.light)),
            dark: scale_hsl(hsl, f64::from(targets.dark)),
            contrast_text: scale_hsl(hsl, f64::from(targets.contrast_text)),
        }
    }

    /// Apply the same alpha suffix to all four fields.
    #[must_use]
    pub fn with_transparency(&self, alpha: f64) -> Self {
        Self {
            main: with_alpha(&self.main, alpha),
            light: with_alpha(&self.light, alpha),
            dark: with_alpha(&self.dark, alpha),
            contrast_text: with_alpha(&self.contrast_text, alpha),
        }
    }

    /// Field names paired with their colors, in display order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("main", self.main.as_str()),
            ("light", self.light.as_str()),
            ("dark", self.dark.as_str()),
            ("contrast_text", self.contrast_text.as_str()),
        ]
    }
}

/// One role in one mode: foreground-ish `base` and background-ish
/// `container` tones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThemeTones {
    pub base: PaletteColor,
    pub container: PaletteColor,
}

/// One role across both modes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModdedThemeTones {
    pub light: ThemeTones,
    pub dark: ThemeTones,
}

impl ModdedThemeTones {
    #[must_use]
    pub const fn get(&self, mode: Mode) -> &ThemeTones {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    #[must_use]
    pub fn into_mode(self, mode: Mode) -> ThemeTones {
        match mode {
            Mode::Light => self.light,
            Mode::Dark => self.dark,
        }
    }
}

/// Expand one color into its full set of tones for both modes.
#[must_use]
pub fn generate_tones(color: &str) -> ModdedThemeTones {
    let hsl = hex_to_hsl(color);
    ModdedThemeTones {
        light: ThemeTones {
            base: PaletteColor::from_hsl(hsl, LIGHT_BASE),
            container: PaletteColor::from_hsl(hsl, LIGHT_CONTAINER),
        },
        dark: ThemeTones {
            base: PaletteColor::from_hsl(hsl, DARK_BASE),
            container: PaletteColor::from_hsl(hsl, DARK_CONTAINER),
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
