//! Mode-resolved schemes — what a theming layer actually reads.
//!
//! A [`TonalPalette`] holds both modes side by side and leaves the neutrals
//! unexpanded. A [`Scheme`] picks one mode and resolves everything a theme
//! needs into concrete colors: role tones, an always-green success role,
//! background and paper surfaces, text colors and an outline.

use std::collections::BTreeMap;

use tonal_color::{interpolate, with_alpha};

use crate::palette::{CONTAINER_RATIO, TonalPalette, custom_tones};
use crate::tone::{Mode, PaletteColor, ThemeTones, luminance_scale};

/// Seed of the success role, harmonized toward each palette's source.
pub const SUCCESS_SEED: &str = "#66bb6a";

/// Alpha of disabled text.
pub const DISABLED_TEXT_OPACITY: f64 = 0.38;

/// Neutral lightness levels (percent) for one mode.
struct SurfaceLevels {
    background: u8,
    paper: u8,
    text_primary: u8,
    text_secondary: u8,
    outline: u8,
}

const DARK_SURFACES: SurfaceLevels = SurfaceLevels {
    background: 10,
    paper: 30,
    text_primary: 90,
    text_secondary: 70,
    outline: 60,
};

const LIGHT_SURFACES: SurfaceLevels = SurfaceLevels {
    background: 99,
    paper: 90,
    text_primary: 10,
    text_secondary: 30,
    outline: 50,
};

/// Page and card surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Background {
    /// Page background, from the neutral role.
    pub default: String,
    /// Raised surfaces, from the neutral-variant role.
    pub paper: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextColors {
    pub primary: String,
    pub secondary: String,
    /// Black at 38% opacity (`#rrggbbaa`).
    pub disabled: String,
}

/// Colors for a chip/badge built around an arbitrary color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerAndText {
    /// Foreground accent.
    pub base: String,
    /// Text drawn on `background`.
    pub text: String,
    /// Container fill: alpha-faded, or mixed into the paper color.
    pub background: String,
}

/// One mode of a [`TonalPalette`], fully resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheme {
    pub mode: Mode,

    pub primary: PaletteColor,
    pub primary_container: PaletteColor,
    pub secondary: PaletteColor,
    pub secondary_container: PaletteColor,
    /// The tertiary role.
    pub info: PaletteColor,
    pub info_container: PaletteColor,
    pub error: PaletteColor,
    pub error_container: PaletteColor,
    pub success: PaletteColor,

    pub background: Background,
    pub text: TextColors,
    pub outline: String,

    pub custom_colors: BTreeMap<String, ThemeTones>,

    source: String,
}

impl Scheme {
    #[must_use]
    pub fn new(palette: &TonalPalette, mode: Mode) -> Self {
        let levels = match mode {
            Mode::Light => &LIGHT_SURFACES,
            Mode::Dark => &DARK_SURFACES,
        };
        let neutral = |value: u8| luminance_scale(palette.neutral(), f64::from(value));
        let neutral_variant = |value: u8| luminance_scale(palette.neutral_variant(), f64::from(value));

        let primary = palette.primary().get(mode).clone();
        let secondary = palette.secondary().get(mode).clone();
        let tertiary = palette.tertiary().get(mode).clone();
        let error = palette.error().get(mode).clone();
        let success = palette.custom_color(SUCCESS_SEED, true, false).into_mode(mode).base;

        Self {
            mode,
            primary: primary.base,
            primary_container: primary.container,
            secondary: secondary.base,
            secondary_container: secondary.container,
            info: tertiary.base,
            info_container: tertiary.container,
            error: error.base,
            error_container: error.container,
            success,
            background: Background {
                default: neutral(levels.background),
                paper: neutral_variant(levels.paper),
            },
            text: TextColors {
                primary: neutral(levels.text_primary),
                secondary: neutral(levels.text_secondary),
                disabled: with_alpha(&neutral(0), DISABLED_TEXT_OPACITY),
            },
            outline: neutral_variant(levels.outline),
            custom_colors: palette
                .custom_colors()
                .iter()
                .map(|(key, tones)| (key.clone(), tones.get(mode).clone()))
                .collect(),
            source: palette.source().to_owned(),
        }
    }

    #[must_use]
    pub fn light(palette: &TonalPalette) -> Self {
        Self::new(palette, Mode::Light)
    }

    #[must_use]
    pub fn dark(palette: &TonalPalette) -> Self {
        Self::new(palette, Mode::Dark)
    }

    /// This mode's tones for an ad-hoc color; see
    /// [`TonalPalette::custom_color`].
    #[must_use]
    pub fn custom_color(&self, color: &str, blend: bool, transparent: bool) -> ThemeTones {
        custom_tones(&self.source, color, blend, transparent).into_mode(self.mode)
    }

    /// Accent, text and fill colors for a small container around `color`.
    ///
    /// The fill is the container tone at ratio 0.1 (light) or 0.9 (dark):
    /// as an alpha suffix when `transparent`, otherwise mixed with the
    /// paper color at that ratio.
    #[must_use]
    pub fn container_and_text(&self, color: &str, transparent: bool) -> ContainerAndText {
        let tones = self.custom_color(color, true, false);
        let ratio = match self.mode {
            Mode::Light => CONTAINER_RATIO,
            Mode::Dark => 1.0 - CONTAINER_RATIO,
        };

        let background = if transparent {
            with_alpha(&tones.container.main, ratio)
        } else {
            interpolate(&tones.container.main, &self.background.paper, ratio)
        };

        ContainerAndText {
            base: tones.base.main,
            text: tones.container.contrast_text,
            background,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{CustomColors, Policy};
    use pretty_assertions::assert_eq;

    fn palette() -> TonalPalette {
        let custom: CustomColors = [("tag".to_owned(), "#ab47bc".to_owned())].into_iter().collect();
        TonalPalette::from_color("#7cb9d0", &custom, Policy::Standard)
    }

    #[test]
    fn light_surfaces() {
        let p = palette();
        let s = Scheme::light(&p);
        assert_eq!(s.background.default, luminance_scale(p.neutral(), 99.0));
        assert_eq!(s.background.paper, luminance_scale(p.neutral_variant(), 90.0));
        assert_eq!(s.text.primary, luminance_scale(p.neutral(), 10.0));
        assert_eq!(s.text.secondary, luminance_scale(p.neutral(), 30.0));
        assert_eq!(s.outline, luminance_scale(p.neutral_variant(), 50.0));
    }

    #[test]
    fn dark_surfaces() {
        let p = palette();
        let s = Scheme::dark(&p);
        assert_eq!(s.background.default, luminance_scale(p.neutral(), 10.0));
        assert_eq!(s.background.paper, luminance_scale(p.neutral_variant(), 30.0));
        assert_eq!(s.text.primary, luminance_scale(p.neutral(), 90.0));
        assert_eq!(s.text.secondary, luminance_scale(p.neutral(), 70.0));
        assert_eq!(s.outline, luminance_scale(p.neutral_variant(), 60.0));
    }

    #[test]
    fn disabled_text_is_translucent_black() {
        let s = Scheme::light(&palette());
        assert_eq!(s.text.disabled, "#00000061");
    }

    #[test]
    fn roles_come_from_the_palette_mode() {
        let p = palette();
        let s = Scheme::dark(&p);
        assert_eq!(s.primary, p.primary().dark.base);
        assert_eq!(s.primary_container, p.primary().dark.container);
        assert_eq!(s.info, p.tertiary().dark.base);
        assert_eq!(s.error_container, p.error().dark.container);
        assert_eq!(s.custom_colors["tag"], p.custom_colors()["tag"].dark);
    }

    #[test]
    fn success_is_harmonized_green() {
        let p = palette();
        let s = Scheme::light(&p);
        assert_eq!(s.success, p.custom_color(SUCCESS_SEED, true, false).light.base);
    }

    #[test]
    fn container_and_text_transparent() {
        let p = palette();
        let light = Scheme::light(&p).container_and_text("#ab47bc", true);
        let dark = Scheme::dark(&p).container_and_text("#ab47bc", true);
        let tones = p.custom_color("#ab47bc", true, false);

        assert_eq!(light.base, tones.light.base.main);
        assert_eq!(light.text, tones.light.container.contrast_text);
        assert_eq!(light.background, format!("{}1A", tones.light.container.main));
        assert_eq!(dark.background, format!("{}E6", tones.dark.container.main));
    }

    #[test]
    fn container_and_text_opaque_mixes_with_paper() {
        let p = palette();
        let scheme = Scheme::light(&p);
        let result = scheme.container_and_text("#ab47bc", false);
        let container = &p.custom_color("#ab47bc", true, false).light.container.main;

        assert_eq!(result.background, interpolate(container, &scheme.background.paper, 0.1));
        assert_eq!(result.background.len(), 7);
    }

    #[test]
    fn scheme_custom_color_matches_palette() {
        let p = palette();
        let s = Scheme::dark(&p);
        assert_eq!(s.custom_color("#ffa726", false, true), p.custom_color("#ffa726", false, true).dark);
    }
}
