//! Tonal palette derivation — the bridge from one seed to every role.
//!
//! A seed color's HSL triple `(h, s, l)` is turned into six role seeds by
//! fixed hue/saturation rules (see [`Policy`]), all at the seed's
//! lightness. The four chromatic roles are then expanded into tones; the
//! two neutrals stay single colors that theming layers luminance-scale on
//! demand for surfaces and text.

use std::collections::BTreeMap;

use tonal_color::{Hsl, ParseMode, hex_to_hsl, hsl_to_hex, parse_hex};
use tracing::{debug, trace};

use crate::error::PaletteError;
use crate::harmonize::harmonize;
use crate::tone::{ModdedThemeTones, ThemeTones, generate_tones};

/// Caller-named custom colors: key → `#rrggbb`.
pub type CustomColors = BTreeMap<String, String>;

/// Hue of the error role, in degrees, regardless of the seed.
pub const ERROR_HUE_DEGREES: f64 = 25.0;
pub const ERROR_SATURATION: f64 = 0.84;
/// Tertiary sits this far round the wheel from the seed.
pub const TERTIARY_HUE_OFFSET_DEGREES: f64 = 60.0;

/// Container alpha ratio for overlay-style custom colors and the
/// container/text helper in [`crate::scheme`].
pub(crate) const CONTAINER_RATIO: f64 = 0.1;

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Saturation policy used to derive role seeds from a seed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// A bold palette around the seed: primary saturation is boosted to at
    /// least 0.48, the other roles get fixed saturations.
    #[default]
    Standard,
    /// The seed must stay dominant (e.g. it was sampled from displayed
    /// content): every role's saturation is a fraction of the seed's.
    Content,
}

impl Policy {
    /// Derive the six role seeds from the seed's HSL.
    #[must_use]
    pub fn role_seeds(self, seed: Hsl) -> RoleSeeds {
        let Hsl { h, s, l } = seed;
        let tertiary_hue = h + TERTIARY_HUE_OFFSET_DEGREES / 360.0;
        let error_hue = ERROR_HUE_DEGREES / 360.0;
        let role = |h: f64, s: f64| hsl_to_hex(Hsl::new(h, s, l));

        match self {
            Self::Standard => RoleSeeds {
                primary: role(h, s.max(0.48)),
                secondary: role(h, 0.16),
                tertiary: role(tertiary_hue, 0.24),
                error: role(error_hue, ERROR_SATURATION),
                neutral: role(h, 0.04),
                neutral_variant: role(h, 0.08),
            },
            Self::Content => RoleSeeds {
                primary: role(h, s),
                secondary: role(h, s / 3.0),
                tertiary: role(tertiary_hue, s / 2.0),
                error: role(error_hue, ERROR_SATURATION),
                neutral: role(h, (s / 12.0).min(0.04)),
                neutral_variant: role(h, (s / 6.0).min(0.08)),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// RoleSeeds / DeriveOptions
// ---------------------------------------------------------------------------

/// The six colors a [`TonalPalette`] is built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoleSeeds {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
    pub error: String,
    pub neutral: String,
    pub neutral_variant: String,
}

impl RoleSeeds {
    #[must_use]
    pub fn new(
        primary: impl Into<String>,
        secondary: impl Into<String>,
        tertiary: impl Into<String>,
        error: impl Into<String>,
        neutral: impl Into<String>,
        neutral_variant: impl Into<String>,
    ) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
            tertiary: tertiary.into(),
            error: error.into(),
            neutral: neutral.into(),
            neutral_variant: neutral_variant.into(),
        }
    }
}

/// Inputs to [`derive_tonal_palette`] beyond the seed itself.
#[derive(Debug, Clone, Default)]
pub struct DeriveOptions {
    pub custom_colors: CustomColors,
    pub policy: Policy,
    pub parse_mode: ParseMode,
}

// ---------------------------------------------------------------------------
// TonalPalette
// ---------------------------------------------------------------------------

/// Every role of a theme, rendered for both modes.
///
/// Built once and then only read. `source` is the color custom colors are
/// harmonized toward: the seed when derived, the primary when built from
/// explicit roles (unless overridden).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TonalPalette {
    source: String,
    primary: ModdedThemeTones,
    secondary: ModdedThemeTones,
    tertiary: ModdedThemeTones,
    error: ModdedThemeTones,
    neutral: String,
    neutral_variant: String,
    custom_colors: BTreeMap<String, ModdedThemeTones>,
}

impl TonalPalette {
    /// Build from explicit role colors, harmonizing custom colors toward
    /// the primary.
    #[must_use]
    pub fn new(seeds: RoleSeeds, custom_colors: &CustomColors) -> Self {
        let source = seeds.primary.clone();
        Self::with_source(seeds, custom_colors, source)
    }

    /// Build from explicit role colors with an explicit harmonization source.
    #[must_use]
    pub fn with_source(seeds: RoleSeeds, custom_colors: &CustomColors, source: impl Into<String>) -> Self {
        let source = source.into();
        let custom_colors = custom_colors
            .iter()
            .map(|(key, color)| {
                trace!(key, color, "blending custom color");
                (key.clone(), custom_tones(&source, color, true, false))
            })
            .collect();

        Self {
            primary: generate_tones(&seeds.primary),
            secondary: generate_tones(&seeds.secondary),
            tertiary: generate_tones(&seeds.tertiary),
            error: generate_tones(&seeds.error),
            neutral: seeds.neutral,
            neutral_variant: seeds.neutral_variant,
            custom_colors,
            source,
        }
    }

    /// Derive a whole palette from one seed color.
    ///
    /// Parsing is lenient: a malformed seed still yields a palette. Use
    /// [`derive_tonal_palette`] with [`ParseMode::Strict`] to reject it.
    #[must_use]
    pub fn from_color(seed: &str, custom_colors: &CustomColors, policy: Policy) -> Self {
        debug!(seed, ?policy, custom = custom_colors.len(), "deriving tonal palette");
        let seeds = policy.role_seeds(hex_to_hsl(seed));
        Self::with_source(seeds, custom_colors, seed)
    }

    /// Tones for an ad-hoc color in this palette's family.
    ///
    /// With `blend`, the color is first harmonized toward [`Self::source`].
    /// The result is the primary role of a standard palette derived from
    /// that color. With `transparent`, container tones carry an alpha
    /// suffix (0.9 in light mode, 0.1 in dark) for overlay use; base tones
    /// stay opaque.
    #[must_use]
    pub fn custom_color(&self, color: &str, blend: bool, transparent: bool) -> ModdedThemeTones {
        custom_tones(&self.source, color, blend, transparent)
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub const fn primary(&self) -> &ModdedThemeTones {
        &self.primary
    }

    #[must_use]
    pub const fn secondary(&self) -> &ModdedThemeTones {
        &self.secondary
    }

    #[must_use]
    pub const fn tertiary(&self) -> &ModdedThemeTones {
        &self.tertiary
    }

    #[must_use]
    pub const fn error(&self) -> &ModdedThemeTones {
        &self.error
    }

    #[must_use]
    pub fn neutral(&self) -> &str {
        &self.neutral
    }

    #[must_use]
    pub fn neutral_variant(&self) -> &str {
        &self.neutral_variant
    }

    #[must_use]
    pub const fn custom_colors(&self) -> &BTreeMap<String, ModdedThemeTones> {
        &self.custom_colors
    }

    /// The four tone-expanded roles with their names, in display order.
    #[must_use]
    pub fn roles(&self) -> [(&'static str, &ModdedThemeTones); 4] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("tertiary", &self.tertiary),
            ("error", &self.error),
        ]
    }
}

/// Derive a palette, validating inputs first under `options.parse_mode`.
///
/// # Errors
///
/// With [`ParseMode::Strict`], returns [`PaletteError::Seed`] for a
/// malformed seed and [`PaletteError::CustomColor`] for the first malformed
/// custom color (in key order). Lenient derivation never fails.
pub fn derive_tonal_palette(seed: &str, options: &DeriveOptions) -> Result<TonalPalette, PaletteError> {
    if options.parse_mode == ParseMode::Strict {
        parse_hex(seed, ParseMode::Strict)?;
        for (key, color) in &options.custom_colors {
            parse_hex(color, ParseMode::Strict).map_err(|source| PaletteError::CustomColor {
                key: key.clone(),
                source,
            })?;
        }
    }
    Ok(TonalPalette::from_color(seed, &options.custom_colors, options.policy))
}

/// Shared by [`TonalPalette::custom_color`] and [`crate::scheme::Scheme`],
/// which only keeps the source.
pub(crate) fn custom_tones(source: &str, color: &str, blend: bool, transparent: bool) -> ModdedThemeTones {
    let color = if blend { harmonize(color, source) } else { color.to_owned() };

    // Only the primary role of the standard derivation is needed.
    let primary = Policy::Standard.role_seeds(hex_to_hsl(&color)).primary;
    let tones = generate_tones(&primary);
    if !transparent {
        return tones;
    }

    ModdedThemeTones {
        light: ThemeTones {
            container: tones.light.container.with_transparency(1.0 - CONTAINER_RATIO),
            base: tones.light.base,
        },
        dark: ThemeTones {
            container: tones.dark.container.with_transparency(CONTAINER_RATIO),
            base: tones.dark.base,
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
