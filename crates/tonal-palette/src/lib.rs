//! # tonal-palette — seed color to complete tonal theme
//!
//! Derives every color a light and a dark theme need from one seed color.
//! Each semantic role gets a hue/saturation policy; each role is then
//! expanded into fixed-lightness tones for both modes.
//!
//! # Architecture
//!
//! ```text
//! seed hex + Policy (+ custom colors)
//!     │
//!     ▼
//! palette.rs:   six role seeds from the seed's HSL (pure math)
//!     │
//!     ├──► harmonize.rs: pull custom colors' hues toward the seed
//!     │
//!     ▼
//! tone.rs:      luminance-scale each role into base/container tones
//!     │
//!     ▼
//! TonalPalette  (immutable; handed to theme construction)
//!     │
//!     ▼
//! scheme.rs:    flat per-mode view: backgrounds, text, outline, success
//! ```
//!
//! # Color Space
//!
//! Everything happens in HSL via [`tonal_color`]. Tones replace lightness
//! and keep hue and saturation, so a role keeps its identity across every
//! tone. Inputs are `#rrggbb` strings; lenient entry points never fail,
//! and [`derive_tonal_palette`] can validate up front with
//! [`ParseMode::Strict`].

pub mod error;
pub mod harmonize;
pub mod label;
pub mod palette;
pub mod preset;
pub mod scheme;
pub mod tone;

pub use error::PaletteError;
pub use harmonize::harmonize;
pub use label::label_color;
pub use palette::{CustomColors, DeriveOptions, Policy, RoleSeeds, TonalPalette, derive_tonal_palette};
pub use preset::{preset, preset_names};
pub use scheme::{ContainerAndText, Scheme};
pub use tone::{Mode, ModdedThemeTones, PaletteColor, ThemeTones, generate_tones, luminance_scale};

pub use tonal_color::ParseMode;
