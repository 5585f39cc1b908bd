// SPDX-License-Identifier: MIT
//
// tonal — preview the palette derived from a seed color.
//
// Wires the two library crates together:
//
//   tonal-color   → hex / RGB / HSL codec, hue arithmetic
//   tonal-palette → role derivation, tones, schemes, presets
//
// Flow:
//
//   argv → Cli → TonalPalette (seed or preset, + custom colors)
//        → Scheme per mode → 24-bit ANSI swatches on stdout
//
// Logging goes to stderr through tracing-subscriber; RUST_LOG overrides
// the default filter.

use std::fmt::Write as _;
use std::process;
use std::sync::LazyLock;

use clap::{Parser, ValueEnum};
use regex::Regex;
use thiserror::Error;
use tracing::{debug, info};

use tonal_color::{hex_to_rgb, parse_hex};
use tonal_palette::preset::{DEFAULT_PRESET, preset_with};
use tonal_palette::{
    CustomColors, DeriveOptions, Mode, PaletteColor, PaletteError, ParseMode, Policy, Scheme,
    TonalPalette, derive_tonal_palette, preset_names,
};

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "tonal", version, about = "Derive light/dark tonal palettes from a seed color")]
struct Cli {
    /// Seed color (`#rrggbb`). Defaults to the default preset.
    seed: Option<String>,

    /// Use a named preset instead of a seed.
    #[arg(short, long, conflicts_with = "seed")]
    preset: Option<String>,

    /// Keep the seed dominant: scale role saturations down from the seed's.
    #[arg(long, conflicts_with = "preset")]
    content: bool,

    /// Extra color harmonized toward the seed, as NAME=#RRGGBB. Repeatable.
    #[arg(short, long = "custom", value_name = "NAME=#RRGGBB")]
    customs: Vec<String>,

    /// Which mode(s) to print.
    #[arg(short, long, value_enum, default_value_t = ModeArg::Both)]
    mode: ModeArg,

    /// Reject malformed hex colors instead of deriving something anyway.
    #[arg(long)]
    strict: bool,

    /// Print hex values only, without ANSI swatches.
    #[arg(long)]
    plain: bool,

    /// List preset names and exit.
    #[arg(long)]
    list_presets: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Light,
    Dark,
    Both,
}

impl ModeArg {
    const fn modes(self) -> &'static [Mode] {
        match self {
            Self::Light => &[Mode::Light],
            Self::Dark => &[Mode::Dark],
            Self::Both => &Mode::ALL,
        }
    }
}

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error("custom color {0:?} is not NAME=COLOR")]
    CustomSyntax(String),

    #[error("unknown preset {0:?} (try --list-presets)")]
    UnknownPreset(String),
}

// ─── Palette resolution ─────────────────────────────────────────────────────

static CUSTOM_ARG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z0-9_.-]+)\s*=\s*(\S+)\s*$").expect("custom color pattern is valid")
});

/// Parse repeated `NAME=COLOR` arguments. Later names override earlier ones.
fn parse_customs(args: &[String]) -> Result<CustomColors, CliError> {
    args.iter()
        .map(|arg| {
            let caps = CUSTOM_ARG.captures(arg).ok_or_else(|| CliError::CustomSyntax(arg.clone()))?;
            Ok((caps[1].to_owned(), caps[2].to_owned()))
        })
        .collect()
}

fn resolve_palette(cli: &Cli) -> Result<TonalPalette, CliError> {
    let custom_colors = parse_customs(&cli.customs)?;

    let Some(seed) = cli.seed.as_deref() else {
        let name = cli.preset.as_deref().unwrap_or(DEFAULT_PRESET);
        debug!(name, "using preset");
        if cli.strict {
            for (key, color) in &custom_colors {
                parse_hex(color, ParseMode::Strict).map_err(|source| PaletteError::CustomColor {
                    key: key.clone(),
                    source,
                })?;
            }
        }
        return preset_with(name, &custom_colors).ok_or_else(|| CliError::UnknownPreset(name.to_owned()));
    };

    Ok(derive_tonal_palette(seed, &options(cli, custom_colors))?)
}

fn options(cli: &Cli, custom_colors: CustomColors) -> DeriveOptions {
    DeriveOptions {
        custom_colors,
        policy: if cli.content { Policy::Content } else { Policy::Standard },
        parse_mode: if cli.strict { ParseMode::Strict } else { ParseMode::Lenient },
    }
}

// ─── Rendering ──────────────────────────────────────────────────────────────

/// A four-cell 24-bit background swatch followed by the hex value.
///
/// An `#rrggbbaa` alpha suffix is kept in the label but not in the block,
/// which shows the opaque color.
fn swatch(hex: &str, plain: bool) -> String {
    if plain {
        return hex.to_owned();
    }
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let rgb = hex_to_rgb(digits.get(..6).unwrap_or(digits));
    format!("\x1b[48;2;{};{};{}m    \x1b[0m {hex}", rgb.r, rgb.g, rgb.b)
}

fn render_palette_color(out: &mut String, label: &str, color: &PaletteColor, plain: bool) {
    let _ = write!(out, "  {label:<22}");
    for (_, hex) in color.fields() {
        let _ = write!(out, " {}", swatch(hex, plain));
    }
    out.push('\n');
}

fn render_scheme(scheme: &Scheme, plain: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (main / light / dark / contrast_text)", scheme.mode.name());

    let roles: [(&str, &PaletteColor); 9] = [
        ("primary", &scheme.primary),
        ("primary_container", &scheme.primary_container),
        ("secondary", &scheme.secondary),
        ("secondary_container", &scheme.secondary_container),
        ("info", &scheme.info),
        ("info_container", &scheme.info_container),
        ("error", &scheme.error),
        ("error_container", &scheme.error_container),
        ("success", &scheme.success),
    ];
    for (label, color) in roles {
        render_palette_color(&mut out, label, color, plain);
    }
    for (key, tones) in &scheme.custom_colors {
        render_palette_color(&mut out, key, &tones.base, plain);
        render_palette_color(&mut out, &format!("{key}_container"), &tones.container, plain);
    }

    let surfaces: [(&str, &str); 6] = [
        ("background", scheme.background.default.as_str()),
        ("paper", scheme.background.paper.as_str()),
        ("text", scheme.text.primary.as_str()),
        ("text_secondary", scheme.text.secondary.as_str()),
        ("text_disabled", scheme.text.disabled.as_str()),
        ("outline", scheme.outline.as_str()),
    ];
    for (label, hex) in surfaces {
        let _ = writeln!(out, "  {label:<22} {}", swatch(hex, plain));
    }
    out
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("warn,tonal=info"))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if cli.list_presets {
        for name in preset_names() {
            println!("{name}");
        }
        return;
    }

    let palette = resolve_palette(&cli).unwrap_or_else(|e| {
        eprintln!("tonal: {e}");
        process::exit(1);
    });
    info!(source = palette.source(), custom = palette.custom_colors().len(), "palette ready");

    let sections: Vec<String> = cli
        .mode
        .modes()
        .iter()
        .map(|&mode| render_scheme(&Scheme::new(&palette, mode), cli.plain))
        .collect();
    print!("{}", sections.join("\n"));
}

// ─── Tests ──────────────────────────────────────────────────────────────────
