use thiserror::Error;
use tonal_color::ColorError;

/// Failures from strict palette derivation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("seed color: {0}")]
    Seed(#[from] ColorError),

    #[error("custom color {key:?}: {source}")]
    CustomColor {
        key: String,
        #[source]
        source: ColorError,
    },
}
