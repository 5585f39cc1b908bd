// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Failures raised by strict color parsing.
///
/// Lenient parsing never produces these; it maps malformed input to a
/// defined (if meaningless) color instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not `#rrggbb` / `rrggbb`.
    #[error("invalid hex color {0:?}: expected 6 hex digits with an optional leading '#'")]
    InvalidHex(String),
}
