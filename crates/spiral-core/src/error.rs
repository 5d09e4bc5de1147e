//! Error types for spiral path configuration.
//!
//! The traversal itself never fails: out-of-range widths are clamped and
//! degenerate regions yield an empty cycle. These errors surface only when
//! a caller opts into strict validation.

use std::error::Error;
use std::fmt;

/// Errors from strict validation of a search region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathError {
    /// A width was negative and the caller asked for rejection
    /// rather than clamping.
    NegativeWidth {
        /// Which width (`"min_width"` or `"max_width"`).
        name: &'static str,
        /// The offending value.
        value: i32,
    },
    /// The outer width does not exceed the inner width, so the region
    /// holds no cells.
    EmptyRegion {
        /// Inner (excluded) square side.
        min_width: u32,
        /// Outer square side.
        max_width: u32,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeWidth { name, value } => {
                write!(f, "{name} must be non-negative, got {value}")
            }
            Self::EmptyRegion {
                min_width,
                max_width,
            } => write!(
                f,
                "empty search region: max_width {max_width} <= min_width {min_width}"
            ),
        }
    }
}

impl Error for PathError {}
