//! Search path configuration and validation.
//!
//! [`PathConfig`] is the builder-input for a [`SpiralPath`]. The default
//! [`WidthPolicy::Clamp`] reproduces the lenient construction of
//! [`SpiralPath::new`]; [`WidthPolicy::Reject`] turns bad widths into
//! [`PathError`]s at startup instead.

use crate::path::SpiralPath;
use crate::region::Annulus;
use spiral_core::{Coord, PathError};

/// How a [`PathConfig`] treats negative widths and empty regions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WidthPolicy {
    /// Negative widths become 0; an empty region yields an empty path.
    #[default]
    Clamp,
    /// Negative widths and empty regions are configuration errors.
    Reject,
}

/// Parameters for building a [`SpiralPath`].
///
/// # Examples
///
/// ```
/// use spiral_core::{Coord, PathError};
/// use spiral_path::{PathConfig, WidthPolicy};
///
/// let config = PathConfig {
///     center: Coord::new(40, -12),
///     min_width: 2,
///     max_width: 64,
///     width_policy: WidthPolicy::Reject,
/// };
/// let path = config.build().unwrap();
/// assert_eq!(path.total_path_length(), 64 * 64 - 4);
///
/// let bad = PathConfig { max_width: 2, ..config };
/// assert!(matches!(bad.build(), Err(PathError::EmptyRegion { .. })));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathConfig {
    /// Center of the search region. Default: origin.
    pub center: Coord,
    /// Side of the excluded inner square. Default: 0.
    pub min_width: i32,
    /// Side of the outer square. Default: 1.
    pub max_width: i32,
    /// Treatment of out-of-range widths. Default: [`WidthPolicy::Clamp`].
    pub width_policy: WidthPolicy,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            center: Coord::ORIGIN,
            min_width: 0,
            max_width: 1,
            width_policy: WidthPolicy::Clamp,
        }
    }
}

impl PathConfig {
    /// Check the widths against the configured [`WidthPolicy`].
    pub fn validate(&self) -> Result<(), PathError> {
        self.region().map(|_| ())
    }

    /// The region this configuration describes.
    pub fn region(&self) -> Result<Annulus, PathError> {
        match self.width_policy {
            WidthPolicy::Clamp => Ok(Annulus::new(self.center, self.min_width, self.max_width)),
            WidthPolicy::Reject => Annulus::try_new(self.center, self.min_width, self.max_width),
        }
    }

    /// Validate, then construct the path.
    pub fn build(&self) -> Result<SpiralPath, PathError> {
        let region = self.region()?;
        Ok(SpiralPath::from_region(region))
    }
}
