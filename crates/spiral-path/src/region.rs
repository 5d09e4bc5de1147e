//! The annular search region a spiral path covers.

use crate::path::SpiralPath;
use spiral_core::{Coord, PathError};

/// Inclusive offset range `[lo, hi]` of a square of side `width` around
/// its center, or `None` for a zero-width square.
///
/// Even widths extend one cell further towards positive `x`/`z`, which is
/// where the clockwise spiral lands after closing each even-sided ring.
pub(crate) fn square_span(width: u32) -> Option<(i64, i64)> {
    if width == 0 {
        return None;
    }
    let lo = -i64::from((width - 1) / 2);
    let hi = i64::from(width / 2);
    Some((lo, hi))
}

fn within_square(width: u32, dx: i64, dz: i64) -> bool {
    match square_span(width) {
        Some((lo, hi)) => (lo..=hi).contains(&dx) && (lo..=hi).contains(&dz),
        None => false,
    }
}

fn clamp_width(name: &'static str, value: i32) -> u32 {
    if value < 0 {
        log::debug!("clamping negative {name} {value} to 0");
    }
    value.max(0).unsigned_abs()
}

/// A square of side `max_width` centered on `center`, minus the
/// concentric square of side `min_width`.
///
/// Widths are stored clamped to `>= 0`. A region with
/// `max_width <= min_width` is empty.
///
/// # Examples
///
/// ```
/// use spiral_core::Coord;
/// use spiral_path::Annulus;
///
/// let ring = Annulus::new(Coord::new(10, 10), 1, 3);
/// assert_eq!(ring.cell_count(), 8);
/// assert!(!ring.contains(Coord::new(10, 10)));
/// assert!(ring.contains(Coord::new(11, 9)));
/// assert!(!ring.contains(Coord::new(12, 10)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Annulus {
    center: Coord,
    min_width: u32,
    max_width: u32,
}

impl Annulus {
    /// Create a region, clamping negative widths to zero.
    pub fn new(center: Coord, min_width: i32, max_width: i32) -> Self {
        Self {
            center,
            min_width: clamp_width("min_width", min_width),
            max_width: clamp_width("max_width", max_width),
        }
    }

    /// Create a region, rejecting negative widths and empty regions.
    pub fn try_new(center: Coord, min_width: i32, max_width: i32) -> Result<Self, PathError> {
        if min_width < 0 {
            return Err(PathError::NegativeWidth {
                name: "min_width",
                value: min_width,
            });
        }
        if max_width < 0 {
            return Err(PathError::NegativeWidth {
                name: "max_width",
                value: max_width,
            });
        }
        let region = Self::new(center, min_width, max_width);
        if region.is_empty() {
            return Err(PathError::EmptyRegion {
                min_width: region.min_width,
                max_width: region.max_width,
            });
        }
        Ok(region)
    }

    /// The spiral's reference point.
    pub fn center(&self) -> Coord {
        self.center
    }

    /// Side of the excluded inner square.
    pub fn min_width(&self) -> u32 {
        self.min_width
    }

    /// Side of the outer square.
    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    /// Number of cells in the region: `max(max_width² - min_width², 0)`.
    pub fn cell_count(&self) -> u64 {
        let outer = u64::from(self.max_width) * u64::from(self.max_width);
        let inner = u64::from(self.min_width) * u64::from(self.min_width);
        outer.saturating_sub(inner)
    }

    /// `true` when the region holds no cells.
    pub fn is_empty(&self) -> bool {
        self.max_width <= self.min_width
    }

    /// Whether `coord` lies inside the outer square and outside the inner one.
    ///
    /// Offsets from the center wrap like [`Coord::offset`], so a region
    /// near the `i32` limits contains the wrapped cells its spiral visits.
    pub fn contains(&self, coord: Coord) -> bool {
        if self.is_empty() {
            return false;
        }
        let dx = i64::from(coord.x.wrapping_sub(self.center.x));
        let dz = i64::from(coord.z.wrapping_sub(self.center.z));
        within_square(self.max_width, dx, dz) && !within_square(self.min_width, dx, dz)
    }

    /// Corners of the outer square at the most negative and most positive
    /// offsets from the center, inclusive.
    ///
    /// Corners are computed with [`Coord::offset`]. When the square
    /// straddles the `i32` limit the second corner wraps, so it can compare
    /// below the first on that axis.
    pub fn outer_bounds(&self) -> Option<(Coord, Coord)> {
        if self.is_empty() {
            return None;
        }
        let (lo, hi) = square_span(self.max_width)?;
        let (lo, hi) = (lo as i32, hi as i32);
        Some((self.center.offset(lo, lo), self.center.offset(hi, hi)))
    }

    /// Every cell of the region in row-major order (`z`, then `x`).
    ///
    /// Allocates the whole region; meant for small regions and for
    /// checking a traversal against.
    pub fn canonical_ordering(&self) -> Vec<Coord> {
        let Some((lo, hi)) = square_span(self.max_width).filter(|_| !self.is_empty()) else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(usize::try_from(self.cell_count()).unwrap_or(0));
        for dz in lo..=hi {
            for dx in lo..=hi {
                if !within_square(self.min_width, dx, dz) {
                    out.push(self.center.offset(dx as i32, dz as i32));
                }
            }
        }
        out
    }

    /// A fresh [`SpiralPath`] over this region.
    pub fn spiral(&self) -> SpiralPath {
        SpiralPath::from_region(*self)
    }
}
