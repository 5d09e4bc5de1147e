//! The [`Coord`] grid position type.

use crate::direction::Direction;
use std::fmt;

/// An integer cell position on the `(x, z)` plane.
///
/// Plain value type: copied and compared by value. Translation uses
/// wrapping arithmetic, so stepping off `i32::MAX` wraps instead of
/// panicking.
///
/// # Examples
///
/// ```
/// use spiral_core::{Coord, Direction};
///
/// let c = Coord::new(3, -2);
/// assert_eq!(c.step(Direction::North), Coord::new(3, -3));
/// assert_eq!(c.moved(Direction::East, 4), Coord::new(7, -2));
/// assert_eq!(c.chebyshev_distance(Coord::ORIGIN), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// East-west axis; grows towards east.
    pub x: i32,
    /// North-south axis; grows towards south.
    pub z: i32,
}

impl Coord {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Coord = Coord { x: 0, z: 0 };

    /// Create a coordinate from its components.
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Translate by `(dx, dz)`.
    pub fn offset(self, dx: i32, dz: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            z: self.z.wrapping_add(dz),
        }
    }

    /// Translate one unit in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dz) = dir.delta();
        self.offset(dx, dz)
    }

    /// Translate `n` units in `dir`. Negative `n` moves the other way.
    pub fn moved(self, dir: Direction, n: i32) -> Self {
        let (dx, dz) = dir.delta();
        self.offset(dx.wrapping_mul(n), dz.wrapping_mul(n))
    }

    /// Chessboard (L∞) distance: `max(|dx|, |dz|)`.
    pub fn chebyshev_distance(self, other: Coord) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dz = self.z.abs_diff(other.z);
        dx.max(dz)
    }

    /// Taxicab (L1) distance: `|dx| + |dz|`.
    pub fn manhattan_distance(self, other: Coord) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.z.abs_diff(other.z))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, z): (i32, i32)) -> Self {
        Self { x, z }
    }
}

impl From<Coord> for (i32, i32) {
    fn from(c: Coord) -> Self {
        (c.x, c.z)
    }
}
