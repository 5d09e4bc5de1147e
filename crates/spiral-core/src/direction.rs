//! Four-way compass directions with clockwise rotation.

use std::fmt;

/// One of the four cardinal directions on the `(x, z)` grid.
///
/// `North` decreases `z`, `South` increases it; `East` increases `x`,
/// `West` decreases it.
///
/// # Examples
///
/// ```
/// use spiral_core::Direction;
///
/// assert_eq!(Direction::North.rotate_cw(), Direction::East);
/// assert_eq!(Direction::West.rotate_cw(), Direction::North);
/// assert_eq!(Direction::South.delta(), (0, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards negative `z`.
    North,
    /// Towards positive `x`.
    East,
    /// Towards positive `z`.
    South,
    /// Towards negative `x`.
    West,
}

impl Direction {
    /// All directions in clockwise order, starting from `North`.
    pub const CLOCKWISE: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Position of this direction in [`Direction::CLOCKWISE`].
    pub fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Rotate 90° clockwise: N → E → S → W → N.
    pub fn rotate_cw(self) -> Self {
        Self::CLOCKWISE[(self.index() + 1) % 4]
    }

    /// Rotate 90° counter-clockwise: N → W → S → E → N.
    pub fn rotate_ccw(self) -> Self {
        Self::CLOCKWISE[(self.index() + 3) % 4]
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        Self::CLOCKWISE[(self.index() + 2) % 4]
    }

    /// Unit translation `(dx, dz)` for one step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(name)
    }
}
