//! Benchmark profiles for spiral path traversal.
//!
//! Provides pre-built [`Annulus`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 256×256 full square (65K cells)
//! - [`ring_profile`]: 1024-wide square with a 768-wide hole (~460K cells)
//! - [`drain`]: step a path through one full cycle

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use spiral_core::Coord;
use spiral_path::{Annulus, SpiralPath};

/// 256×256 square with no excluded middle, centered away from the origin.
pub fn reference_profile() -> Annulus {
    Annulus::new(Coord::new(-1_024, 2_048), 0, 256)
}

/// 1024×1024 square with the middle 768×768 excluded.
pub fn ring_profile() -> Annulus {
    Annulus::new(Coord::new(30_000, -30_000), 768, 1_024)
}

/// Step `path` through one cycle and return a checksum of the visited
/// cells so the work cannot be optimized away.
pub fn drain(path: &mut SpiralPath) -> i64 {
    path.reset();
    let mut acc = 0i64;
    for _ in 0..path.total_path_length() {
        path.step();
        if let Some(c) = path.current_position() {
            acc = acc.wrapping_add(i64::from(c.x) ^ i64::from(c.z));
        }
    }
    acc
}
