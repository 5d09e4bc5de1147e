//! Reference fixtures for traversal tests.
//!
//! - [`raster_square`]: brute-force row-major enumeration of a square,
//!   independent of [`Annulus`] geometry helpers.
//! - [`seeded_regions`]: deterministic random regions from a ChaCha8 RNG.
//! - [`first_match`]: nearest-first search over one spiral cycle.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use spiral_core::Coord;
use spiral_path::{Annulus, SpiralPath};

/// All cells of the square of side `width` around `center`, row-major.
///
/// Built by growing the square one ring at a time from a single cell, the
/// way the spiral does, so it shares no code with [`Annulus`].
pub fn raster_square(center: Coord, width: u32) -> Vec<Coord> {
    if width == 0 {
        return Vec::new();
    }
    let (mut lo, mut hi) = (0i32, 0i32);
    for side in 2..=width {
        if side % 2 == 0 {
            hi += 1;
        } else {
            lo -= 1;
        }
    }
    let mut out = Vec::new();
    for dz in lo..=hi {
        for dx in lo..=hi {
            out.push(center.offset(dx, dz));
        }
    }
    out
}

/// Reference cells of an annulus: outer square minus inner square.
pub fn raster_annulus(center: Coord, min_width: u32, max_width: u32) -> Vec<Coord> {
    let inner = raster_square(center, min_width);
    raster_square(center, max_width)
        .into_iter()
        .filter(|c| !inner.contains(c))
        .collect()
}

/// Generate `count` random non-empty regions with outer width below
/// `width_limit` (at least 2, at most `i32::MAX`) and centers within
/// `±spread` (at most `i32::MAX`).
///
/// Identical seeds give identical regions.
pub fn seeded_regions(seed: u64, count: usize, width_limit: u32, spread: u32) -> Vec<Annulus> {
    let width_limit = width_limit.clamp(2, i32::MAX as u32);
    let spread = i64::from(spread.min(i32::MAX as u32));
    let span = 2 * spread as u64 + 1;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let max_width = 1 + (rng.next_u32() % (width_limit - 1)) as i32;
            let min_width = (rng.next_u32() % max_width as u32) as i32;
            let cx = (rng.next_u64() % span) as i64 - spread;
            let cz = (rng.next_u64() % span) as i64 - spread;
            Annulus::new(Coord::new(cx as i32, cz as i32), min_width, max_width)
        })
        .collect()
}

/// Walk one cycle of `path` from its start and return the first cell
/// satisfying `accept`, together with how many cells were examined.
pub fn first_match(
    path: &mut SpiralPath,
    mut accept: impl FnMut(Coord) -> bool,
) -> Option<(Coord, usize)> {
    path.cycle()
        .enumerate()
        .find(|(_, c)| accept(*c))
        .map(|(i, c)| (c, i + 1))
}
