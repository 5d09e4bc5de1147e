//! Spiral path compliance test helpers.
//!
//! These functions verify that a [`SpiralPath`] satisfies the traversal
//! contract for its region. Reused across the path and config test modules.

use crate::path::SpiralPath;
use indexmap::IndexSet;
use spiral_core::Coord;

/// Collect one cycle through repeated `step()` calls, asserting each
/// returns `true`.
fn collect_by_step(path: &mut SpiralPath) -> Vec<Coord> {
    path.reset();
    let mut out = Vec::new();
    for i in 0..path.total_path_length() {
        assert!(path.step(), "step {i} left the region early");
        let pos = path
            .current_position()
            .expect("position must exist after a step");
        out.push(pos);
    }
    out
}

/// Assert that one cycle visits every cell of the region exactly once
/// and nothing outside it.
pub fn assert_cycle_matches_region(path: &mut SpiralPath) {
    let visited = collect_by_step(path);
    let unique: IndexSet<Coord> = visited.iter().copied().collect();
    assert_eq!(
        unique.len(),
        visited.len(),
        "cycle revisits a cell: {visited:?}"
    );
    let region = *path.region();
    for coord in &visited {
        assert!(region.contains(*coord), "{coord} is outside {region:?}");
    }
    let expected: IndexSet<Coord> = region.canonical_ordering().into_iter().collect();
    assert_eq!(unique.len(), expected.len());
    assert!(unique.iter().all(|c| expected.contains(c)));
}

/// Assert that consecutive cells of a cycle are 4-neighbours.
pub fn assert_cycle_connected(path: &mut SpiralPath) {
    let visited = collect_by_step(path);
    for pair in visited.windows(2) {
        assert_eq!(
            pair[0].manhattan_distance(pair[1]),
            1,
            "jump from {} to {}",
            pair[0],
            pair[1]
        );
    }
}

/// Assert that chessboard distance from the center never shrinks along a
/// cycle.
pub fn assert_spirals_outward(path: &mut SpiralPath) {
    let center = path.region().center();
    let visited = collect_by_step(path);
    for pair in visited.windows(2) {
        let a = pair[0].chebyshev_distance(center);
        let b = pair[1].chebyshev_distance(center);
        assert!(a <= b, "moved inward from {} to {}", pair[0], pair[1]);
    }
}

/// Assert that the step after a full cycle wraps, and the one after that
/// lands back on the start cell.
pub fn assert_restart_returns_to_start(path: &mut SpiralPath) {
    let visited = collect_by_step(path);
    let cycles = path.cycles_completed();
    assert!(!path.step(), "boundary step must report false");
    assert_eq!(path.current_position(), None);
    assert_eq!(path.cycles_completed(), cycles + 1);
    assert!(path.step());
    assert_eq!(path.current_position(), visited.first().copied());
}

/// Assert that the `cycle()` iterator yields what repeated `step()` does.
pub fn assert_iterator_matches_step(path: &mut SpiralPath) {
    let by_step = collect_by_step(path);
    let by_iter: Vec<Coord> = path.cycle().collect();
    assert_eq!(by_step, by_iter);
}

/// Run all compliance checks against a path.
pub fn run_full_compliance(path: &mut SpiralPath) {
    assert_cycle_matches_region(path);
    assert_cycle_connected(path);
    assert_spirals_outward(path);
    assert_restart_returns_to_start(path);
    assert_iterator_matches_step(path);
}
