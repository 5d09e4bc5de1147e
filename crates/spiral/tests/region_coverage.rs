use proptest::prelude::*;
use spiral::prelude::*;
use spiral_test_utils::fixtures::{first_match, raster_annulus, seeded_regions};
use spiral_test_utils::VisitRecorder;
use std::collections::HashSet;

fn sorted(mut cells: Vec<Coord>) -> Vec<Coord> {
    cells.sort();
    cells
}

#[test]
fn full_square_matches_raster_reference() {
    let center = Coord::new(-17, 42);
    let mut path = SpiralPath::new(center, 0, 9);
    let visited: Vec<Coord> = path.cycle().collect();
    assert_eq!(sorted(visited), sorted(raster_annulus(center, 0, 9)));
}

#[test]
fn seeded_regions_match_raster_reference() {
    for region in seeded_regions(0x5eed, 64, 16, 1000) {
        let mut path = region.spiral();
        let visited: Vec<Coord> = path.cycle().collect();
        let expected = raster_annulus(region.center(), region.min_width(), region.max_width());
        assert_eq!(sorted(visited), sorted(expected), "region {region:?}");
    }
}

#[test]
fn recorder_sees_one_completion_per_cycle() {
    let mut path = SpiralPath::new(Coord::ORIGIN, 2, 6);
    let len = path.total_path_length();
    let mut recorder = VisitRecorder::new();
    recorder.drive(&mut path, 3 * (len + 1));
    assert_eq!(recorder.cycles(), 3);
    assert_eq!(recorder.visits().len() as u64, 3 * len);
    assert_eq!(recorder.distinct_count() as u64, len);
    assert_eq!(recorder.empty_signals(), 0);

    recorder.clear();
    assert!(recorder.visits().is_empty());
    assert_eq!(recorder.cycles(), 0);
    recorder.drive(&mut path, len);
    assert_eq!(recorder.visits().len() as u64, len);
    assert_eq!(recorder.cycles(), 0);
}

#[test]
fn recorder_sees_empty_region() {
    let mut path = SpiralPath::new(Coord::ORIGIN, 5, 5);
    let mut recorder = VisitRecorder::new();
    recorder.drive(&mut path, 20);
    assert_eq!(recorder.empty_signals(), 20);
    assert!(recorder.visits().is_empty());
}

#[test]
fn first_match_is_nearest_first() {
    let center = Coord::new(100, 100);
    let mut path = SpiralPath::new(center, 0, 21);
    let targets: HashSet<Coord> = [Coord::new(108, 100), Coord::new(102, 97)]
        .into_iter()
        .collect();
    let (found, examined) = first_match(&mut path, |c| targets.contains(&c)).unwrap();
    assert_eq!(found, Coord::new(102, 97));
    assert!(examined <= 7 * 7);
}

#[test]
fn first_match_misses_excluded_center() {
    let center = Coord::ORIGIN;
    let mut path = SpiralPath::new(center, 3, 7);
    assert!(first_match(&mut path, |c| c == center).is_none());
}

#[test]
fn config_and_direct_construction_agree() {
    let config = PathConfig {
        center: Coord::new(3, 3),
        min_width: 4,
        max_width: 11,
        width_policy: WidthPolicy::Reject,
    };
    let mut built = config.build().unwrap();
    let mut direct = SpiralPath::new(Coord::new(3, 3), 4, 11);
    let a: Vec<Coord> = built.cycle().collect();
    let b: Vec<Coord> = direct.cycle().collect();
    assert_eq!(a, b);
}

proptest! {
    #[test]
    fn restart_lands_on_start(
        min in 0i32..10,
        extra in 1i32..8,
        cx in -500i32..500,
        cz in -500i32..500,
    ) {
        let mut path = SpiralPath::new(Coord::new(cx, cz), min, min + extra);
        let len = path.total_path_length();
        prop_assert!(path.step());
        let start = path.current_position().unwrap();
        for _ in 1..len {
            prop_assert!(path.step());
        }
        prop_assert!(!path.step());
        prop_assert!(path.step());
        prop_assert_eq!(path.current_position(), Some(start));
    }
}
