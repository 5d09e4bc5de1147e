//! The clockwise square-spiral traversal state machine.

use crate::region::Annulus;
use spiral_core::{Coord, Direction};
use std::iter::FusedIterator;

/// Whether the first step of the current cycle has happened yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Freshly (re)initialized; the position sits on the start cell but
    /// has not been handed out.
    NotStarted,
    /// At least one step taken since (re)initialization.
    Active,
}

/// What a single state transition did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Transition {
    /// First step of a cycle: the start cell becomes current.
    Activated,
    /// Moved one cell along the spiral.
    Moved,
    /// Crossed the outer boundary and re-initialized.
    Wrapped,
}

/// Result of [`SpiralPath::advance`].
///
/// Separates the three cases that [`SpiralPath::step`] folds into a
/// single `bool`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The path is on a cell of the region.
    Visited(Coord),
    /// The outer boundary was just completed. The path has re-initialized
    /// and the next call starts a new cycle at the start cell.
    CycleCompleted,
    /// The region holds no cells (`max_width <= min_width`).
    EmptyRegion,
}

/// Walks every cell of an [`Annulus`] in a clockwise square spiral,
/// starting just outside the excluded inner square and growing outward.
///
/// The path never terminates. After the last cell of a cycle the next
/// [`step`](Self::step) crosses the outer boundary, returns `false`, and
/// re-initializes; the call after that starts over at the same start cell.
/// Call `step` [`total_path_length`](Self::total_path_length) times to cover
/// the region exactly once.
///
/// Not synchronized: each worker that needs positions should own its own
/// path.
///
/// # Examples
///
/// ```
/// use spiral_core::Coord;
/// use spiral_path::SpiralPath;
///
/// let mut path = SpiralPath::new(Coord::ORIGIN, 0, 3);
/// assert_eq!(path.current_position(), None);
///
/// let mut visited = Vec::new();
/// for _ in 0..path.total_path_length() {
///     assert!(path.step());
///     visited.push(path.current_position().unwrap());
/// }
/// assert_eq!(visited[0], Coord::ORIGIN);
/// assert_eq!(visited[1], Coord::new(1, 0));
/// assert_eq!(visited.len(), 9);
///
/// // One more step crosses the boundary and restarts the cycle.
/// assert!(!path.step());
/// assert_eq!(path.current_position(), None);
/// ```
#[derive(Clone, Debug)]
pub struct SpiralPath {
    region: Annulus,
    /// Current edge length.
    edge: u32,
    /// Steps taken along the current edge.
    steps: u32,
    /// Turns since the last edge length increase.
    turns: u8,
    /// Direction of the next step.
    dir: Direction,
    position: Coord,
    phase: Phase,
    progress: u64,
    lifetime_steps: u64,
    cycles_completed: u64,
}

impl SpiralPath {
    /// Create a path over the region of side `max_width` around `center`,
    /// excluding the inner square of side `min_width`. Negative widths are
    /// clamped to zero.
    pub fn new(center: Coord, min_width: i32, max_width: i32) -> Self {
        Self::from_region(Annulus::new(center, min_width, max_width))
    }

    /// Create a path over an existing region.
    pub fn from_region(region: Annulus) -> Self {
        let (position, dir, edge, turns) = Self::start_state(&region);
        Self {
            region,
            edge,
            steps: 0,
            turns,
            dir,
            position,
            phase: Phase::NotStarted,
            progress: 0,
            lifetime_steps: 0,
            cycles_completed: 0,
        }
    }

    /// Start cell, initial direction, edge length, and turn count for a
    /// fresh cycle.
    ///
    /// With an inner square, the start is the corner cell that continues
    /// the spiral a full traversal from the center would have taken.
    fn start_state(region: &Annulus) -> (Coord, Direction, u32, u8) {
        let min = region.min_width();
        let center = region.center();
        if min == 0 {
            return (center, Direction::East, 1, 0);
        }
        if min % 2 == 0 {
            let half = (min / 2) as i32;
            (center.offset(-half, half), Direction::North, min, 1)
        } else {
            let dx = ((min + 1) / 2) as i32;
            let dz = -(((min - 1) / 2) as i32);
            (center.offset(dx, dz), Direction::South, min, 1)
        }
    }

    /// Place the path on its start cell and reset the per-cycle state.
    fn init(&mut self) {
        let (position, dir, edge, turns) = Self::start_state(&self.region);
        self.position = position;
        self.dir = dir;
        self.edge = edge;
        self.turns = turns;
        self.steps = 0;
        self.progress = 0;
        self.phase = Phase::NotStarted;
    }

    fn transition(&mut self) -> Transition {
        self.progress += 1;
        self.lifetime_steps += 1;

        if self.phase == Phase::NotStarted {
            self.phase = Phase::Active;
            return Transition::Activated;
        }

        self.position = self.position.step(self.dir);
        self.steps += 1;

        if self.steps < self.edge {
            return Transition::Moved;
        }
        if self.edge >= self.region.max_width() {
            self.cycles_completed += 1;
            log::trace!(
                "spiral around {} wrapped after {} steps (cycle {})",
                self.region.center(),
                self.progress,
                self.cycles_completed
            );
            self.init();
            return Transition::Wrapped;
        }

        self.steps = 0;
        self.dir = self.dir.rotate_cw();
        self.turns += 1;
        if self.turns > 1 {
            self.turns = 0;
            self.edge += 1;
        }
        Transition::Moved
    }

    /// Advance one cell.
    ///
    /// Returns `true` while the path is on a cell of the region. Returns
    /// `false` on the first step of an empty region, and on the step that
    /// crosses the outer boundary (after which the path has re-initialized).
    pub fn step(&mut self) -> bool {
        match self.transition() {
            Transition::Activated => !self.region.is_empty(),
            Transition::Moved => true,
            Transition::Wrapped => false,
        }
    }

    /// Advance one cell, reporting the outcome without overloading a `bool`.
    ///
    /// Drives exactly the same state transition as [`step`](Self::step).
    pub fn advance(&mut self) -> StepOutcome {
        let transition = self.transition();
        if self.region.is_empty() {
            return StepOutcome::EmptyRegion;
        }
        match transition {
            Transition::Activated | Transition::Moved => StepOutcome::Visited(self.position),
            Transition::Wrapped => StepOutcome::CycleCompleted,
        }
    }

    /// The current cell, or `None` before the first step of a cycle.
    pub fn current_position(&self) -> Option<Coord> {
        match self.phase {
            Phase::Active => Some(self.position),
            Phase::NotStarted => None,
        }
    }

    /// Steps taken since the last (re)initialization.
    ///
    /// Reset to zero whenever the path wraps at the outer boundary or is
    /// [`reset`](Self::reset). See [`lifetime_steps`](Self::lifetime_steps)
    /// for a counter that never resets.
    pub fn progress(&self) -> u64 {
        self.progress
    }

    /// Steps taken since construction, across all cycles.
    pub fn lifetime_steps(&self) -> u64 {
        self.lifetime_steps
    }

    /// How many times the path has crossed the outer boundary and wrapped.
    pub fn cycles_completed(&self) -> u64 {
        self.cycles_completed
    }

    /// Number of distinct cells in the region: `max(max_width² - min_width², 0)`.
    pub fn total_path_length(&self) -> u64 {
        self.region.cell_count()
    }

    /// The region being traversed.
    pub fn region(&self) -> &Annulus {
        &self.region
    }

    /// The cell the first step of every cycle lands on.
    pub fn start_position(&self) -> Coord {
        Self::start_state(&self.region).0
    }

    /// Direction the next move will take.
    pub fn direction(&self) -> Direction {
        self.dir
    }

    /// `true` once the first step of the current cycle has been taken.
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// Return to the start cell and begin a new cycle. Lifetime counters
    /// are kept.
    pub fn reset(&mut self) {
        self.init();
    }

    /// Reset, then iterate over every cell of the region exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// use spiral_core::Coord;
    /// use spiral_path::SpiralPath;
    ///
    /// let mut path = SpiralPath::new(Coord::ORIGIN, 2, 4);
    /// let cells: Vec<Coord> = path.cycle().collect();
    /// assert_eq!(cells.len(), 12);
    /// assert_eq!(cells[0], Coord::new(-1, 1));
    /// ```
    pub fn cycle(&mut self) -> Cycle<'_> {
        self.reset();
        let remaining = self.total_path_length();
        Cycle {
            path: self,
            remaining,
        }
    }
}

/// Iterator over one full cycle of a [`SpiralPath`].
///
/// Created by [`SpiralPath::cycle`].
#[derive(Debug)]
pub struct Cycle<'a> {
    path: &'a mut SpiralPath,
    remaining: u64,
}

impl Iterator for Cycle<'_> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        match self.path.advance() {
            StepOutcome::Visited(coord) => Some(coord),
            StepOutcome::CycleCompleted | StepOutcome::EmptyRegion => {
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

// Region lengths reach (2^31 - 1)^2, which only fits a 64-bit `usize`.
#[cfg(target_pointer_width = "64")]
impl ExactSizeIterator for Cycle<'_> {}

impl FusedIterator for Cycle<'_> {}
