//! Test utilities and mock consumers for spiral path development.
//!
//! Provides a [`VisitRecorder`] standing in for the search code that
//! consumes positions, plus reference [`fixtures`] to compare traversals
//! against.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashSet;

use spiral_core::Coord;
use spiral_path::{SpiralPath, StepOutcome};

/// Mock position consumer.
///
/// Drives a [`SpiralPath`] through [`advance`](SpiralPath::advance) and
/// keeps every outcome for later assertions.
pub struct VisitRecorder {
    visits: Vec<Coord>,
    cycles: usize,
    empty_signals: usize,
}

impl VisitRecorder {
    pub fn new() -> Self {
        Self {
            visits: Vec::new(),
            cycles: 0,
            empty_signals: 0,
        }
    }

    /// Record a single outcome.
    pub fn record(&mut self, outcome: StepOutcome) {
        match outcome {
            StepOutcome::Visited(coord) => self.visits.push(coord),
            StepOutcome::CycleCompleted => self.cycles += 1,
            StepOutcome::EmptyRegion => self.empty_signals += 1,
        }
    }

    /// Advance `path` `steps` times, recording each outcome.
    pub fn drive(&mut self, path: &mut SpiralPath, steps: u64) {
        for _ in 0..steps {
            self.record(path.advance());
        }
    }

    /// Every visited cell in order, across cycles.
    pub fn visits(&self) -> &[Coord] {
        &self.visits
    }

    /// Number of `CycleCompleted` outcomes seen.
    pub fn cycles(&self) -> usize {
        self.cycles
    }

    /// Number of `EmptyRegion` outcomes seen.
    pub fn empty_signals(&self) -> usize {
        self.empty_signals
    }

    /// Number of distinct cells visited.
    pub fn distinct_count(&self) -> usize {
        self.visits.iter().collect::<HashSet<_>>().len()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.visits.clear();
        self.cycles = 0;
        self.empty_signals = 0;
    }
}

impl Default for VisitRecorder {
    fn default() -> Self {
        Self::new()
    }
}
