//! Clockwise square-spiral traversal of annular grid regions.
//!
//! A [`SpiralPath`] enumerates, one step at a time, every cell of a square
//! region centered on a coordinate, skipping a concentric inner square.
//! The walk starts just outside the inner square and grows outward, so a
//! search that consumes positions in order visits nearer cells first.
//!
//! # Regions
//!
//! - [`Annulus`]: the square-minus-square region, with membership tests and
//!   a row-major reference ordering
//! - [`PathConfig`]: builder-input with a [`WidthPolicy`] choosing between
//!   clamping and rejecting bad widths
//!
//! # Traversal
//!
//! [`SpiralPath::step`] advances and reports whether the path is still in
//! the region; [`SpiralPath::advance`] reports the same transition as a
//! [`StepOutcome`]. The path wraps back to its start after each full
//! cycle rather than terminating.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod path;
pub mod region;

#[cfg(test)]
pub(crate) mod compliance;

pub use config::{PathConfig, WidthPolicy};
pub use path::{Cycle, SpiralPath, StepOutcome};
pub use region::Annulus;
