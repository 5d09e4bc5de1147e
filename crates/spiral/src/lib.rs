//! Spiral: nearest-first enumeration of annular grid search regions.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the spiral sub-crates. For most users, adding `spiral` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use spiral::prelude::*;
//!
//! // Search a 64×64 square around (1200, -340), skipping the 8×8 middle.
//! let mut path = SpiralPath::new(Coord::new(1200, -340), 8, 64);
//! assert_eq!(path.total_path_length(), 64 * 64 - 8 * 8);
//!
//! let mut examined = 0;
//! while examined < path.total_path_length() {
//!     match path.advance() {
//!         StepOutcome::Visited(cell) => {
//!             assert!(cell.chebyshev_distance(Coord::new(1200, -340)) <= 32);
//!             examined += 1;
//!         }
//!         StepOutcome::CycleCompleted | StepOutcome::EmptyRegion => break,
//!     }
//! }
//! assert_eq!(examined, 4032);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `spiral-core` | `Coord`, `Direction`, `PathError` |
//! | [`path`] | `spiral-path` | `SpiralPath`, `Annulus`, `PathConfig` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinate, direction, and error types (`spiral-core`).
pub use spiral_core as types;

/// Regions, configuration, and the spiral traversal (`spiral-path`).
///
/// The main entry point is [`path::SpiralPath`].
pub use spiral_path as path;

/// Common imports for typical usage.
///
/// ```rust
/// use spiral::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use spiral_core::{Coord, Direction, PathError};

    // Traversal
    pub use spiral_path::{Annulus, PathConfig, SpiralPath, StepOutcome, WidthPolicy};
}
