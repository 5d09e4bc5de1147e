//! Core value types for spiral grid traversal.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the plain values every other crate in the workspace passes around:
//! grid coordinates, compass directions, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod direction;
pub mod error;

pub use coord::Coord;
pub use direction::Direction;
pub use error::PathError;
