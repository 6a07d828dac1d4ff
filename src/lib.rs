//! Photographed-maze solving pipeline
//!
//! The system binarizes a scanned maze image into an open/wall grid,
//! locates the two entrance openings on the grid border, runs a
//! breadth-first shortest path search between them, and renders the
//! solution back onto the image.

#![forbid(unsafe_code)]

/// Pipeline stages: binarization, entrance location, path search, rendering
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for the pipeline
pub mod math;
/// Spatial grid and coordinate types
pub mod spatial;

pub use io::error::{MazeError, Result};
