//! Spatial data structures shared by the pipeline stages
//!
//! This module contains the binary passability grid produced by
//! binarization and the coordinate type used to address it.

/// Binary open/wall grid and coordinate types
pub mod bitmap;

pub use bitmap::{Bitmap, Coord};
