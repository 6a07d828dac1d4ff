//! Pipeline stages: binarization, entrance location, path search, rendering

/// Image-to-bitmap binarization with automatic border cropping
pub mod binarize;
/// Border-opening detection for entrance and exit location
pub mod entrances;
/// Path overlay rendering with start/end markers
pub mod render;
/// Breadth-first shortest path search over the open-cell grid
pub mod solve;
