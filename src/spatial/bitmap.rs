//! Binary passability grid derived from a maze image
//!
//! The bitmap is the hand-off point between binarization and the graph
//! stages: entrance location and path search both read it, neither
//! mutates it. Cells hold 1 for open (passable) and 0 for wall.

use ndarray::Array2;
use std::fmt;

use crate::io::error::{MazeError, Result};

/// Grid coordinate with `x` = column and `y` = row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl Coord {
    /// Create a coordinate from column and row indices
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Rectangular open/wall grid
///
/// Always non-empty; rows are stored row-major as an `Array2<u8>` with
/// shape `(height, width)`. Any non-zero source value is normalized to 1
/// on construction so downstream comparisons stay exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    cells: Array2<u8>,
}

impl Bitmap {
    /// Build a bitmap from a cell array
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` if either dimension is zero.
    pub fn from_cells(cells: Array2<u8>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidSourceData {
                reason: format!("bitmap must be at least 1x1, got {cols}x{rows}"),
            });
        }

        Ok(Self {
            cells: cells.mapv(|value| u8::from(value != 0)),
        })
    }

    /// Build a bitmap from row slices (used heavily by tests)
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` if the rows are empty, ragged, or the
    /// first row has zero length.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(MazeError::InvalidSourceData {
                reason: "bitmap must be at least 1x1".to_string(),
            });
        }
        if rows.iter().any(|row| row.len() != width) {
            return Err(MazeError::InvalidSourceData {
                reason: "bitmap rows must all have the same length".to_string(),
            });
        }

        let flat: Vec<u8> = rows.iter().flatten().copied().collect();
        let cells = Array2::from_shape_vec((height, width), flat).map_err(|e| {
            MazeError::InvalidSourceData {
                reason: format!("bitmap shape mismatch: {e}"),
            }
        })?;
        Self::from_cells(cells)
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.dim().1
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.dim().0
    }

    /// Whether the coordinate lies inside the grid
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width() && coord.y < self.height()
    }

    /// Cell value at a coordinate, `None` outside the grid
    pub fn get(&self, coord: Coord) -> Option<u8> {
        self.cells.get([coord.y, coord.x]).copied()
    }

    /// Whether the coordinate addresses an open cell
    ///
    /// Out-of-bounds coordinates are not open.
    pub fn is_open(&self, coord: Coord) -> bool {
        self.get(coord) == Some(1)
    }

    /// Whether the coordinate lies on the outer border
    pub fn on_border(&self, coord: Coord) -> bool {
        self.contains(coord)
            && (coord.x == 0
                || coord.y == 0
                || coord.x == self.width() - 1
                || coord.y == self.height() - 1)
    }

    /// Row-major linear index for dense per-cell bookkeeping
    pub fn linear_index(&self, coord: Coord) -> usize {
        coord.y * self.width() + coord.x
    }
}
