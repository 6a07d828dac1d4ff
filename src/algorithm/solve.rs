//! Breadth-first shortest path search over the open-cell grid
//!
//! The bitmap is an implicit unweighted graph: nodes are open cells,
//! edges connect orthogonally adjacent open cells. BFS visits each cell
//! at most once, so the search is O(width * height) in time and space and
//! the returned path is minimal in step count.

use bitvec::prelude::BitVec;
use bitvec::bitvec;
use std::collections::VecDeque;

use crate::io::error::{MazeError, Result};
use crate::spatial::{Bitmap, Coord};

/// Shortest path between two open cells, as a coordinate sequence
///
/// The result starts at `start`, ends at `end`, and every consecutive
/// pair differs by exactly one unit step in one axis. Among equal-length
/// shortest paths the one returned is determined by the fixed neighbor
/// expansion order (left, right, up, down) and FIFO discovery, so the
/// result is deterministic. `start == end` on an open cell yields the
/// single-element path `[start]`.
///
/// # Errors
///
/// - `OutOfBounds` if either endpoint lies outside the grid
/// - `BlockedEndpoint` if either endpoint addresses a wall cell
/// - `NoPathFound` if no sequence of open cells connects the endpoints
pub fn shortest_path(bitmap: &Bitmap, start: Coord, end: Coord) -> Result<Vec<Coord>> {
    for endpoint in [start, end] {
        if !bitmap.contains(endpoint) {
            return Err(MazeError::OutOfBounds {
                coord: endpoint,
                width: bitmap.width(),
                height: bitmap.height(),
            });
        }
        if !bitmap.is_open(endpoint) {
            return Err(MazeError::BlockedEndpoint { coord: endpoint });
        }
    }

    if start == end {
        return Ok(vec![start]);
    }

    let cell_count = bitmap.width() * bitmap.height();
    let mut visited: BitVec = bitvec![0; cell_count];
    let mut predecessor: Vec<Option<Coord>> = vec![None; cell_count];
    let mut queue = VecDeque::new();

    visited.set(bitmap.linear_index(start), true);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == end {
            let path = reconstruct(&predecessor, bitmap, start, end);
            log::debug!("found path with {} steps", path.len() - 1);
            return Ok(path);
        }

        for neighbor in neighbors(bitmap, current) {
            let index = bitmap.linear_index(neighbor);
            let seen = visited.get(index).as_deref() == Some(&true);
            if bitmap.is_open(neighbor) && !seen {
                visited.set(index, true);
                if let Some(slot) = predecessor.get_mut(index) {
                    *slot = Some(current);
                }
                queue.push_back(neighbor);
            }
        }
    }

    Err(MazeError::NoPathFound { start, end })
}

/// In-bounds orthogonal neighbors in fixed left, right, up, down order
fn neighbors(bitmap: &Bitmap, coord: Coord) -> Vec<Coord> {
    let mut adjacent = Vec::with_capacity(4);
    if coord.x > 0 {
        adjacent.push(Coord::new(coord.x - 1, coord.y));
    }
    if coord.x + 1 < bitmap.width() {
        adjacent.push(Coord::new(coord.x + 1, coord.y));
    }
    if coord.y > 0 {
        adjacent.push(Coord::new(coord.x, coord.y - 1));
    }
    if coord.y + 1 < bitmap.height() {
        adjacent.push(Coord::new(coord.x, coord.y + 1));
    }
    adjacent
}

/// Walk predecessors from the end back to the start, then reverse
fn reconstruct(
    predecessor: &[Option<Coord>],
    bitmap: &Bitmap,
    start: Coord,
    end: Coord,
) -> Vec<Coord> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        let Some(Some(previous)) = predecessor.get(bitmap.linear_index(current)).copied() else {
            break;
        };
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}
