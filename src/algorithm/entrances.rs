//! Border-opening detection for entrance and exit location
//!
//! Scans the four border lines of the bitmap for contiguous runs of open
//! cells, collapses each run to its midpoint, and merges near-identical
//! points so a corner opening seen by two scans counts once.

use crate::io::error::{MazeError, Result};
use crate::spatial::{Bitmap, Coord};

/// One of the four border lines of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderSide {
    /// Row 0, indexed by column
    Top,
    /// Row `height - 1`, indexed by column
    Bottom,
    /// Column 0, indexed by row
    Left,
    /// Column `width - 1`, indexed by row
    Right,
}

/// Maximal contiguous span of open cells along one border line
///
/// `start` and `end` are inclusive line-local indices: columns for the
/// horizontal borders, rows for the vertical ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderRun {
    /// Which border line the run lies on
    pub side: BorderSide,
    /// First open index of the run
    pub start: usize,
    /// Last open index of the run
    pub end: usize,
}

impl BorderRun {
    /// Representative coordinate: the run midpoint projected onto the
    /// border's fixed coordinate
    pub fn midpoint(&self, bitmap: &Bitmap) -> Coord {
        let mid = usize::midpoint(self.start, self.end);
        match self.side {
            BorderSide::Top => Coord::new(mid, 0),
            BorderSide::Bottom => Coord::new(mid, bitmap.height() - 1),
            BorderSide::Left => Coord::new(0, mid),
            BorderSide::Right => Coord::new(bitmap.width() - 1, mid),
        }
    }
}

/// Collect all open runs along the four border lines
pub fn border_runs(bitmap: &Bitmap) -> Vec<BorderRun> {
    let width = bitmap.width();
    let height = bitmap.height();

    let top: Vec<usize> = (0..width)
        .filter(|&x| bitmap.is_open(Coord::new(x, 0)))
        .collect();
    let bottom: Vec<usize> = (0..width)
        .filter(|&x| bitmap.is_open(Coord::new(x, height - 1)))
        .collect();
    let left: Vec<usize> = (0..height)
        .filter(|&y| bitmap.is_open(Coord::new(0, y)))
        .collect();
    let right: Vec<usize> = (0..height)
        .filter(|&y| bitmap.is_open(Coord::new(width - 1, y)))
        .collect();

    let mut runs = Vec::new();
    for (side, indices) in [
        (BorderSide::Top, top),
        (BorderSide::Bottom, bottom),
        (BorderSide::Left, left),
        (BorderSide::Right, right),
    ] {
        for (start, end) in collapse_runs(&indices) {
            runs.push(BorderRun { side, start, end });
        }
    }
    runs
}

/// Collapse sorted indices into inclusive `(start, end)` spans
fn collapse_runs(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut iter = indices.iter().copied();
    let Some(first) = iter.next() else {
        return spans;
    };

    let mut start = first;
    let mut prev = first;
    for index in iter {
        if index != prev + 1 {
            spans.push((start, prev));
            start = index;
        }
        prev = index;
    }
    spans.push((start, prev));
    spans
}

/// Find the entrance/exit pair using the default widest-pair tie-break
///
/// # Errors
///
/// Returns `TooFewOpenings` if fewer than two distinct border openings
/// remain after merging.
pub fn find_entrances(bitmap: &Bitmap) -> Result<[Coord; 2]> {
    find_entrances_with(bitmap, widest_pair)
}

/// Find the entrance/exit pair with a caller-supplied tie-break
///
/// The selector only runs when more than two candidate openings survive
/// merging (false openings from a noisy border); it picks which pair to
/// treat as the real entrance and exit. The order of the returned pair is
/// unspecified; callers treat the two points symmetrically.
///
/// # Errors
///
/// Returns `TooFewOpenings` if fewer than two distinct border openings
/// remain after merging, or if the selector declines to pick a pair.
pub fn find_entrances_with<S>(bitmap: &Bitmap, selector: S) -> Result<[Coord; 2]>
where
    S: Fn(&[Coord]) -> Option<[Coord; 2]>,
{
    let mut candidates: Vec<Coord> = Vec::new();
    for run in border_runs(bitmap) {
        let point = run.midpoint(bitmap);
        // Two points within one cell of each other are the same opening
        // seen from two border scans (a corner opening).
        let duplicate = candidates
            .iter()
            .any(|&c| c.x.abs_diff(point.x) <= 1 && c.y.abs_diff(point.y) <= 1);
        if !duplicate {
            candidates.push(point);
        }
    }

    log::debug!("{} candidate border openings: {candidates:?}", candidates.len());

    match candidates.as_slice() {
        [a, b] => Ok([*a, *b]),
        few if few.len() < 2 => Err(MazeError::TooFewOpenings { found: few.len() }),
        many => {
            log::warn!(
                "{} border openings after merging, applying tie-break",
                many.len()
            );
            selector(many).ok_or(MazeError::TooFewOpenings { found: many.len() })
        }
    }
}

/// Default tie-break: the most widely separated candidate pair
///
/// Best-effort heuristic, not a proof: spurious openings tend to cluster
/// near true ones, so the maximum squared-distance pair is assumed to be
/// the real entrance and exit. Returns `None` for fewer than two
/// candidates.
pub fn widest_pair(candidates: &[Coord]) -> Option<[Coord; 2]> {
    let mut best: Option<([Coord; 2], usize)> = None;
    for (i, &a) in candidates.iter().enumerate() {
        for &b in candidates.iter().skip(i + 1) {
            let dx = a.x.abs_diff(b.x);
            let dy = a.y.abs_diff(b.y);
            let distance_sq = dx * dx + dy * dy;
            if best.is_none_or(|(_, best_distance)| distance_sq > best_distance) {
                best = Some(([a, b], distance_sq));
            }
        }
    }
    best.map(|(pair, _)| pair)
}
