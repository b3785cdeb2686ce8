//! Anchor-local run detection.
//!
//! Only a line through the most recently filled cell can form a new run, so
//! detection probes outward from that cell along four axes instead of
//! scanning the whole grid.

use crate::common::{Cell, GridError};
use crate::grid::Grid;

/// `(Δrow, Δcolumn)` step. `(0, 0)` stays in place.
pub type Direction = (isize, isize);

/// The four axes, each as one direction; the probe pair for an axis is the
/// direction and its negation.
pub const AXES: [Direction; 4] = [
    // horizontal
    (0, 1),
    // vertical
    (1, 0),
    // down-right / up-left
    (1, 1),
    // up-right / down-left
    (-1, 1),
];

/// Step outward from (`row`, `column`) by `dir`, counting steps until the
/// count reaches `threshold`, the next coordinate leaves the grid, or its
/// owner differs from the anchor's.
///
/// The step that ends the probe is counted too, so a probe that stops on a
/// mismatch or the edge returns one more than the matching cells beyond the
/// anchor. Summing opposite probes and subtracting one yields the run length
/// through the anchor (anything at or above `threshold` counts as a win).
pub fn probe(
    grid: &Grid,
    row: usize,
    column: usize,
    dir: Direction,
    threshold: usize,
) -> Result<usize, GridError> {
    let anchor = grid.get(row, column)?;
    let (mut r, mut c) = (row as isize, column as isize);
    let mut count = 0;
    loop {
        r += dir.0;
        c += dir.1;
        count += 1;
        if count >= threshold || !grid.contains(r, c) {
            break;
        }
        // bounds checked above
        if grid.get(r as usize, c as usize)? != anchor {
            break;
        }
    }
    Ok(count)
}

/// Run length through the anchor along the axis of `dir`.
pub fn axis_length(
    grid: &Grid,
    row: usize,
    column: usize,
    dir: Direction,
    threshold: usize,
) -> Result<usize, GridError> {
    let forward = probe(grid, row, column, dir, threshold)?;
    let backward = probe(grid, row, column, (-dir.0, -dir.1), threshold)?;
    Ok(forward + backward - 1)
}

/// Whether the disc at (`row`, `column`) lies on a run of at least the
/// grid's run length. Empty cells never win.
pub fn is_winning_cell(grid: &Grid, row: usize, column: usize) -> Result<bool, GridError> {
    if grid.get(row, column)? == Cell::Empty {
        return Ok(false);
    }
    let threshold = grid.run_length();
    for dir in AXES {
        if axis_length(grid, row, column, dir, threshold)? >= threshold {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Row of the topmost disc in `column`, i.e. where the last drop landed.
pub fn landing_row(grid: &Grid, column: usize) -> Result<Option<usize>, GridError> {
    let height = grid.column_height(column)?;
    Ok(grid.rows().checked_sub(height).filter(|_| height > 0))
}
