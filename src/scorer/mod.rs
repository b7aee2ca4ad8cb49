//! Per-cell hit scoring.
//!
//! Every non-corner cell can host a laser firing in three directions. Edge
//! cells have exactly three neighbors, so their hit and facing are fixed by
//! the edge they sit on. Interior cells drop their weakest neighbor via
//! [`best_three_of_four`].

use crate::grid::Grid;
use crate::trace::{trace_event, trace_span};
use std::fmt;

mod neighbors;

pub use neighbors::best_three_of_four;

/// Direction a laser faces, i.e. away from the neighbor it leaves out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facing {
    North,
    South,
    East,
    West,
}

impl Facing {
    /// Human-readable form, e.g. `"facing north"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Facing::North => "facing north",
            Facing::South => "facing south",
            Facing::East => "facing east",
            Facing::West => "facing west",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candidate laser placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit {
    /// Sum of the cells the laser hits.
    pub score: i64,
    /// Column of the placement (the `y` coordinate).
    pub column: usize,
    /// Row of the placement (the `x` coordinate).
    pub row: usize,
    /// Facing, `None` when the interior selection ended on a sentinel.
    pub facing: Option<Facing>,
}

impl Hit {
    /// Placement as `(column, row)`, the order used in reports.
    pub fn position(&self) -> (usize, usize) {
        (self.column, self.row)
    }
}

impl fmt::Display for Hit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let facing = self.facing.map(Facing::as_str).unwrap_or("");
        write!(f, "({}, {})   {}", self.column, self.row, facing)
    }
}

/// Scores a single cell, returning `None` for corners and out-of-bounds cells.
///
/// Edge checks run in a fixed order: top row, left column, bottom row, right
/// column. Corners are filtered first, so each edge cell matches exactly one.
pub fn score_cell(grid: &Grid, x: usize, y: usize) -> Option<Hit> {
    let size = grid.size();
    if x >= size || y >= size || grid.is_corner(x, y) {
        return None;
    }
    let last = size - 1;
    let (facing, score) = if x == 0 {
        let sum = grid.at(x, y + 1) + grid.at(x, y - 1) + grid.at(x + 1, y);
        (Some(Facing::South), sum)
    } else if y == 0 {
        let sum = grid.at(x, y + 1) + grid.at(x + 1, y) + grid.at(x - 1, y);
        (Some(Facing::East), sum)
    } else if x == last {
        let sum = grid.at(x, y + 1) + grid.at(x, y - 1) + grid.at(x - 1, y);
        (Some(Facing::North), sum)
    } else if y == last {
        let sum = grid.at(x, y - 1) + grid.at(x + 1, y) + grid.at(x - 1, y);
        (Some(Facing::West), sum)
    } else {
        best_three_of_four([
            (grid.at(x, y + 1), Facing::West),
            (grid.at(x, y - 1), Facing::East),
            (grid.at(x + 1, y), Facing::North),
            (grid.at(x - 1, y), Facing::South),
        ])
    };
    Some(Hit {
        score,
        column: y,
        row: x,
        facing,
    })
}

fn score_row(grid: &Grid, x: usize) -> impl Iterator<Item = Hit> + '_ {
    (0..grid.size()).filter_map(move |y| score_cell(grid, x, y))
}

/// Scores every eligible cell in row-major order.
pub fn score_cells(grid: &Grid) -> Vec<Hit> {
    let _span = trace_span!("score_cells", size = grid.size()).entered();
    let mut hits = Vec::with_capacity(grid.eligible_cells());
    for x in 0..grid.size() {
        hits.extend(score_row(grid, x));
    }
    trace_event!("candidates", count = hits.len());
    hits
}

/// Scores rows in parallel; the result is identical to [`score_cells`].
#[cfg(feature = "rayon")]
pub fn score_cells_par(grid: &Grid) -> Vec<Hit> {
    use rayon::prelude::*;

    let _span = trace_span!("score_cells_par", size = grid.size()).entered();
    let hits: Vec<Hit> = (0..grid.size())
        .into_par_iter()
        .flat_map_iter(|x| score_row(grid, x))
        .collect();
    trace_event!("candidates", count = hits.len());
    hits
}
