//! Square integer grids.
//!
//! `Grid` owns its cells in row-major order. Coordinates follow the
//! `(x, y)` convention used throughout the crate: `x` is the row index and `y`
//! is the column index, both 0-based.

use crate::util::{LaserError, LaserResult};

pub mod io;

/// Largest accepted cell magnitude. Any sum of three cells, and every
/// intermediate of the best-3-of-4 selection, stays within `i64`.
pub const MAX_CELL_MAGNITUDE: i64 = i64::MAX / 4;

fn check_cells(cells: &[i64], row: usize) -> LaserResult<()> {
    match cells
        .iter()
        .position(|value| !(-MAX_CELL_MAGNITUDE..=MAX_CELL_MAGNITUDE).contains(value))
    {
        Some(column) => Err(LaserError::CellOutOfRange {
            row,
            column,
            value: cells[column],
        }),
        None => Ok(()),
    }
}

/// Owned square grid of integer cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    data: Vec<i64>,
    size: usize,
}

impl Grid {
    /// Creates a grid from a row-major buffer of `size * size` cells.
    ///
    /// Cells beyond [`MAX_CELL_MAGNITUDE`] are rejected.
    pub fn from_vec(data: Vec<i64>, size: usize) -> LaserResult<Self> {
        let needed = size
            .checked_mul(size)
            .ok_or(LaserError::InvalidInput("grid size overflows"))?;
        if data.len() != needed {
            return Err(LaserError::InvalidInput(
                "grid buffer length must equal size * size",
            ));
        }
        if size > 0 {
            for (row, cells) in data.chunks(size).enumerate() {
                check_cells(cells, row)?;
            }
        }
        Ok(Self { data, size })
    }

    /// Creates a grid from rows, rejecting rows whose length differs from the
    /// number of rows and cells beyond [`MAX_CELL_MAGNITUDE`].
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> LaserResult<Self>
    where
        R: AsRef<[i64]>,
    {
        let rows: Vec<R> = rows.into_iter().collect();
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != size {
                return Err(LaserError::NonSquareGrid {
                    row,
                    len: cells.len(),
                    expected: size,
                });
            }
            check_cells(cells, row)?;
            data.extend_from_slice(cells);
        }
        Ok(Self { data, size })
    }

    /// Returns the number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the row-major backing slice.
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// Returns the cell at row `x`, column `y` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<i64> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.data.get(x * self.size + y).copied()
    }

    /// Returns row `x` as a slice.
    pub fn row(&self, x: usize) -> Option<&[i64]> {
        if x >= self.size {
            return None;
        }
        let start = x * self.size;
        self.data.get(start..start + self.size)
    }

    /// Returns true if `(x, y)` is one of the four corner cells.
    pub fn is_corner(&self, x: usize, y: usize) -> bool {
        let last = self.size.saturating_sub(1);
        (x == 0 || x == last) && (y == 0 || y == last)
    }

    /// Number of non-corner cells, i.e. candidate laser placements.
    pub fn eligible_cells(&self) -> usize {
        if self.size < 2 {
            return 0;
        }
        self.size * self.size - 4
    }

    /// Cell lookup for coordinates already known to be in bounds.
    pub(crate) fn at(&self, x: usize, y: usize) -> i64 {
        self.data[x * self.size + y]
    }
}
