//! Loading grids from whitespace-separated text.
//!
//! Each non-blank line is one row; cells are integers separated by any
//! whitespace. Blank lines are ignored.

use crate::grid::Grid;
use crate::util::{LaserError, LaserResult};
use std::fs;
use std::path::Path;

/// Parses a square grid from text.
pub fn parse_grid(text: &str) -> LaserResult<Grid> {
    let mut rows: Vec<Vec<i64>> = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<i64>().map_err(|_| LaserError::InvalidCell {
                    line: idx + 1,
                    token: token.to_owned(),
                })
            })
            .collect::<LaserResult<Vec<_>>>()?;
        rows.push(row);
    }
    Grid::from_rows(rows)
}

/// Reads and parses a grid file.
pub fn load_grid<P: AsRef<Path>>(path: P) -> LaserResult<Grid> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|err| LaserError::GridIo {
        reason: format!("{}: {err}", path.display()),
    })?;
    parse_grid(&text)
}
