//! Low-level building blocks for custom placement pipelines.
//!
//! Most users should prefer [`crate::LaserPlanner`] or
//! [`crate::place_lasers`]. These exports cover the accumulator and the
//! per-cell scoring steps on their own.

pub use crate::candidate::accumulator::{Slot, SortedAccumulator};
pub use crate::placement::select_top;
pub use crate::scorer::{best_three_of_four, score_cell, score_cells};

#[cfg(feature = "rayon")]
pub use crate::scorer::score_cells_par;
