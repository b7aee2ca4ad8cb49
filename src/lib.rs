//! Lasergrid places three-way laser emitters on a square grid of integers.
//!
//! Every non-corner cell is scored by the sum of the neighbors its laser
//! would hit: edge cells hit their three neighbors, interior cells drop the
//! weakest of four. The best `N` cells are then kept in a fixed-capacity
//! sorted accumulator. Each cell is scored on its own; overlapping lasers
//! are not considered.
//!
//! Optional features: `rayon` scores grid rows in parallel, `tracing` emits
//! spans and events for each pass.

mod candidate;
pub mod grid;
pub mod lowlevel;
mod placement;
pub mod scorer;
mod trace;
pub mod util;

pub use grid::io::{load_grid, parse_grid};
pub use grid::{Grid, MAX_CELL_MAGNITUDE};
pub use placement::{place_lasers, LaserPlanner, PlanConfig, Placement};
pub use scorer::{Facing, Hit};
pub use util::{LaserError, LaserResult};
