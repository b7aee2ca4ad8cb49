//! Top-N laser selection over scored candidates.
//!
//! `LaserPlanner` scores a grid and keeps the `N` best hits in a sorted
//! accumulator. Requests larger than the number of eligible cells are clamped
//! rather than rejected; the clamp is reported on the returned [`Placement`].

use crate::candidate::accumulator::SortedAccumulator;
use crate::grid::Grid;
use crate::scorer::{score_cells, Hit};
use crate::trace::{trace_event, trace_span};
use crate::util::{LaserError, LaserResult};

/// Planner configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlanConfig {
    /// Score grid rows in parallel. Requires the `rayon` feature; ignored
    /// otherwise.
    pub parallel: bool,
}

/// Selected laser placements, best first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    requested: usize,
    available: usize,
    hits: Vec<Hit>,
}

impl Placement {
    /// Number of lasers that were asked for.
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Number of eligible cells in the grid.
    pub fn available(&self) -> usize {
        self.available
    }

    /// Returns `Some(available)` if the request had to be clamped.
    pub fn capacity_exceeded(&self) -> Option<usize> {
        (self.requested > self.available).then_some(self.available)
    }

    /// Selected hits in descending score order.
    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    /// Consumes the placement, returning the selected hits.
    pub fn into_hits(self) -> Vec<Hit> {
        self.hits
    }
}

/// Keeps the `k` best hits, returned in descending score order.
///
/// Candidates are offered in slice order. Equal scores are ordered by where
/// the binary search lands, which is deterministic but not strictly by
/// arrival. Sentinel slots that no candidate displaced are dropped, so fewer
/// than `k` hits come back when too many candidates score zero or less.
pub fn select_top(hits: &[Hit], k: usize) -> LaserResult<Vec<Hit>> {
    let mut best = SortedAccumulator::new(k)?;
    for hit in hits {
        best.offer(hit.score, *hit);
    }
    Ok(best
        .into_descending()
        .into_iter()
        .filter_map(|slot| slot.label)
        .collect())
}

/// Scores grids and selects laser placements.
pub struct LaserPlanner<'a> {
    grid: &'a Grid,
    config: PlanConfig,
}

impl<'a> LaserPlanner<'a> {
    /// Creates a planner with the default configuration.
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            config: PlanConfig::default(),
        }
    }

    /// Replaces the planner configuration.
    pub fn with_config(mut self, config: PlanConfig) -> Self {
        self.config = config;
        self
    }

    /// Scores every eligible cell of the grid in row-major order.
    pub fn candidates(&self) -> Vec<Hit> {
        if self.config.parallel {
            #[cfg(feature = "rayon")]
            return crate::scorer::score_cells_par(self.grid);
            #[cfg(not(feature = "rayon"))]
            trace_event!("parallel_unavailable", size = self.grid.size());
        }
        score_cells(self.grid)
    }

    /// Places `requested` lasers.
    ///
    /// Fails with [`LaserError::InvalidLaserCount`] when `requested <= 0`.
    pub fn plan(&self, requested: i64) -> LaserResult<Placement> {
        let requested = usize::try_from(requested)
            .ok()
            .filter(|&count| count > 0)
            .ok_or(LaserError::InvalidLaserCount { count: requested })?;

        let _span = trace_span!("plan", requested = requested).entered();
        let candidates = self.candidates();
        let available = candidates.len();
        let count = requested.min(available);
        if count < requested {
            trace_event!("capacity_exceeded", requested = requested, available = available);
        }

        let hits = if count == 0 {
            Vec::new()
        } else {
            select_top(&candidates, count)?
        };
        trace_event!("selected", count = hits.len());
        Ok(Placement {
            requested,
            available,
            hits,
        })
    }
}

/// Places `requested` lasers on `grid` with the default configuration.
pub fn place_lasers(grid: &Grid, requested: i64) -> LaserResult<Placement> {
    LaserPlanner::new(grid).plan(requested)
}

#[cfg(test)]
mod tests {
    use super::{place_lasers, select_top};
    use crate::grid::Grid;
    use crate::scorer::{Facing, Hit};
    use crate::LaserError;

    fn hit(score: i64, column: usize) -> Hit {
        Hit {
            score,
            column,
            row: 0,
            facing: Some(Facing::North),
        }
    }

    #[test]
    fn rejects_non_positive_counts() {
        let grid = Grid::from_vec(vec![1; 9], 3).unwrap();
        assert_eq!(
            place_lasers(&grid, 0).err().unwrap(),
            LaserError::InvalidLaserCount { count: 0 }
        );
        assert_eq!(
            place_lasers(&grid, -2).err().unwrap(),
            LaserError::InvalidLaserCount { count: -2 }
        );
    }

    #[test]
    fn select_top_orders_descending() {
        let hits = [hit(3, 0), hit(9, 1), hit(1, 2), hit(7, 3)];
        let top = select_top(&hits, 2).unwrap();
        let scores: Vec<_> = top.iter().map(|h| h.score).collect();
        assert_eq!(scores, vec![9, 7]);
    }

    #[test]
    fn select_top_equal_scores_fill_in_arrival_order() {
        let hits = [hit(5, 0), hit(5, 1), hit(5, 2)];
        let top = select_top(&hits, 3).unwrap();
        let columns: Vec<_> = top.iter().map(|h| h.column).collect();
        assert_eq!(columns, vec![0, 1, 2]);
    }

    #[test]
    fn select_top_drops_unfilled_sentinels() {
        let hits = [hit(4, 0), hit(-3, 1)];
        let top = select_top(&hits, 2).unwrap();
        assert_eq!(top, vec![hit(4, 0)]);
    }

    #[test]
    fn clamps_to_available_cells() {
        let grid = Grid::from_vec(vec![2; 9], 3).unwrap();
        let placement = place_lasers(&grid, 8).unwrap();
        assert_eq!(placement.requested(), 8);
        assert_eq!(placement.available(), 5);
        assert_eq!(placement.capacity_exceeded(), Some(5));
        assert_eq!(placement.hits().len(), 5);
        assert!(placement.hits().iter().all(|h| h.score == 6));
    }

    #[test]
    fn tiny_grid_clamps_to_zero() {
        let grid = Grid::from_vec(vec![7; 4], 2).unwrap();
        let placement = place_lasers(&grid, 1).unwrap();
        assert_eq!(placement.capacity_exceeded(), Some(0));
        assert!(placement.into_hits().is_empty());
    }
}
