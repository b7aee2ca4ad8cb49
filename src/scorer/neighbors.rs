//! Best-3-of-4 neighbor selection for interior cells.

use crate::candidate::accumulator::SortedAccumulator;
use crate::scorer::Facing;

/// Sums the best three of four neighbor values.
///
/// Each neighbor comes with the facing a laser would take if that neighbor
/// were the one left out. Neighbors are offered in the given order to a
/// capacity-3 accumulator; every accepted offer evicts the current minimum
/// and reports its facing. A rejected offer reports its own facing instead,
/// so the result is whichever neighbor was excluded last. When the last
/// eviction was a sentinel the facing is `None`.
///
/// Neighbor magnitudes must not exceed [`crate::grid::MAX_CELL_MAGNITUDE`],
/// which every [`crate::Grid`] guarantees; the running sum then cannot
/// overflow.
pub fn best_three_of_four(neighbors: [(i64, Facing); 4]) -> (Option<Facing>, i64) {
    let mut best = SortedAccumulator::with_sentinels(3);
    let mut max_sum = 0i64;
    let mut facing = None;
    for (value, label) in neighbors {
        match best.offer(value, label) {
            Some(evicted) => {
                max_sum += value - evicted.value;
                facing = evicted.label;
            }
            None => facing = Some(label),
        }
    }
    (facing, max_sum)
}

#[cfg(test)]
mod tests {
    use super::best_three_of_four;
    use crate::scorer::Facing;

    #[test]
    fn excludes_weakest_neighbor() {
        let (facing, sum) = best_three_of_four([
            (1, Facing::West),
            (5, Facing::East),
            (3, Facing::North),
            (2, Facing::South),
        ]);
        assert_eq!(sum, 10);
        assert_eq!(facing, Some(Facing::West));
    }

    #[test]
    fn last_neighbor_weakest_is_rejected() {
        let (facing, sum) = best_three_of_four([
            (4, Facing::West),
            (6, Facing::East),
            (5, Facing::North),
            (1, Facing::South),
        ]);
        assert_eq!(sum, 15);
        assert_eq!(facing, Some(Facing::South));
    }

    #[test]
    fn evicted_neighbor_supplies_facing() {
        let (facing, sum) = best_three_of_four([
            (1, Facing::West),
            (7, Facing::East),
            (8, Facing::North),
            (9, Facing::South),
        ]);
        assert_eq!(sum, 24);
        assert_eq!(facing, Some(Facing::West));
    }

    #[test]
    fn rejected_offer_relabels_facing() {
        let (facing, sum) = best_three_of_four([
            (3, Facing::West),
            (7, Facing::East),
            (8, Facing::North),
            (2, Facing::South),
        ]);
        assert_eq!(sum, 18);
        assert_eq!(facing, Some(Facing::South));
    }

    #[test]
    fn equal_neighbors_sum_three() {
        let (facing, sum) = best_three_of_four([
            (4, Facing::West),
            (4, Facing::East),
            (4, Facing::North),
            (4, Facing::South),
        ]);
        assert_eq!(sum, 12);
        assert_eq!(facing, Some(Facing::North));
    }

    #[test]
    fn negative_neighbors_are_never_kept() {
        let (facing, sum) = best_three_of_four([
            (-1, Facing::West),
            (-2, Facing::East),
            (-3, Facing::North),
            (-4, Facing::South),
        ]);
        assert_eq!(sum, 0);
        assert_eq!(facing, Some(Facing::South));
    }

    #[test]
    fn sentinel_eviction_leaves_no_facing() {
        let (facing, sum) = best_three_of_four([
            (-1, Facing::West),
            (5, Facing::East),
            (5, Facing::North),
            (5, Facing::South),
        ]);
        assert_eq!(sum, 15);
        assert_eq!(facing, None);
    }
}
