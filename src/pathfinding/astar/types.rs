//! A* search types.

use std::cmp::Ordering;

use crate::core::{CellCoord, WorldPoint};

/// Movement cost of one orthogonal step, in cost units
pub const ORTHOGONAL_COST: u32 = 10;

/// Movement cost of one diagonal step (⌊10·√2⌋), in cost units
pub const DIAGONAL_COST: u32 = 14;

/// An open-set entry in the A* search.
///
/// The heap may hold several entries for one cell; stale ones are skipped
/// via the closed set when popped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct OpenNode {
    pub coord: CellCoord,
    /// Cost from the start cell along the best known path
    pub g_cost: u32,
    /// Heuristic cost to the target
    pub h_cost: u32,
}

impl OpenNode {
    /// A* priority key
    #[inline]
    pub fn f_cost(&self) -> u32 {
        self.g_cost + self.h_cost
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior: lowest fCost first, ties broken
        // by lowest hCost (closer to the target), then by coordinate so
        // the expansion order is a total order independent of insertion.
        other
            .f_cost()
            .cmp(&self.f_cost())
            .then_with(|| other.h_cost.cmp(&self.h_cost))
            .then_with(|| other.coord.cmp(&self.coord))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of an A* path query
#[derive(Clone, Debug)]
pub struct PathResult {
    /// Cells traversed, from the first step after the start cell up to and
    /// including the target cell (empty on failure, or when start and
    /// target resolve to the same cell)
    pub cells: Vec<CellCoord>,
    /// Cell-center world positions for `cells`, in the same order
    pub waypoints: Vec<WorldPoint>,
    /// Total movement cost in step-cost units (0 when already arrived)
    pub cost: u32,
    /// Number of cells finalized during the search
    pub nodes_expanded: usize,
    /// Whether a path was found
    pub success: bool,
    /// Reason for failure (if any)
    pub failure_reason: Option<PathFailure>,
}

impl PathResult {
    /// Create a failed result
    pub(super) fn failed(reason: PathFailure, nodes_expanded: usize) -> Self {
        Self {
            cells: Vec::new(),
            waypoints: Vec::new(),
            cost: 0,
            nodes_expanded,
            success: false,
            failure_reason: Some(reason),
        }
    }

    /// Path length in cells traversed
    pub fn length_cells(&self) -> usize {
        self.cells.len()
    }

    /// Euclidean length along the returned waypoints, in world units.
    /// The start position is not part of the waypoint sequence, so the
    /// leading start→first-waypoint segment is not included.
    pub fn length_world(&self) -> f32 {
        self.waypoints
            .windows(2)
            .map(|pair| pair[0].distance(&pair[1]))
            .sum()
    }
}

/// Reason a path query failed.
///
/// All of these are routine outcomes, not errors: callers are expected to
/// handle them by simply not moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathFailure {
    /// Start position does not resolve to any grid cell
    StartOutOfBounds,
    /// Target position does not resolve to any grid cell
    TargetOutOfBounds,
    /// Target cell is occupied by an obstacle
    TargetBlocked,
    /// Open set exhausted without reaching the target
    NoPath,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn test_open_node_min_heap_order() {
        let mut heap = BinaryHeap::new();
        heap.push(OpenNode {
            coord: CellCoord::new(0, 0),
            g_cost: 20,
            h_cost: 10,
        });
        heap.push(OpenNode {
            coord: CellCoord::new(1, 0),
            g_cost: 10,
            h_cost: 10,
        });
        heap.push(OpenNode {
            coord: CellCoord::new(2, 0),
            g_cost: 14,
            h_cost: 10,
        });

        assert_eq!(heap.pop().unwrap().f_cost(), 20);
        assert_eq!(heap.pop().unwrap().f_cost(), 24);
        assert_eq!(heap.pop().unwrap().f_cost(), 30);
    }

    #[test]
    fn test_tie_break_prefers_lower_h() {
        let mut heap = BinaryHeap::new();
        // Same fCost, different hCost: the node closer to the target wins
        heap.push(OpenNode {
            coord: CellCoord::new(0, 0),
            g_cost: 10,
            h_cost: 20,
        });
        heap.push(OpenNode {
            coord: CellCoord::new(1, 0),
            g_cost: 20,
            h_cost: 10,
        });

        assert_eq!(heap.pop().unwrap().h_cost, 10);
    }

    #[test]
    fn test_failed_result_is_empty() {
        let result = PathResult::failed(PathFailure::NoPath, 7);
        assert!(!result.success);
        assert!(result.cells.is_empty());
        assert!(result.waypoints.is_empty());
        assert_eq!(result.nodes_expanded, 7);
        assert_eq!(result.length_cells(), 0);
        assert_eq!(result.length_world(), 0.0);
    }
}
