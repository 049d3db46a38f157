//! A* planner implementation.

use log::{debug, trace};
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::core::{CellCoord, WorldPoint};
use crate::grid::Grid;

use super::types::{OpenNode, PathFailure, PathResult, DIAGONAL_COST, ORTHOGONAL_COST};

/// A* pathfinder over a borrowed grid.
///
/// All search bookkeeping (cost maps, parent links, open/closed sets) is
/// allocated per call, so one planner can serve any number of queries and
/// concurrent searches over the same grid are safe.
pub struct AStarPlanner<'a> {
    grid: &'a Grid,
}

impl<'a> AStarPlanner<'a> {
    /// Create a planner for a grid
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Find a path between two world positions.
    ///
    /// Both positions are resolved to their nearest cells first. A start
    /// or target that falls off the grid, or a target cell occupied by an
    /// obstacle, is rejected before any search runs. On success the
    /// waypoints run from the first step after the start cell to the
    /// target cell's center; a start and target resolving to the same
    /// cell succeed with an empty waypoint sequence.
    pub fn find_path(&self, start: WorldPoint, target: WorldPoint) -> PathResult {
        let Some(start_cell) = self.grid.world_to_cell(start) else {
            debug!(
                "[AStar] FAILED: start ({:.2},{:.2}) off grid",
                start.x, start.z
            );
            return PathResult::failed(PathFailure::StartOutOfBounds, 0);
        };
        let Some(target_cell) = self.grid.world_to_cell(target) else {
            debug!(
                "[AStar] FAILED: target ({:.2},{:.2}) off grid",
                target.x, target.z
            );
            return PathResult::failed(PathFailure::TargetOutOfBounds, 0);
        };
        self.find_path_cells(start_cell, target_cell)
    }

    /// Find a path between two cell coordinates.
    pub fn find_path_cells(&self, start: CellCoord, target: CellCoord) -> PathResult {
        trace!(
            "[AStar] find_path: start=({},{}) target=({},{})",
            start.x,
            start.z,
            target.x,
            target.z
        );

        if !self.grid.in_bounds(start) {
            debug!("[AStar] FAILED: start cell out of bounds");
            return PathResult::failed(PathFailure::StartOutOfBounds, 0);
        }
        if !self.grid.in_bounds(target) {
            debug!("[AStar] FAILED: target cell out of bounds");
            return PathResult::failed(PathFailure::TargetOutOfBounds, 0);
        }
        // Unreachable targets are rejected up front; the start cell is not
        // checked so a controller standing on (or clicked onto) a blocked
        // cell can still path off it.
        if !self.grid.is_walkable(target) {
            debug!(
                "[AStar] FAILED: target cell ({},{}) blocked",
                target.x, target.z
            );
            return PathResult::failed(PathFailure::TargetBlocked, 0);
        }

        // Search-local scratch state, fresh for every call
        let mut open_set = BinaryHeap::new();
        let mut closed_set: HashSet<CellCoord> = HashSet::new();
        let mut came_from: HashMap<CellCoord, CellCoord> = HashMap::new();
        let mut g_scores: HashMap<CellCoord, u32> = HashMap::new();

        open_set.push(OpenNode {
            coord: start,
            g_cost: 0,
            h_cost: heuristic(start, target),
        });
        g_scores.insert(start, 0);

        let mut nodes_expanded = 0;

        while let Some(current) = open_set.pop() {
            // Stale heap entry for an already-finalized cell
            if !closed_set.insert(current.coord) {
                continue;
            }
            nodes_expanded += 1;

            if current.coord == target {
                return self.reconstruct_path(&came_from, start, target, current.g_cost, nodes_expanded);
            }

            for neighbor in self.grid.neighbors(current.coord) {
                if !self.grid.is_walkable(neighbor) || closed_set.contains(&neighbor) {
                    continue;
                }

                let tentative_g = current.g_cost + step_cost(current.coord, neighbor);
                let known_g = g_scores.get(&neighbor).copied().unwrap_or(u32::MAX);
                if tentative_g < known_g {
                    g_scores.insert(neighbor, tentative_g);
                    came_from.insert(neighbor, current.coord);
                    open_set.push(OpenNode {
                        coord: neighbor,
                        g_cost: tentative_g,
                        h_cost: heuristic(neighbor, target),
                    });
                }
            }
        }

        debug!(
            "[AStar] FAILED: no path after expanding {} nodes",
            nodes_expanded
        );
        PathResult::failed(PathFailure::NoPath, nodes_expanded)
    }

    /// Walk the parent links from the target back to (but excluding) the
    /// start cell, then reverse so the path runs start→target.
    fn reconstruct_path(
        &self,
        came_from: &HashMap<CellCoord, CellCoord>,
        start: CellCoord,
        target: CellCoord,
        cost: u32,
        nodes_expanded: usize,
    ) -> PathResult {
        let mut cells = Vec::new();
        let mut current = target;

        while current != start {
            cells.push(current);
            // Every non-start cell on the path was discovered through a
            // parent, so the link always exists
            current = came_from[&current];
        }
        cells.reverse();

        let waypoints: Vec<WorldPoint> = cells.iter().map(|&c| self.grid.cell_center(c)).collect();

        trace!(
            "[AStar] SUCCESS: {} cells, cost={}, nodes_expanded={}",
            cells.len(),
            cost,
            nodes_expanded
        );

        PathResult {
            cells,
            waypoints,
            cost,
            nodes_expanded,
            success: true,
            failure_reason: None,
        }
    }
}

/// Movement cost for one step between adjacent cells
#[inline]
fn step_cost(from: CellCoord, to: CellCoord) -> u32 {
    if from.x != to.x && from.z != to.z {
        DIAGONAL_COST
    } else {
        ORTHOGONAL_COST
    }
}

/// Octile distance in step-cost units: admissible and consistent for the
/// 8-connected grid with 10/14 step costs.
#[inline]
fn heuristic(from: CellCoord, to: CellCoord) -> u32 {
    let dx = (from.x - to.x).unsigned_abs();
    let dz = (from.z - to.z).unsigned_abs();
    let (min, max) = if dx < dz { (dx, dz) } else { (dz, dx) };
    DIAGONAL_COST * min + ORTHOGONAL_COST * (max - min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridConfig;

    fn open_grid() -> Grid {
        Grid::build(
            GridConfig::new(10, 10, 1.0),
            WorldPoint::ZERO,
            &|_: WorldPoint, _: f32| false,
        )
        .unwrap()
    }

    #[test]
    fn test_step_cost() {
        let a = CellCoord::new(3, 3);
        assert_eq!(step_cost(a, CellCoord::new(4, 3)), ORTHOGONAL_COST);
        assert_eq!(step_cost(a, CellCoord::new(3, 2)), ORTHOGONAL_COST);
        assert_eq!(step_cost(a, CellCoord::new(4, 4)), DIAGONAL_COST);
        assert_eq!(step_cost(a, CellCoord::new(2, 4)), DIAGONAL_COST);
    }

    #[test]
    fn test_heuristic_octile() {
        let origin = CellCoord::new(0, 0);
        // Pure orthogonal
        assert_eq!(heuristic(origin, CellCoord::new(5, 0)), 50);
        // Pure diagonal
        assert_eq!(heuristic(origin, CellCoord::new(4, 4)), 56);
        // Mixed: 3 diagonal + 2 straight
        assert_eq!(heuristic(origin, CellCoord::new(5, 3)), 3 * 14 + 2 * 10);
        // Symmetric
        assert_eq!(
            heuristic(CellCoord::new(-2, 7), CellCoord::new(4, 1)),
            heuristic(CellCoord::new(4, 1), CellCoord::new(-2, 7))
        );
    }

    #[test]
    fn test_heuristic_is_admissible_on_open_grid() {
        // On an obstacle-free grid the heuristic equals the true cost
        let grid = open_grid();
        let planner = AStarPlanner::new(&grid);
        let start = CellCoord::new(1, 2);
        for target in [
            CellCoord::new(8, 2),
            CellCoord::new(1, 9),
            CellCoord::new(7, 6),
            CellCoord::new(0, 0),
        ] {
            let result = planner.find_path_cells(start, target);
            assert!(result.success);
            assert_eq!(result.cost, heuristic(start, target));
        }
    }

    #[test]
    fn test_find_path_cells_rejects_out_of_bounds() {
        let grid = open_grid();
        let planner = AStarPlanner::new(&grid);

        let result = planner.find_path_cells(CellCoord::new(-1, 0), CellCoord::new(5, 5));
        assert_eq!(result.failure_reason, Some(PathFailure::StartOutOfBounds));

        let result = planner.find_path_cells(CellCoord::new(0, 0), CellCoord::new(5, 10));
        assert_eq!(result.failure_reason, Some(PathFailure::TargetOutOfBounds));
    }

    #[test]
    fn test_start_on_blocked_cell_can_escape() {
        // Only the start cell itself is blocked; the search may leave it
        let grid = Grid::build(
            GridConfig::new(5, 5, 1.0),
            WorldPoint::ZERO,
            &|center: WorldPoint, _: f32| center.x.round() as i32 == 0 && center.z.round() as i32 == 0,
        )
        .unwrap();
        let planner = AStarPlanner::new(&grid);

        let result = planner.find_path_cells(CellCoord::new(0, 0), CellCoord::new(3, 0));
        assert!(result.success);
        assert_eq!(*result.cells.last().unwrap(), CellCoord::new(3, 0));
    }

    #[test]
    fn test_path_cells_are_adjacent_chain() {
        let grid = open_grid();
        let planner = AStarPlanner::new(&grid);
        let start = CellCoord::new(0, 9);
        let result = planner.find_path_cells(start, CellCoord::new(9, 0));
        assert!(result.success);

        let mut prev = start;
        for &cell in &result.cells {
            assert!(prev.is_adjacent(&cell));
            prev = cell;
        }
    }

    #[test]
    fn test_cost_matches_step_sum() {
        let grid = open_grid();
        let planner = AStarPlanner::new(&grid);
        let start = CellCoord::new(2, 1);
        let result = planner.find_path_cells(start, CellCoord::new(8, 7));
        assert!(result.success);

        let mut total = 0;
        let mut prev = start;
        for &cell in &result.cells {
            total += step_cost(prev, cell);
            prev = cell;
        }
        assert_eq!(total, result.cost);
    }
}
