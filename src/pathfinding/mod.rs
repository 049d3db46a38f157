//! A* pathfinding over the walkability grid.

mod astar;

pub use astar::{AStarPlanner, PathFailure, PathResult, DIAGONAL_COST, ORTHOGONAL_COST};

use crate::core::WorldPoint;
use crate::grid::Grid;

/// Find a path between two world positions
pub fn find_path(grid: &Grid, start: WorldPoint, target: WorldPoint) -> PathResult {
    AStarPlanner::new(grid).find_path(start, target)
}

/// Check if a path exists (discards the waypoints)
pub fn path_exists(grid: &Grid, start: WorldPoint, target: WorldPoint) -> bool {
    find_path(grid, start, target).success
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellCoord;
    use crate::grid::GridConfig;

    /// 5x5 grid with unit cells, origin at (0,0,0), obstacles wherever
    /// `blocked` says so (by cell coordinate).
    fn grid_5x5(blocked: impl Fn(i32, i32) -> bool) -> Grid {
        let query = move |center: WorldPoint, _: f32| {
            blocked(center.x.round() as i32, center.z.round() as i32)
        };
        Grid::build(GridConfig::new(5, 5, 1.0), WorldPoint::ZERO, &query).unwrap()
    }

    #[test]
    fn test_open_grid_diagonal() {
        // Scenario: free 5x5 grid, corner to corner is 4 diagonal steps
        let grid = grid_5x5(|_, _| false);
        let result = find_path(
            &grid,
            WorldPoint::new(0.0, 0.0, 0.0),
            WorldPoint::new(4.0, 0.0, 4.0),
        );

        assert!(result.success);
        assert_eq!(result.cells.len(), 4);
        assert_eq!(result.cost, 4 * DIAGONAL_COST);
        assert_eq!(*result.cells.last().unwrap(), CellCoord::new(4, 4));
        assert_eq!(
            *result.waypoints.last().unwrap(),
            WorldPoint::new(4.0, 0.0, 4.0)
        );
    }

    #[test]
    fn test_routes_around_wall() {
        // Wall on column x=2 with only the end rows open; the straight
        // line is blocked and the path must detour through row 0 or 4
        let grid = grid_5x5(|x, z| x == 2 && (1..=3).contains(&z));
        let result = find_path(
            &grid,
            WorldPoint::new(0.0, 0.0, 2.0),
            WorldPoint::new(4.0, 0.0, 2.0),
        );

        assert!(result.success);
        // Strictly more expensive than the unobstructed straight line
        assert!(result.cost > 4 * ORTHOGONAL_COST);
        assert_eq!(*result.cells.last().unwrap(), CellCoord::new(4, 2));
        // Detour never touches the wall
        assert!(result
            .cells
            .iter()
            .all(|c| !(c.x == 2 && (1..=3).contains(&c.z))));
    }

    #[test]
    fn test_full_wall_disconnects_grid() {
        // Column x=2 blocked for every row: the halves are disconnected
        let grid = grid_5x5(|x, _| x == 2);
        let result = find_path(
            &grid,
            WorldPoint::new(0.0, 0.0, 2.0),
            WorldPoint::new(4.0, 0.0, 2.0),
        );

        assert!(!result.success);
        assert_eq!(result.failure_reason, Some(PathFailure::NoPath));
    }

    #[test]
    fn test_blocked_target_rejected_without_search() {
        let grid = grid_5x5(|x, z| x == 4 && z == 4);
        let result = find_path(
            &grid,
            WorldPoint::new(0.0, 0.0, 0.0),
            WorldPoint::new(4.0, 0.0, 4.0),
        );

        assert!(!result.success);
        assert_eq!(result.failure_reason, Some(PathFailure::TargetBlocked));
        assert_eq!(result.nodes_expanded, 0);
        assert!(result.waypoints.is_empty());
    }

    #[test]
    fn test_same_cell_start_and_target() {
        // Already arrived: success with no waypoints, not an error
        let grid = grid_5x5(|_, _| false);
        let result = find_path(
            &grid,
            WorldPoint::new(2.0, 0.0, 2.0),
            WorldPoint::new(2.2, 0.0, 1.8),
        );

        assert!(result.success);
        assert!(result.waypoints.is_empty());
        assert_eq!(result.cost, 0);
    }

    #[test]
    fn test_enclosed_target_exhausts_open_set() {
        // Ring of obstacles around (2, 2); target itself stays walkable
        let grid = grid_5x5(|x, z| {
            let (dx, dz) = ((x - 2).abs(), (z - 2).abs());
            dx.max(dz) == 1
        });
        let result = find_path(
            &grid,
            WorldPoint::new(0.0, 0.0, 0.0),
            WorldPoint::new(2.0, 0.0, 2.0),
        );

        assert!(!result.success);
        assert_eq!(result.failure_reason, Some(PathFailure::NoPath));
        assert!(result.nodes_expanded > 0);
    }

    #[test]
    fn test_off_grid_endpoints() {
        let grid = grid_5x5(|_, _| false);

        let result = find_path(
            &grid,
            WorldPoint::new(-10.0, 0.0, 0.0),
            WorldPoint::new(4.0, 0.0, 4.0),
        );
        assert_eq!(result.failure_reason, Some(PathFailure::StartOutOfBounds));

        let result = find_path(
            &grid,
            WorldPoint::new(0.0, 0.0, 0.0),
            WorldPoint::new(40.0, 0.0, 4.0),
        );
        assert_eq!(result.failure_reason, Some(PathFailure::TargetOutOfBounds));
    }

    #[test]
    fn test_path_exists() {
        let open = grid_5x5(|_, _| false);
        assert!(path_exists(
            &open,
            WorldPoint::new(0.0, 0.0, 0.0),
            WorldPoint::new(4.0, 0.0, 4.0)
        ));

        let walled = grid_5x5(|x, _| x == 2);
        assert!(!path_exists(
            &walled,
            WorldPoint::new(0.0, 0.0, 0.0),
            WorldPoint::new(4.0, 0.0, 0.0)
        ));
    }

    #[test]
    fn test_waypoints_exclude_start() {
        let grid = grid_5x5(|_, _| false);
        let start = WorldPoint::new(1.0, 0.0, 1.0);
        let result = find_path(&grid, start, WorldPoint::new(3.0, 0.0, 1.0));

        assert!(result.success);
        assert!(!result.waypoints.contains(&start));
        assert_eq!(result.waypoints.len(), 2);
    }
}
