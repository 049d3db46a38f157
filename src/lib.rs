//! # Gridnav: Grid-Based A* Pathfinding
//!
//! On-demand shortest-path queries over a static, uniform 2D grid embedded
//! in 3D world space, for use by top-down movement controllers.
//!
//! ## Quick Start
//!
//! ```rust
//! use gridnav::core::WorldPoint;
//! use gridnav::grid::{Grid, GridConfig};
//! use gridnav::pathfinding::AStarPlanner;
//!
//! // Build a 20x20 grid centered on the world origin, with no obstacles.
//! let config = GridConfig::new(20, 20, 1.0);
//! let no_obstacles = |_center: WorldPoint, _radius: f32| false;
//! let grid = Grid::centered(config, WorldPoint::ZERO, &no_obstacles).expect("valid config");
//!
//! let planner = AStarPlanner::new(&grid);
//! let result = planner.find_path(
//!     WorldPoint::new(-8.0, 0.0, -8.0),
//!     WorldPoint::new(8.0, 0.0, 8.0),
//! );
//! assert!(result.success);
//! for waypoint in &result.waypoints {
//!     println!("({:.1}, {:.1}, {:.1})", waypoint.x, waypoint.y, waypoint.z);
//! }
//! ```
//!
//! ## Coordinate Frame
//!
//! The grid lies in the world X/Z plane with Y up (top-down convention):
//! - Cell `(x, z)` maps to world position `origin + (x·cell_size, 0, z·cell_size)`
//! - `origin` is the world position of cell `(0, 0)`'s center
//! - World positions resolve to the *nearest* cell (round, not floor)
//!
//! ## Architecture
//!
//! - [`core`]: Fundamental types (`WorldPoint`, `CellCoord`, `Cell`)
//! - [`grid`]: Grid storage, walkability classification, configuration
//! - [`pathfinding`]: A* search and path reconstruction
//!
//! ## Execution Model
//!
//! Everything is synchronous and blocking: grid construction runs once at
//! startup (or on an explicit rebuild), searches run to completion on the
//! caller's thread. Search scratch state is allocated per call, so any
//! number of searches may run concurrently against one shared `Grid`.

pub mod core;
pub mod grid;
pub mod pathfinding;

// Re-export main types at crate root
pub use crate::core::{Cell, CellCoord, WorldPoint};
pub use grid::{ConfigError, ConfigLoadError, Grid, GridConfig, ObstacleQuery};
pub use pathfinding::{find_path, path_exists, AStarPlanner, PathFailure, PathResult};
