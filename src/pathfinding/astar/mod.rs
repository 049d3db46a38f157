//! A* search implementation.
//!
//! Classic A* on the 8-connected cell graph with an integer cost unit
//! system: an orthogonal step costs 10 and a diagonal step 14 (≈ 10·√2,
//! rounded down). Integer costs keep comparisons exact, with no
//! floating-point accumulation error across long paths.

mod planner;
mod types;

pub use planner::AStarPlanner;
pub use types::{PathFailure, PathResult, DIAGONAL_COST, ORTHOGONAL_COST};
