//! Grid construction, walkability classification, and lookup.

mod config;
mod storage;

pub use config::{ConfigError, ConfigLoadError, GridConfig};
pub use storage::{CellCounts, Grid, ObstacleQuery};
