//! Cell addressing for the walkability grid.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

use super::WorldPoint;

/// Grid coordinates (integer cell indices).
///
/// `x` is the column, `z` the row, matching the world X/Z ground plane.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct CellCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Z coordinate (row index)
    pub z: i32,
}

/// Moore-neighborhood offsets in the fixed iteration order used by the
/// search: dx ascending in the outer position, dz ascending in the inner,
/// with the zero offset skipped. Search determinism relies on this order
/// never changing.
pub(crate) const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl CellCoord {
    /// Create a new cell coordinate
    #[inline]
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Chebyshev distance (max of per-axis distances), in cells
    #[inline]
    pub fn chebyshev_distance(&self, other: &CellCoord) -> i32 {
        (self.x - other.x).abs().max((self.z - other.z).abs())
    }

    /// Is `other` one of this coordinate's 8 Moore neighbors?
    #[inline]
    pub fn is_adjacent(&self, other: &CellCoord) -> bool {
        *self != *other && self.chebyshev_distance(other) == 1
    }

    /// The 8 surrounding coordinates, in the fixed neighbor order.
    ///
    /// Unfiltered; callers bound-check against the grid.
    #[inline]
    pub fn neighbors_8(&self) -> [CellCoord; 8] {
        let mut out = [*self; 8];
        for (slot, (dx, dz)) in out.iter_mut().zip(NEIGHBOR_OFFSETS) {
            *slot = CellCoord::new(self.x + dx, self.z + dz);
        }
        out
    }
}

impl Add for CellCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        CellCoord::new(self.x + other.x, self.z + other.z)
    }
}

impl Sub for CellCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        CellCoord::new(self.x - other.x, self.z - other.z)
    }
}

/// A single grid cell.
///
/// Cells are immutable snapshots reconstructed from the grid's storage:
/// coordinate and center are fixed at build time, and walkability never
/// changes without a full grid rebuild. Search bookkeeping (costs, parent
/// links) deliberately does not live here; it is allocated per search by
/// the planner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    /// Grid coordinate, unique per cell
    pub coord: CellCoord,
    /// World position of the cell's center
    pub center: WorldPoint,
    /// Was the cell free of obstacles at build time?
    pub walkable: bool,
}

impl Cell {
    /// Single character representation for debugging
    pub fn as_char(&self) -> char {
        if self.walkable {
            '.'
        } else {
            '#'
        }
    }
}
