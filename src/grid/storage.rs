//! Grid storage and walkability classification.
//!
//! The grid is a fixed-size, row-major array of walkability flags plus the
//! metadata needed to map between world space and cell space. It is built
//! once (classifying every cell against an obstacle query) and never
//! partially mutated afterwards; a rebuild constructs a new `Grid`.

use log::debug;

use crate::core::{Cell, CellCoord, WorldPoint, NEIGHBOR_OFFSETS};

use super::{ConfigError, GridConfig};

/// Obstacle-presence predicate consumed at grid build time.
///
/// Given a world-space center and a probe radius, reports whether any
/// obstacle occupies that volume. The grid is agnostic to how obstacles are
/// represented; a physics overlap query, a tile lookup, and a hard-coded
/// test closure all work equally well.
pub trait ObstacleQuery {
    /// Does any obstacle overlap the disk of `radius` around `center`?
    fn is_blocked(&self, center: WorldPoint, radius: f32) -> bool;
}

impl<F> ObstacleQuery for F
where
    F: Fn(WorldPoint, f32) -> bool,
{
    fn is_blocked(&self, center: WorldPoint, radius: f32) -> bool {
        self(center, radius)
    }
}

/// Static walkability grid over the world X/Z plane.
///
/// Coordinate system:
/// - Cell `(0, 0)`'s center sits at `origin`
/// - Cell `(x, z)`'s center sits at `origin + (x·cell_size, 0, z·cell_size)`
/// - World positions resolve to the nearest cell center (per-axis rounding)
#[derive(Clone, Debug)]
pub struct Grid {
    /// Walkability flags, row-major (`z * width + x`)
    walkable: Vec<bool>,
    /// Grid width in cells
    width: usize,
    /// Grid height in cells
    height: usize,
    /// Edge length of one cell in world units
    cell_size: f32,
    /// World position of cell (0, 0)'s center
    origin: WorldPoint,
}

impl Grid {
    /// Fraction of the cell size used as the obstacle probe radius.
    /// Slightly under half a cell, so obstacles hugging a cell border do
    /// not blockade both adjacent cells.
    const PROBE_RADIUS_FACTOR: f32 = 0.4;

    /// Build a grid with an explicit origin (world position of cell
    /// (0, 0)'s center).
    ///
    /// Every cell center is probed against `query` with radius
    /// `0.4 × cell_size`; cells reported blocked are non-walkable. Fails
    /// only on invalid construction parameters.
    pub fn build<Q: ObstacleQuery + ?Sized>(
        config: GridConfig,
        origin: WorldPoint,
        query: &Q,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let GridConfig {
            width,
            height,
            cell_size,
        } = config;

        let radius = cell_size * Self::PROBE_RADIUS_FACTOR;
        let mut walkable = Vec::with_capacity(width * height);
        for z in 0..height {
            for x in 0..width {
                let center = WorldPoint::new(
                    origin.x + x as f32 * cell_size,
                    origin.y,
                    origin.z + z as f32 * cell_size,
                );
                walkable.push(!query.is_blocked(center, radius));
            }
        }

        let grid = Self {
            walkable,
            width,
            height,
            cell_size,
            origin,
        };
        let counts = grid.cell_counts();
        debug!(
            "[Grid] built {}x{} cells (size {}), {} walkable / {} blocked",
            width, height, cell_size, counts.walkable, counts.blocked
        );
        Ok(grid)
    }

    /// Build a grid centered on `center`, the way a scene transform owning
    /// the grid footprint would place it.
    pub fn centered<Q: ObstacleQuery + ?Sized>(
        config: GridConfig,
        center: WorldPoint,
        query: &Q,
    ) -> Result<Self, ConfigError> {
        let origin = WorldPoint::new(
            center.x - config.width as f32 * config.cell_size * 0.5,
            center.y,
            center.z - config.height as f32 * config.cell_size * 0.5,
        );
        Self::build(config, origin, query)
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Edge length of one cell in world units
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// World position of cell (0, 0)'s center
    #[inline]
    pub fn origin(&self) -> WorldPoint {
        self.origin
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Check if a coordinate is within grid bounds
    #[inline]
    pub fn in_bounds(&self, coord: CellCoord) -> bool {
        coord.x >= 0
            && coord.z >= 0
            && (coord.x as usize) < self.width
            && (coord.z as usize) < self.height
    }

    /// Convert a coordinate to its flat array index
    #[inline]
    fn coord_to_index(&self, coord: CellCoord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.z as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// World position of a cell's center (no bounds check; pure geometry)
    #[inline]
    pub fn cell_center(&self, coord: CellCoord) -> WorldPoint {
        WorldPoint::new(
            self.origin.x + coord.x as f32 * self.cell_size,
            self.origin.y,
            self.origin.z + coord.z as f32 * self.cell_size,
        )
    }

    /// Resolve a world position to the nearest cell.
    ///
    /// Returns `None` when the rounded coordinate falls outside the grid
    /// footprint. Out-of-range input is a normal, expected outcome for
    /// callers (clicks off the map), never a panic.
    #[inline]
    pub fn world_to_cell(&self, position: WorldPoint) -> Option<CellCoord> {
        let local = position - self.origin;
        let coord = CellCoord::new(
            (local.x / self.cell_size).round() as i32,
            (local.z / self.cell_size).round() as i32,
        );
        self.in_bounds(coord).then_some(coord)
    }

    /// Cell at a coordinate, or `None` if out of bounds. O(1).
    #[inline]
    pub fn cell_at(&self, coord: CellCoord) -> Option<Cell> {
        self.coord_to_index(coord).map(|i| Cell {
            coord,
            center: self.cell_center(coord),
            walkable: self.walkable[i],
        })
    }

    /// Walkability at a coordinate. Out-of-bounds cells are not walkable.
    #[inline]
    pub fn is_walkable(&self, coord: CellCoord) -> bool {
        self.coord_to_index(coord)
            .map(|i| self.walkable[i])
            .unwrap_or(false)
    }

    /// In-bounds Moore neighbors of a cell, at most 8, in the fixed
    /// documented offset order (dx ascending, then dz ascending, zero
    /// offset skipped).
    ///
    /// Order carries no meaning for correctness but is deterministic so
    /// repeated searches expand identically.
    pub fn neighbors(&self, coord: CellCoord) -> impl Iterator<Item = CellCoord> + '_ {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dx, dz)| CellCoord::new(coord.x + dx, coord.z + dz))
            .filter(|&c| self.in_bounds(c))
    }

    /// Iterate over all cells with their coordinates, row-major
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.walkable.len()).map(move |i| {
            let coord = CellCoord::new((i % self.width) as i32, (i / self.width) as i32);
            Cell {
                coord,
                center: self.cell_center(coord),
                walkable: self.walkable[i],
            }
        })
    }

    /// Count walkable and blocked cells
    pub fn cell_counts(&self) -> CellCounts {
        let walkable = self.walkable.iter().filter(|&&w| w).count();
        CellCounts {
            walkable,
            blocked: self.walkable.len() - walkable,
        }
    }

    /// Render the grid as ASCII art for debugging ('.' walkable, '#'
    /// blocked). Rows are printed with +Z upward.
    pub fn render_ascii(&self) -> String {
        self.render_ascii_with_path(&[])
    }

    /// Render the grid with a path overlay ('*' for path cells)
    pub fn render_ascii_with_path(&self, path: &[CellCoord]) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for z in (0..self.height).rev() {
            for x in 0..self.width {
                let coord = CellCoord::new(x as i32, z as i32);
                if path.contains(&coord) {
                    out.push('*');
                } else if self.is_walkable(coord) {
                    out.push('.');
                } else {
                    out.push('#');
                }
            }
            out.push('\n');
        }
        out
    }
}

/// Cell counts by walkability
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellCounts {
    /// Cells free of obstacles at build time
    pub walkable: usize,
    /// Cells occupied by an obstacle at build time
    pub blocked: usize,
}

impl CellCounts {
    /// Total cells
    pub fn total(&self) -> usize {
        self.walkable + self.blocked
    }
}
