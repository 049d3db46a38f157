//! Fundamental types shared across the crate.

mod cell;
mod point;

pub use cell::{Cell, CellCoord};
pub use point::WorldPoint;

pub(crate) use cell::NEIGHBOR_OFFSETS;
