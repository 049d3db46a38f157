//! World-space point type.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// World coordinates (f32, Y-up).
///
/// The grid lies in the X/Z plane; Y is carried through unchanged so cell
/// centers can sit on whatever ground height the caller builds the grid at.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    /// X coordinate in world units
    pub x: f32,
    /// Y coordinate in world units (up)
    pub y: f32,
    /// Z coordinate in world units
    pub z: f32,
}

impl WorldPoint {
    /// Create a new world point
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Zero point (origin)
    pub const ZERO: WorldPoint = WorldPoint {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &WorldPoint) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance (faster, avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: &WorldPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Distance projected onto the ground (X/Z) plane, ignoring Y
    #[inline]
    pub fn ground_distance(&self, other: &WorldPoint) -> f32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }
}

impl Add for WorldPoint {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        WorldPoint::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for WorldPoint {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        WorldPoint::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f32> for WorldPoint {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        WorldPoint::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}
