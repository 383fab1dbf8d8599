//! 3D vector type shared by positions and directions.
//!
//! `Vec3` uses `f64` throughout: entity coordinates are scene units, and the
//! movement strategies accumulate fractional steps every tick, so the extra
//! precision over `f32` is worth the memory at the scale this simulation
//! runs (dozens of entities, not millions).

use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A point or direction in 3D scene space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Vector length (distance from the origin).
    #[inline]
    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec3) -> f64 {
        (other - self).magnitude()
    }

    /// Unit vector pointing the same way.
    ///
    /// The zero vector normalizes to itself rather than NaN so a stalled
    /// entity keeps a well-defined (if meaningless) direction.
    pub fn normalized(self) -> Vec3 {
        let mag = self.magnitude();
        if mag > 0.0 {
            Vec3::new(self.x / mag, self.y / mag, self.z / mag)
        } else {
            self
        }
    }

    /// Rotate around the vertical (y) axis by `angle` radians.
    pub fn rotated_y(self, angle: f64) -> Vec3 {
        let (sin, cos) = angle.sin_cos();
        Vec3::new(
            self.x * cos + self.z * sin,
            self.y,
            -self.x * sin + self.z * cos,
        )
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, scalar: f64) -> Vec3 {
        Vec3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}
