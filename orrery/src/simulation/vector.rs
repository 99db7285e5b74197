//! Spatial vector type for the simulation.
//!
//! `Vector3D` is a plain `nalgebra` 3-vector of `f64`, so the arithmetic the
//! physics needs comes straight from its operators:
//!
//! - sum: `a + b`
//! - difference: `a - b`
//! - in-place accumulation: `a += b`
//! - scaling: `a * k`
//! - Euclidean length: `a.norm()`
//!
//! The only extra is [`DistanceSquared`], which the force pass uses so that no
//! square root is taken in the O(n²) inner loop.

use nalgebra::Vector3;

pub type Vector3D = Vector3<f64>;

/// Squared Euclidean distance between two points.
pub trait DistanceSquared {
    fn distance_squared(&self, other: &Self) -> f64;
}

impl DistanceSquared for Vector3D {
    #[inline]
    fn distance_squared(&self, other: &Vector3D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }
}
