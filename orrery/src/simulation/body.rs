//! Celestial body state and per-body physics.
//!
//! A [`CelestialBody`] carries its kinematic state plus a softening length.
//! Each step the driver runs every body through:
//!
//! 1. [`CelestialBody::reset_acceleration`]
//! 2. [`CelestialBody::add_gravity`] once per other body
//! 3. [`CelestialBody::update`]
//!
//! All bodies must finish (2) before any of them enters (3).

use super::vector::{DistanceSquared, Vector3D};

/// Newtonian gravitational constant (SI)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

/// Softening length used when a scenario does not give one (1 km)
pub const DEFAULT_SOFTENING: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    pub name: String, // label used for export only
    pub mass: f64, // kg
    pub position: Vector3D, // m
    pub velocity: Vector3D, // m/s
    pub acceleration: Vector3D, // m/s^2, accumulated since the last reset
    pub softening: f64, // m, applied to forces acting on this body
}

impl CelestialBody {
    /// Create a body at rest in acceleration.
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        position: Vector3D,
        velocity: Vector3D,
        softening: f64,
    ) -> Self {
        Self {
            name: name.into(),
            mass,
            position,
            velocity,
            acceleration: Vector3D::zeros(),
            softening,
        }
    }

    /// Zero the acceleration before a new force pass.
    pub fn reset_acceleration(&mut self) {
        self.acceleration = Vector3D::zeros();
    }

    /// Accumulate the softened pull of `other` on `self`.
    ///
    /// a += G * m_other * (x_other - x_self) / (|r|^2 + eps^2)^(3/2)
    ///
    /// `eps` is this body's own softening length, not the source's and not a
    /// pair average. Two bodies with different softening therefore do not
    /// feel equal and opposite forces.
    ///
    /// The caller must skip `other == self`. At zero separation the
    /// displacement is the zero vector so nothing is added, but the term is
    /// meaningless.
    pub fn add_gravity(&mut self, other: &CelestialBody) {
        let r2 = self.position.distance_squared(&other.position);
        let eps2 = self.softening * self.softening;

        // (r^2 + eps^2)^(3/2)
        let denom = (r2 + eps2).powf(1.5);

        // points from self toward other
        let diff = other.position - self.position;

        let magnitude = GRAVITATIONAL_CONSTANT * other.mass / denom;

        self.acceleration += diff * magnitude;
    }

    /// Semi-implicit Euler step: kick with the current acceleration, then
    /// drift with the already updated velocity.
    pub fn update(&mut self, dt: f64) {
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;
    }

    pub fn momentum(&self) -> Vector3D {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }

    pub fn distance_to(&self, other: &CelestialBody) -> f64 {
        self.position.distance_squared(&other.position).sqrt()
    }
}
