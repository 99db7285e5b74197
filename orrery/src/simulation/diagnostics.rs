//! Conserved-quantity diagnostics for a body list.
//!
//! Nothing here feeds back into the stepping; these are read-only checks used
//! for logging energy drift and in tests.

use super::body::{CelestialBody, GRAVITATIONAL_CONSTANT};
use super::vector::Vector3D;

/// Total linear momentum, sum of m_i * v_i
pub fn total_momentum(bodies: &[CelestialBody]) -> Vector3D {
    bodies
        .iter()
        .fold(Vector3D::zeros(), |acc, b| acc + b.momentum())
}

pub fn kinetic_energy(bodies: &[CelestialBody]) -> f64 {
    bodies.iter().map(CelestialBody::kinetic_energy).sum()
}

/// Unsoftened Newtonian potential energy over unordered pairs.
///
/// Coincident bodies give -inf.
pub fn potential_energy(bodies: &[CelestialBody]) -> f64 {
    let mut energy = 0.0;
    for (i, bi) in bodies.iter().enumerate() {
        for bj in &bodies[i + 1..] {
            energy -= GRAVITATIONAL_CONSTANT * bi.mass * bj.mass / bi.distance_to(bj);
        }
    }
    energy
}

pub fn total_energy(bodies: &[CelestialBody]) -> f64 {
    kinetic_energy(bodies) + potential_energy(bodies)
}

/// Mass-weighted mean position; the origin when total mass is zero.
pub fn center_of_mass(bodies: &[CelestialBody]) -> Vector3D {
    let mass: f64 = bodies.iter().map(|b| b.mass).sum();
    if mass == 0.0 {
        return Vector3D::zeros();
    }
    let weighted = bodies
        .iter()
        .fold(Vector3D::zeros(), |acc, b| acc + b.position * b.mass);
    weighted / mass
}

/// Relative change |e1 - e0| / |e0|, or the absolute change when e0 is 0.
pub fn relative_drift(e0: f64, e1: f64) -> f64 {
    if e0 == 0.0 {
        (e1 - e0).abs()
    } else {
        ((e1 - e0) / e0).abs()
    }
}
