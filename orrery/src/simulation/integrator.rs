//! Fixed-step time integration for the body list.

use super::body::CelestialBody;

/// Advance every body by `dt` with semi-implicit Euler.
///
/// Accelerations must already hold the full force pass for this step.
pub fn semi_implicit_euler(bodies: &mut [CelestialBody], dt: f64) {
    for body in bodies.iter_mut() {
        body.update(dt);
    }
}
