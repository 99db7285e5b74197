//! Direct-summation gravity pass.
//!
//! Every ordered pair (target, source) with target != source is evaluated on
//! its own, n * (n - 1) evaluations per step. The pair is not folded into a
//! single equal-and-opposite update: `add_gravity` softens with the target's
//! own length, so the two directions of a pair generally differ.

use super::body::CelestialBody;

/// Zero every body's acceleration.
pub fn reset_accelerations(bodies: &mut [CelestialBody]) {
    for body in bodies.iter_mut() {
        body.reset_acceleration();
    }
}

/// Accumulate the pull of every other body into each body's acceleration.
pub fn accumulate_gravity(bodies: &mut [CelestialBody]) {
    let n = bodies.len();
    if n < 2 { // nothing pulls on a lone body
        return;
    }

    for target in 0..n {
        for source in 0..n {
            // a body doesn't pull on itself
            if target == source {
                continue;
            }
            let (t, s) = target_and_source(bodies, target, source);
            t.add_gravity(s);
        }
    }
}

/// Borrow `bodies[target]` mutably and `bodies[source]` shared at the same time.
fn target_and_source(
    bodies: &mut [CelestialBody],
    target: usize,
    source: usize,
) -> (&mut CelestialBody, &CelestialBody) {
    debug_assert_ne!(target, source);
    if target < source {
        let (head, tail) = bodies.split_at_mut(source);
        (&mut head[target], &tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(target);
        (&mut tail[0], &head[source])
    }
}
