//! Timing of the direct-summation step pipeline for growing body counts.
//!
//! Bodies are placed deterministically (no rng) so runs are comparable.

use std::time::Instant;

use log::info;

use crate::simulation::body::CelestialBody;
use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;
use crate::simulation::vector::Vector3D;

/// Body counts timed by [`bench_step`]
pub const BENCH_SIZES: [usize; 6] = [50, 100, 200, 400, 800, 1600];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepTiming {
    pub n: usize,
    pub pair_evaluations: usize, // n * (n - 1) per step
    pub seconds_per_step: f64,
}

/// Time one full step (reset, forces, integrate) for each size in `sizes`.
pub fn bench_step(sizes: &[usize], steps: usize) -> Vec<StepTiming> {
    let mut timings = Vec::with_capacity(sizes.len());

    for &n in sizes {
        let timing = time_steps(n, steps, true);
        info!(
            "N = {n:5}, pairs = {:8}, step = {:10.6} s",
            timing.pair_evaluations, timing.seconds_per_step
        );
        timings.push(timing);
    }

    timings
}

/// Print `N,ms_per_step` rows for a smooth curve, ready to paste into a sheet.
pub fn bench_step_curve() {
    println!("N,ms_per_step");

    for n in (100..=3200).step_by(100) {
        // small n: average a few steps, large n: one step is enough
        let steps = if n <= 800 { 5 } else { 1 };
        let timing = time_steps(n, steps, false);
        println!("{},{:.6}", timing.n, timing.seconds_per_step * 1000.0);
    }
}

fn time_steps(n: usize, steps: usize, warm_up: bool) -> StepTiming {
    let steps = steps.max(1);
    let mut sim = Simulation::new(make_bodies(n), make_params());

    if warm_up {
        sim.step();
    }

    let t0 = Instant::now();
    for _ in 0..steps {
        sim.step();
    }

    StepTiming {
        n,
        pair_evaluations: n * n.saturating_sub(1),
        seconds_per_step: t0.elapsed().as_secs_f64() / steps as f64,
    }
}

/// `n` unit-ish bodies spread over a few AU, at rest.
fn make_bodies(n: usize) -> Vec<CelestialBody> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            // deterministic positions, no rand needed
            let position = Vector3D::new(
                (i_f * 0.37).sin() * 5.0e11,
                (i_f * 0.13).cos() * 5.0e11,
                (i_f * 0.07).sin() * 5.0e11,
            );
            CelestialBody::new(
                format!("body-{i}"),
                1.0e24,
                position,
                Vector3D::zeros(),
                1.0e6,
            )
        })
        .collect()
}

fn make_params() -> Parameters {
    Parameters {
        time_step: 3600.0,
        total_steps: 1,
        export_every: 0,
    }
}
