//! Simulation driver
//!
//! Owns the body list and run parameters and pushes every body through the
//! per-step pipeline, in strict order:
//! 1. reset accelerations
//! 2. direct-summation gravity over all ordered pairs
//! 3. semi-implicit Euler integration
//! 4. export, when the step index is a multiple of the cadence

use log::{debug, info, trace};

use super::body::CelestialBody;
use super::forces::{accumulate_gravity, reset_accelerations};
use super::integrator::semi_implicit_euler;
use super::params::Parameters;
use super::scenario::Scenario;
use crate::error::Result;
use crate::export::Exporter;

/// Number of progress messages logged over a full run
const PROGRESS_MILESTONES: u64 = 10;

#[derive(Debug, Clone)]
pub struct Simulation {
    pub bodies: Vec<CelestialBody>, // exclusively owned for the whole run
    pub parameters: Parameters,
    pub time: f64, // simulated seconds elapsed
}

/// What a finished run did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub steps: u64,
    pub batches: u64,
    pub time: f64,
}

impl Simulation {
    pub fn new(bodies: Vec<CelestialBody>, parameters: Parameters) -> Self {
        Self {
            bodies,
            parameters,
            time: 0.0,
        }
    }

    pub fn from_scenario(scenario: Scenario) -> Self {
        Self::new(scenario.bodies, scenario.parameters)
    }

    /// Advance every body by one time step (no export).
    pub fn step(&mut self) {
        let dt = self.parameters.time_step;

        reset_accelerations(&mut self.bodies);
        accumulate_gravity(&mut self.bodies);
        semi_implicit_euler(&mut self.bodies, dt);

        self.time += dt;
    }

    /// Run all `total_steps` steps, exporting on the configured cadence.
    ///
    /// The first exporter error stops the run and is returned.
    pub fn run<E: Exporter + ?Sized>(&mut self, exporter: &mut E) -> Result<RunSummary> {
        let total = self.parameters.total_steps;
        let milestone = (total / PROGRESS_MILESTONES).max(1);
        let mut batches = 0;

        info!(
            "running {} bodies for {} steps (dt = {} s, export every {} steps)",
            self.bodies.len(),
            total,
            self.parameters.time_step,
            self.parameters.export_every
        );

        for step in 0..total {
            self.step();
            trace!("step {step} done, t = {} s", self.time);

            if self.parameters.is_export_step(step) {
                exporter.export(step, &self.bodies)?;
                batches += 1;
                debug!("step {step}: exported {} snapshots", self.bodies.len());
            }

            if (step + 1) % milestone == 0 {
                info!("progress: {}/{} steps", step + 1, total);
            }
        }

        exporter.finish()?;

        let summary = RunSummary {
            steps: total,
            batches,
            time: self.time,
        };
        info!(
            "run finished: {} steps, {} snapshot batches, {:.3e} s simulated",
            summary.steps, summary.batches, summary.time
        );
        Ok(summary)
    }
}
