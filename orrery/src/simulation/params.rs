//! Run parameters for the simulation
//!
//! `Parameters` holds the three settings fixed for a whole run:
//! - step size in seconds,
//! - number of steps,
//! - export cadence in steps (0 disables export)

use crate::error::{OrreryError, Result};

/// One day in seconds
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Steps per simulated year at the default one-day step
pub const DAYS_PER_YEAR: u64 = 365;

/// One Neptune orbit
pub const DEFAULT_YEARS: u64 = 165;

pub const DEFAULT_EXPORT_EVERY: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub time_step: f64, // seconds per step
    pub total_steps: u64, // steps to run
    pub export_every: u64, // steps between snapshots
}

/// Step count for `years` years at 365 steps per year.
pub fn steps_for_years(years: u64) -> Result<u64> {
    years.checked_mul(DAYS_PER_YEAR).ok_or_else(|| {
        OrreryError::InvalidScenario(format!("{years} years does not fit in a u64 step count"))
    })
}

impl Parameters {
    /// One-day steps for `years` simulated years.
    pub fn for_years(years: u64) -> Result<Self> {
        Ok(Self {
            total_steps: steps_for_years(years)?,
            ..Self::default()
        })
    }

    /// Whether the state after step `step` is exported.
    pub fn is_export_step(&self, step: u64) -> bool {
        self.export_every != 0 && step % self.export_every == 0
    }
}

/// The reference run: one-day steps for 165 years, export every 10 steps.
impl Default for Parameters {
    fn default() -> Self {
        Self {
            time_step: SECONDS_PER_DAY,
            total_steps: DAYS_PER_YEAR * DEFAULT_YEARS,
            export_every: DEFAULT_EXPORT_EVERY,
        }
    }
}
