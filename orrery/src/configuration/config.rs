//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – step size, run length and export cadence
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   time_step: 86400.0      # seconds per step (default: one day)
//!   years: 1                # 365 steps per year (default: 165)
//!   # total_steps: 365      # takes precedence over `years`
//!   export_every: 10        # steps between snapshots, 0 = never (default: 10)
//!
//! bodies:
//!   - name: Sun
//!     mass: 1.989e30
//!     position: [0.0, 0.0, 0.0]
//!     velocity: [0.0, 0.0, 0.0]
//!     softening: 10000.0    # default: 1000.0
//!   - name: Earth
//!     mass: 5.972e24
//!     position: [1.496e11, 0.0, 0.0]
//!     velocity: [0.0, 29780.0, 0.0]
//! ```
//!
//! The whole `parameters` block may be left out. No physical validation is
//! done here; masses, softening and step size are taken as given.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::simulation::body::DEFAULT_SOFTENING;
use crate::simulation::params::{
    steps_for_years, DEFAULT_EXPORT_EVERY, DEFAULT_YEARS, SECONDS_PER_DAY,
};

/// Run parameters as written in the scenario file
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ParametersConfig {
    #[serde(default = "default_time_step")]
    pub time_step: f64, // seconds per step
    #[serde(default)]
    pub total_steps: Option<u64>, // exact step count
    #[serde(default)]
    pub years: Option<u64>, // 365 steps each, used when total_steps is absent
    #[serde(default = "default_export_every")]
    pub export_every: u64, // steps between snapshots
}

impl ParametersConfig {
    /// `total_steps` if set, otherwise 365 steps per year.
    ///
    /// Fails when `years` is too large to count in steps.
    pub fn total_steps(&self) -> Result<u64> {
        match self.total_steps {
            Some(steps) => Ok(steps),
            None => steps_for_years(self.years.unwrap_or(DEFAULT_YEARS)),
        }
    }
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            time_step: default_time_step(),
            total_steps: None,
            years: None,
            export_every: default_export_every(),
        }
    }
}

/// Initial state of a single body
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    pub name: String,
    pub mass: f64, // kg
    pub position: [f64; 3], // m
    pub velocity: [f64; 3], // m/s
    #[serde(default = "default_softening")]
    pub softening: f64, // m
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

fn default_time_step() -> f64 {
    SECONDS_PER_DAY
}

fn default_export_every() -> u64 {
    DEFAULT_EXPORT_EVERY
}

fn default_softening() -> f64 {
    DEFAULT_SOFTENING
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrreryError;

    #[test]
    fn full_scenario_parses() {
        let cfg = ScenarioConfig::from_yaml_str(
            r#"
parameters:
  time_step: 3600.0
  total_steps: 48
  export_every: 4
bodies:
  - name: Sun
    mass: 1.989e30
    position: [0.0, 0.0, 0.0]
    velocity: [0.0, 0.0, 0.0]
    softening: 10000.0
  - name: Earth
    mass: 5.972e24
    position: [1.496e11, 0.0, 0.0]
    velocity: [0.0, 29780.0, 0.0]
"#,
        )
        .unwrap();

        assert_eq!(cfg.parameters.time_step, 3600.0);
        assert_eq!(cfg.parameters.total_steps().unwrap(), 48);
        assert_eq!(cfg.parameters.export_every, 4);
        assert_eq!(cfg.bodies.len(), 2);
        assert_eq!(cfg.bodies[0].softening, 10_000.0);
        assert_eq!(cfg.bodies[1].name, "Earth");
        assert_eq!(cfg.bodies[1].velocity, [0.0, 29_780.0, 0.0]);
        assert_eq!(cfg.bodies[1].softening, DEFAULT_SOFTENING);
    }

    #[test]
    fn parameters_default_to_reference_run() {
        let cfg = ScenarioConfig::from_yaml_str("bodies: []").unwrap();
        assert_eq!(cfg.parameters, ParametersConfig::default());
        assert_eq!(cfg.parameters.time_step, 86_400.0);
        assert_eq!(cfg.parameters.total_steps().unwrap(), 365 * 165);
        assert_eq!(cfg.parameters.export_every, 10);
    }

    #[test]
    fn years_converts_to_steps_unless_total_given() {
        let cfg = ScenarioConfig::from_yaml_str("parameters: { years: 2 }\nbodies: []").unwrap();
        assert_eq!(cfg.parameters.total_steps().unwrap(), 730);

        let cfg = ScenarioConfig::from_yaml_str(
            "parameters: { years: 2, total_steps: 5 }\nbodies: []",
        )
        .unwrap();
        assert_eq!(cfg.parameters.total_steps().unwrap(), 5);
    }

    #[test]
    fn oversized_years_is_an_error_not_a_panic() {
        let cfg = ScenarioConfig::from_yaml_str(
            "parameters: { years: 60000000000000000 }\nbodies: []",
        )
        .unwrap();
        let err = cfg.parameters.total_steps().unwrap_err();
        assert!(matches!(err, OrreryError::InvalidScenario(_)));

        // an explicit step count is taken as is
        let cfg = ScenarioConfig::from_yaml_str(
            "parameters: { years: 60000000000000000, total_steps: 7 }\nbodies: []",
        )
        .unwrap();
        assert_eq!(cfg.parameters.total_steps().unwrap(), 7);
    }

    #[test]
    fn short_position_is_rejected() {
        let err = ScenarioConfig::from_yaml_str(
            r#"
bodies:
  - name: Flat
    mass: 1.0
    position: [1.0, 2.0]
    velocity: [0.0, 0.0, 0.0]
"#,
        )
        .unwrap_err();
        assert!(matches!(err, OrreryError::Yaml(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ScenarioConfig::load("does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, OrreryError::Io(_)));
    }
}
