//! Build runnable scenarios
//!
//! A [`Scenario`] is the body list at t = 0 plus the run parameters. It comes
//! either from a YAML [`ScenarioConfig`] or from the built-in nine-body solar
//! system.

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::Result;
use crate::simulation::body::CelestialBody;
use crate::simulation::params::Parameters;
use crate::simulation::vector::Vector3D;

/// Softening used for every body of the built-in solar system (10 km)
pub const SOLAR_SYSTEM_SOFTENING: f64 = 10_000.0;

/// (name, mass kg, distance from the Sun along +x in m, speed along +y in m/s)
const SOLAR_SYSTEM: [(&str, f64, f64, f64); 9] = [
    ("Sun", 1.989e30, 0.0, 0.0),
    ("Mercury", 3.301e23, 5.791e10, 47_360.0),
    ("Venus", 4.867e24, 1.082e11, 35_020.0),
    ("Earth", 5.972e24, 1.496e11, 29_780.0),
    ("Mars", 6.390e23, 2.279e11, 24_070.0),
    ("Jupiter", 1.898e27, 7.785e11, 13_070.0),
    ("Saturn", 5.683e26, 1.433e12, 9_680.0),
    ("Uranus", 8.681e25, 2.871e12, 6_810.0),
    ("Neptune", 1.024e26, 4.495e12, 5_430.0),
];

#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub bodies: Vec<CelestialBody>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let parameters = Parameters {
            time_step: cfg.parameters.time_step,
            total_steps: cfg.parameters.total_steps()?,
            export_every: cfg.parameters.export_every,
        };

        // Bodies: map `BodyConfig` -> runtime `CelestialBody`, order kept
        let bodies = cfg.bodies.into_iter().map(BodyConfig::into_body).collect();

        Ok(Self { parameters, bodies })
    }

    /// Sun and the eight planets lined up on the +x axis, each moving along
    /// +y at roughly its mean orbital speed.
    pub fn solar_system(parameters: Parameters) -> Self {
        let bodies = SOLAR_SYSTEM
            .iter()
            .map(|&(name, mass, x, vy)| {
                CelestialBody::new(
                    name,
                    mass,
                    Vector3D::new(x, 0.0, 0.0),
                    Vector3D::new(0.0, vy, 0.0),
                    SOLAR_SYSTEM_SOFTENING,
                )
            })
            .collect();

        Self {
            parameters,
            bodies,
        }
    }
}

impl BodyConfig {
    fn into_body(self) -> CelestialBody {
        CelestialBody::new(
            self.name,
            self.mass,
            Vector3D::from(self.position),
            Vector3D::from(self.velocity),
            self.softening,
        )
    }
}
