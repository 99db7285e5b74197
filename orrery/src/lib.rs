pub mod simulation;
pub mod configuration;
pub mod export;
pub mod benchmark;
pub mod error;

pub use simulation::vector::{Vector3D, DistanceSquared};
pub use simulation::body::{CelestialBody, GRAVITATIONAL_CONSTANT, DEFAULT_SOFTENING};
pub use simulation::params::Parameters;
pub use simulation::engine::{Simulation, RunSummary};
pub use simulation::scenario::Scenario;
pub use configuration::config::{ParametersConfig, BodyConfig, ScenarioConfig};
pub use export::{Exporter, Snapshot, MemoryExporter, CsvExporter};
pub use benchmark::benchmark::{bench_step, bench_step_curve, BENCH_SIZES};
pub use error::{OrreryError, Result};
