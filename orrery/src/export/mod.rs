//! Snapshot export.
//!
//! The driver hands an [`Exporter`] the full body list once per exported step,
//! after that step's integration. What happens to it (CSV file, memory, ...)
//! is up to the exporter; any failure it reports ends the run.

pub mod csv;

use serde::Serialize;

use crate::error::Result;
use crate::simulation::body::CelestialBody;
use crate::simulation::vector::Vector3D;

pub use self::csv::CsvExporter;

/// Receiver for per-step position snapshots.
pub trait Exporter {
    /// Called once per exported step with every body, in list order.
    fn export(&mut self, step: u64, bodies: &[CelestialBody]) -> Result<()>;

    /// Called once after the last step.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// One exported row: `step,name,x,y,z`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot<'a> {
    pub step: u64,
    pub name: &'a str,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl<'a> Snapshot<'a> {
    pub fn of(step: u64, body: &'a CelestialBody) -> Self {
        Self {
            step,
            name: &body.name,
            x: body.position.x,
            y: body.position.y,
            z: body.position.z,
        }
    }
}

/// Positions of every body at one exported step
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub step: u64,
    pub positions: Vec<(String, Vector3D)>,
}

/// Keeps every exported batch in memory.
#[derive(Debug, Default)]
pub struct MemoryExporter {
    pub batches: Vec<Batch>,
}

impl MemoryExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step indices that were exported, in order.
    pub fn steps(&self) -> Vec<u64> {
        self.batches.iter().map(|b| b.step).collect()
    }

    /// Exported positions of the first body called `name`.
    pub fn trajectory(&self, name: &str) -> Vec<(u64, Vector3D)> {
        self.batches
            .iter()
            .filter_map(|batch| {
                batch
                    .positions
                    .iter()
                    .find(|(n, _)| n == name)
                    .map(|(_, p)| (batch.step, *p))
            })
            .collect()
    }
}

impl Exporter for MemoryExporter {
    fn export(&mut self, step: u64, bodies: &[CelestialBody]) -> Result<()> {
        self.batches.push(Batch {
            step,
            positions: bodies
                .iter()
                .map(|b| (b.name.clone(), b.position))
                .collect(),
        });
        Ok(())
    }
}
