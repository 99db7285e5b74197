//! CSV snapshot writer.
//!
//! Output shape:
//!
//! ```text
//! step,name,x,y,z
//! 0,Sun,0.0,0.0,0.0
//! 0,Mercury,57910000000.0,4091846.4,0.0
//! ...
//! ```

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use ::csv::{Writer, WriterBuilder};

use super::{Exporter, Snapshot};
use crate::error::{OrreryError, Result};
use crate::simulation::body::CelestialBody;

pub const HEADER: [&str; 5] = ["step", "name", "x", "y", "z"];

pub struct CsvExporter<W: Write> {
    writer: Writer<W>,
}

impl CsvExporter<File> {
    /// Create (or truncate) `path` and write the header.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path)?;
        Self::new(file)
    }
}

impl<W: Write> CsvExporter<W> {
    /// Wrap `inner` and write the header line immediately, so even a run
    /// that exports nothing leaves a valid file.
    pub fn new(inner: W) -> Result<Self> {
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(inner);
        writer.write_record(HEADER)?;
        Ok(Self { writer })
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer.into_inner().map_err(|e| {
            let err = e.error();
            OrreryError::Io(io::Error::new(err.kind(), err.to_string()))
        })
    }
}

impl<W: Write> Exporter for CsvExporter<W> {
    fn export(&mut self, step: u64, bodies: &[CelestialBody]) -> Result<()> {
        for body in bodies {
            self.writer.serialize(Snapshot::of(step, body))?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::vector::Vector3D;

    fn rock(name: &str, x: f64) -> CelestialBody {
        CelestialBody::new(name, 1.0, Vector3D::new(x, -2.0, 0.5), Vector3D::zeros(), 1.0)
    }

    #[test]
    fn header_written_even_without_records() {
        let exporter = CsvExporter::new(Vec::new()).unwrap();
        let bytes = exporter.into_inner().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "step,name,x,y,z\n");
    }

    #[test]
    fn one_line_per_body_per_export() {
        let bodies = vec![rock("A", 1.5), rock("B", 3.0)];
        let mut exporter = CsvExporter::new(Vec::new()).unwrap();
        exporter.export(0, &bodies).unwrap();
        exporter.export(10, &bodies).unwrap();
        exporter.finish().unwrap();

        let text = String::from_utf8(exporter.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "step,name,x,y,z");

        let fields: Vec<&str> = lines[4].split(',').collect();
        assert_eq!(fields[0], "10");
        assert_eq!(fields[1], "B");
        assert_eq!(fields[2].parse::<f64>().unwrap(), 3.0);
        assert_eq!(fields[3].parse::<f64>().unwrap(), -2.0);
        assert_eq!(fields[4].parse::<f64>().unwrap(), 0.5);
    }
}
