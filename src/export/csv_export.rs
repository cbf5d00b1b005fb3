//! CSV export for contraction-sweep results.
//!
//! One run produces four files next to each other: opening-phase summaries,
//! closing-phase summaries, and the per-bin sweep records for each adductor
//! division. Summary files hold one row per specimen; sweep files hold one
//! row per bin per specimen.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;

use crate::sim::SweepResult;

/// Writes sweep results across specimens into four CSV files.
pub struct SweepExporter {
    open_writer: csv::Writer<File>,
    closed_writer: csv::Writer<File>,
    a2_writer: csv::Writer<File>,
    a3_writer: csv::Writer<File>,
    paths: [PathBuf; 4],
}

impl SweepExporter {
    /// Create an exporter writing `<base>.OpenSum.csv`, `<base>.CloseSum.csv`,
    /// `<base>.A2Sim.csv` and `<base>.A3Sim.csv` under `dir`.
    ///
    /// Creates the directory if it doesn't exist. With no base name, a
    /// timestamped one is generated.
    pub fn new<P: AsRef<Path>>(dir: P, base_name: Option<&str>) -> Result<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let base = match base_name {
            Some(name) => name.to_string(),
            None => format!("jawsim_{}", Local::now().format("%Y%m%d_%H%M%S")),
        };

        let paths = [
            dir.join(format!("{}.OpenSum.csv", base)),
            dir.join(format!("{}.CloseSum.csv", base)),
            dir.join(format!("{}.A2Sim.csv", base)),
            dir.join(format!("{}.A3Sim.csv", base)),
        ];

        let open_writer = csv::Writer::from_writer(File::create(&paths[0])?);
        let closed_writer = csv::Writer::from_writer(File::create(&paths[1])?);
        let a2_writer = csv::Writer::from_writer(File::create(&paths[2])?);
        let a3_writer = csv::Writer::from_writer(File::create(&paths[3])?);

        log::info!("CSV export started: {}.* in {}", base, dir.display());

        Ok(Self {
            open_writer,
            closed_writer,
            a2_writer,
            a3_writer,
            paths,
        })
    }

    /// Append one specimen's sweep result to all four files.
    pub fn record(&mut self, result: &SweepResult) -> Result<()> {
        self.open_writer.serialize(&result.open)?;
        self.closed_writer.serialize(&result.closed)?;
        for bin in &result.a2_bins {
            self.a2_writer.serialize(bin)?;
        }
        for bin in &result.a3_bins {
            self.a3_writer.serialize(bin)?;
        }
        Ok(())
    }

    /// Finish writing and return the four output paths.
    pub fn finish(mut self) -> Result<[PathBuf; 4]> {
        self.open_writer.flush()?;
        self.closed_writer.flush()?;
        self.a2_writer.flush()?;
        self.a3_writer.flush()?;
        for path in &self.paths {
            log::info!("CSV export completed: {}", path.display());
        }
        Ok(self.paths)
    }

    pub fn paths(&self) -> &[PathBuf; 4] {
        &self.paths
    }
}
