//! CSV output backend.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::Writer;
use log::debug;

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, TickCountsRow};

/// Column names, in order.
pub const HEADER: [&str; 6] =
    ["Step", "Susceptible", "Infected", "Recovered", "Vaccinated", "Quarantined"];

/// Writes the time series to a single CSV file.
pub struct CsvWriter {
    path:     PathBuf,
    inner:    Writer<File>,
    rows:     u64,
    finished: bool,
}

impl CsvWriter {
    /// Create (or truncate) `path` and write the header row.
    ///
    /// Fails with [`OutputError::SinkUnavailable`] if the file cannot be
    /// created.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let file = File::create(path).map_err(|source| OutputError::SinkUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let mut inner = Writer::from_writer(file);
        inner.write_record(HEADER)?;

        debug!("writing tick counts to {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            inner,
            rows: 0,
            finished: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Data rows written so far (header excluded).
    pub fn rows_written(&self) -> u64 {
        self.rows
    }
}

impl OutputWriter for CsvWriter {
    fn write_row(&mut self, row: &TickCountsRow) -> OutputResult<()> {
        let c = row.counts();
        self.inner.write_record(&[
            row.step.to_string(),
            c[0].to_string(),
            c[1].to_string(),
            c[2].to_string(),
            c[3].to_string(),
            c[4].to_string(),
        ])?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        debug!("wrote {} rows to {}", self.rows, self.path.display());
        Ok(())
    }
}
