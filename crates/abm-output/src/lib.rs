//! `abm-output` — per-tick time series writers for the abm_epi simulator.
//!
//! | Backend      | File                                                  |
//! |--------------|-------------------------------------------------------|
//! | [`CsvWriter`] | one CSV file, default [`DEFAULT_OUTPUT_FILE`]        |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `abm_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use abm_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("ABM_simulation_results.csv"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs);
//! obs.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::{CsvWriter, HEADER};
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::TickCountsRow;
pub use writer::OutputWriter;

/// File name used when the caller does not choose one.
pub const DEFAULT_OUTPUT_FILE: &str = "ABM_simulation_results.csv";
