//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, TickCountsRow};

/// A sink for the per-tick time series.
///
/// Errors returned here are stored by [`SimOutputObserver`][crate::SimOutputObserver]
/// and retrieved after the run.
pub trait OutputWriter {
    /// Write one row.
    fn write_row(&mut self, row: &TickCountsRow) -> OutputResult<()>;

    /// Flush and close the underlying handle.
    ///
    /// Must be safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
