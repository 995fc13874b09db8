//! Parameter file writer.
//!
//! Produces the same `name=value` format the loader reads, so a file written
//! here round-trips through [`load_params_file`][crate::load_params_file].

use std::io::{BufWriter, Write};
use std::path::Path;

use abm_core::DiseaseParams;

use crate::ParamsResult;

/// Write all four probabilities to `writer`.
pub fn write_params<W: Write>(mut writer: W, params: &DiseaseParams) -> ParamsResult<()> {
    writeln!(writer, "infection_prob={}", params.infection_prob)?;
    writeln!(writer, "recovery_prob={}", params.recovery_prob)?;
    writeln!(writer, "vaccination_prob={}", params.vaccination_prob)?;
    writeln!(writer, "quarantine_prob={}", params.quarantine_prob)?;
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write all four probabilities to it.
pub fn write_params_file(path: &Path, params: &DiseaseParams) -> ParamsResult<()> {
    let file = std::fs::File::create(path)?;
    write_params(BufWriter::new(file), params)
}
