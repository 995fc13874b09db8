//! Parameter file reader.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use abm_core::DiseaseParams;
use log::debug;

use crate::{ParamsError, ParamsResult};

/// Values found in a parameter file.  `None` means the key was absent.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ParamOverrides {
    pub infection_prob:   Option<f64>,
    pub recovery_prob:    Option<f64>,
    pub vaccination_prob: Option<f64>,
    pub quarantine_prob:  Option<f64>,
}

impl ParamOverrides {
    /// Overlay the values that were present onto `params`.
    pub fn apply(&self, params: &mut DiseaseParams) {
        if let Some(p) = self.infection_prob {
            params.infection_prob = p;
        }
        if let Some(p) = self.recovery_prob {
            params.recovery_prob = p;
        }
        if let Some(p) = self.vaccination_prob {
            params.vaccination_prob = p;
        }
        if let Some(p) = self.quarantine_prob {
            params.quarantine_prob = p;
        }
    }

    /// `params` with these overrides applied.
    pub fn applied_to(&self, mut params: DiseaseParams) -> DiseaseParams {
        self.apply(&mut params);
        params
    }

    /// `true` if no recognised key was present.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load overrides from the file at `path`.
pub fn load_params_file(path: &Path) -> ParamsResult<ParamOverrides> {
    let file = std::fs::File::open(path)?;
    load_params_reader(file)
}

/// Like [`load_params_file`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_params_reader<R: Read>(reader: R) -> ParamsResult<ParamOverrides> {
    let mut overrides = ParamOverrides::default();

    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((name, value)) = trimmed.split_once('=') else {
            return Err(ParamsError::Parse(format!(
                "line {line_no}: expected name=value, got {trimmed:?}"
            )));
        };
        let name = name.trim();

        let slot = match name {
            "infection_prob"   => &mut overrides.infection_prob,
            "recovery_prob"    => &mut overrides.recovery_prob,
            "vaccination_prob" => &mut overrides.vaccination_prob,
            "quarantine_prob"  => &mut overrides.quarantine_prob,
            other => {
                debug!("line {line_no}: ignoring unknown parameter {other:?}");
                continue;
            }
        };

        *slot = Some(parse_value(name, value, line_no)?);
    }

    Ok(overrides)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_value(name: &str, value: &str, line_no: usize) -> ParamsResult<f64> {
    value.trim().parse::<f64>().map_err(|_| {
        ParamsError::Parse(format!(
            "line {line_no}: invalid value {:?} for {name}: expected a number",
            value.trim()
        ))
    })
}
