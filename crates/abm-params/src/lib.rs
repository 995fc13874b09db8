//! `abm-params` — parameter files for the disease probabilities.
//!
//! # File format
//!
//! One `name=value` pair per line:
//!
//! ```text
//! infection_prob=0.15
//! recovery_prob=0.03
//! vaccination_prob=0.02
//! quarantine_prob=0.01
//! ```
//!
//! | Rule                     | Behaviour                                  |
//! |--------------------------|--------------------------------------------|
//! | blank line, `#` comment  | skipped                                    |
//! | unrecognised name        | ignored (logged at `debug`)                |
//! | unparsable value         | [`ParamsError::Parse`] naming the line     |
//! | name absent from file    | caller's value kept                        |
//!
//! Structural parameters (population, grid, radius, ticks) are not read from
//! this file.  Range checking is left to
//! [`AbmConfig::validate`][abm_core::AbmConfig::validate].

pub mod error;
pub mod loader;
pub mod writer;

#[cfg(test)]
mod tests;

pub use error::{ParamsError, ParamsResult};
pub use loader::{ParamOverrides, load_params_file, load_params_reader};
pub use writer::{write_params, write_params_file};
