//! `TransitionEngine` — applies the state machine to a population for one tick.

use abm_agent::Population;
use abm_core::{AbmConfig, AbmResult, DiseaseParams, SimRng, SpreadMode};
use abm_mobility::ContactDetector;
use log::warn;

use crate::{TransitionReport, resolve, spread};

/// Runs Pass A (spread) then Pass B (resolution).
///
/// Holds only read-only configuration; all mutable state lives in the
/// [`Population`] and the caller's [`SimRng`].
#[derive(Clone, Debug)]
pub struct TransitionEngine {
    params:  DiseaseParams,
    contact: ContactDetector,
    mode:    SpreadMode,
}

impl TransitionEngine {
    /// Create an engine.  `params` must already be validated.
    pub fn new(params: DiseaseParams, contact: ContactDetector, mode: SpreadMode) -> Self {
        Self { params, contact, mode }
    }

    /// Validate `config` and build the engine it describes.
    pub fn from_config(config: &AbmConfig) -> AbmResult<Self> {
        config.validate()?;
        if !config.disease.quarantine_reachable() && config.disease.quarantine_prob > 0.0 {
            warn!(
                "quarantine_prob ({}) <= recovery_prob ({}): quarantine can never be entered",
                config.disease.quarantine_prob, config.disease.recovery_prob
            );
        }
        Ok(Self::new(
            config.disease,
            ContactDetector::new(config.infection_radius),
            config.spread_mode,
        ))
    }

    pub fn params(&self) -> &DiseaseParams {
        &self.params
    }

    pub fn contact(&self) -> &ContactDetector {
        &self.contact
    }

    pub fn mode(&self) -> SpreadMode {
        self.mode
    }

    /// Pass A only.  Returns the number of new infections.
    pub fn spread(&self, population: &mut Population, rng: &mut SimRng) -> usize {
        spread::spread(population, &self.contact, self.params.infection_prob, self.mode, rng)
    }

    /// Pass B only.
    pub fn resolve(&self, population: &mut Population, rng: &mut SimRng) -> TransitionReport {
        let mut report = TransitionReport::default();
        resolve::resolve(population, &self.params, rng, &mut report);
        report
    }

    /// Both passes, in order, for one tick.
    pub fn tick(&self, population: &mut Population, rng: &mut SimRng) -> TransitionReport {
        let infections = self.spread(population, rng);
        let mut report = TransitionReport { infections, ..TransitionReport::default() };
        resolve::resolve(population, &self.params, rng, &mut report);
        report
    }
}
