//! Run configuration.
//!
//! `AbmConfig` is read-only for the whole run.  It is validated once, before
//! any agent is created, so that out-of-domain values surface as
//! [`AbmError::Config`] rather than as NaN or out-of-range state mid-run.
//!
//! Defaults reproduce the reference model: 100 agents on a 20×20 grid,
//! infection radius 2, 100 ticks, five-tick quarantine.

use crate::{AbmError, AbmResult, Grid, Tick};

// ── DiseaseParams ─────────────────────────────────────────────────────────────

/// The four per-draw probabilities of the transition rules.
///
/// These are the values a parameter file may override; unset keys keep
/// whatever the caller supplied.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DiseaseParams {
    /// Chance that one infected–susceptible contact transmits.
    pub infection_prob: f64,
    /// Chance an infected agent recovers in a tick.
    pub recovery_prob: f64,
    /// Chance a non-index agent starts the run vaccinated.
    pub vaccination_prob: f64,
    /// Quarantine threshold, compared against the same draw as recovery.
    pub quarantine_prob: f64,
}

impl Default for DiseaseParams {
    fn default() -> Self {
        Self {
            infection_prob:   0.15,
            recovery_prob:    0.03,
            vaccination_prob: 0.02,
            quarantine_prob:  0.01,
        }
    }
}

impl DiseaseParams {
    /// Probability of a vaccinated agent suffering a breakthrough infection in
    /// any one tick.  A constant of the model, not an input.
    pub const BREAKTHROUGH_PROB: f64 = 0.05;

    /// Reject any probability that is non-finite or outside `[0, 1]`.
    pub fn validate(&self) -> AbmResult<()> {
        for (name, p) in [
            ("infection_prob",   self.infection_prob),
            ("recovery_prob",    self.recovery_prob),
            ("vaccination_prob", self.vaccination_prob),
            ("quarantine_prob",  self.quarantine_prob),
        ] {
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(AbmError::Config(format!(
                    "{name} must be within [0, 1], got {p}"
                )));
            }
        }
        Ok(())
    }

    /// `true` when the quarantine branch of the resolution pass can fire.
    ///
    /// Recovery and quarantine share one draw `r`: recovery wins when
    /// `r < recovery_prob`, so quarantine needs `recovery_prob <= r <
    /// quarantine_prob`, which is empty unless `quarantine_prob >
    /// recovery_prob`.
    #[inline]
    pub fn quarantine_reachable(&self) -> bool {
        self.quarantine_prob > self.recovery_prob
    }
}

// ── SpreadMode ────────────────────────────────────────────────────────────────

/// How the infection pass treats agents infected earlier in the same pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SpreadMode {
    /// State is mutated in place while scanning in agent-index order.  An
    /// agent infected earlier in the pass infects others later in the same
    /// pass, so infection can cascade within one tick.
    #[default]
    Cascading,
    /// Infectors and targets are read from the state at the start of the
    /// pass; new infections are applied together once the pass completes.
    Snapshot,
}

impl SpreadMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SpreadMode::Cascading => "cascading",
            SpreadMode::Snapshot  => "snapshot",
        }
    }
}

impl std::fmt::Display for SpreadMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SpreadMode {
    type Err = AbmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cascading" => Ok(SpreadMode::Cascading),
            "snapshot"  => Ok(SpreadMode::Snapshot),
            other => Err(AbmError::Parse(format!(
                "invalid spread mode {other:?}: expected \"cascading\" or \"snapshot\""
            ))),
        }
    }
}

// ── AbmConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built from defaults, a JSON file (with the `serde` feature), a
/// parameter file, and command-line flags, in that order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AbmConfig {
    /// Number of agents.  Fixed for the run.
    pub population_size: usize,

    /// Side length of the square grid.
    pub grid_size: u32,

    /// Contact radius in cells.  Zero means only co-located agents touch.
    pub infection_radius: u32,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Ticks an agent stays quarantined before returning to susceptible.
    pub quarantine_duration: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Same-tick cascading or snapshot-then-apply infection.
    pub spread_mode: SpreadMode,

    /// Transition probabilities.
    pub disease: DiseaseParams,
}

impl Default for AbmConfig {
    fn default() -> Self {
        Self {
            population_size:     100,
            grid_size:           20,
            infection_radius:    2,
            total_ticks:         100,
            quarantine_duration: 5,
            seed:                42,
            spread_mode:         SpreadMode::Cascading,
            disease:             DiseaseParams::default(),
        }
    }
}

impl AbmConfig {
    /// Check every structural parameter and probability.
    pub fn validate(&self) -> AbmResult<()> {
        if self.population_size == 0 {
            return Err(AbmError::Config("population size must be positive".into()));
        }
        if u32::try_from(self.population_size).is_err() {
            return Err(AbmError::Config(format!(
                "population size {} exceeds the addressable agent range",
                self.population_size
            )));
        }
        Grid::new(self.grid_size)?;
        self.disease.validate()
    }

    /// The grid described by `grid_size`.
    pub fn grid(&self) -> AbmResult<Grid> {
        Grid::new(self.grid_size)
    }

    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }
}
