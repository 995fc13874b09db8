//! Fluent builder that seeds a `Population` from a `SimRng`.
//!
//! # Usage
//!
//! ```rust
//! use abm_agent::PopulationBuilder;
//! use abm_core::{Grid, HealthState, SimRng};
//!
//! let mut rng = SimRng::new(42);
//! let population = PopulationBuilder::new(100, Grid::new(20).unwrap())
//!     .vaccination_prob(0.1)
//!     .quarantine_duration(5)
//!     .build(&mut rng)
//!     .unwrap();
//!
//! assert_eq!(population.len(), 100);
//! assert_eq!(population.states()[0], HealthState::Infected);
//! ```

use abm_core::{AbmConfig, AbmError, AgentId, Grid, GridPos, HealthState, SimRng};

use crate::{Agent, AgentError, AgentResult, Population};

/// Fluent builder for [`Population`].
///
/// Agent 0 is always seeded `Infected`.  Every other agent independently
/// starts `Vaccinated` with probability `vaccination_prob`, otherwise
/// `Susceptible`.  Positions are uniform over the grid.
pub struct PopulationBuilder {
    count: usize,
    grid: Grid,
    vaccination_prob: f64,
    quarantine_duration: u32,
}

impl PopulationBuilder {
    /// Create a builder for `count` agents on `grid`.
    pub fn new(count: usize, grid: Grid) -> Self {
        Self {
            count,
            grid,
            vaccination_prob: 0.0,
            quarantine_duration: 0,
        }
    }

    /// Builder pre-filled from a validated run configuration.
    pub fn from_config(config: &AbmConfig) -> AgentResult<Self> {
        config.validate()?;
        Ok(Self::new(config.population_size, config.grid()?)
            .vaccination_prob(config.disease.vaccination_prob)
            .quarantine_duration(config.quarantine_duration))
    }

    /// Chance that each non-index agent starts vaccinated.
    pub fn vaccination_prob(mut self, p: f64) -> Self {
        self.vaccination_prob = p;
        self
    }

    /// Quarantine length applied to every agent.
    pub fn quarantine_duration(mut self, ticks: u32) -> Self {
        self.quarantine_duration = ticks;
        self
    }

    /// Draw initial positions and states and construct the population.
    ///
    /// Draw order per agent, in index order: `x`, `y`, then (for every agent
    /// but the first) one vaccination draw.
    pub fn build(self, rng: &mut SimRng) -> AgentResult<Population> {
        if self.count == 0 {
            return Err(AgentError::Empty);
        }
        if !self.vaccination_prob.is_finite() || !(0.0..=1.0).contains(&self.vaccination_prob) {
            return Err(AgentError::Config(AbmError::Config(format!(
                "vaccination_prob must be within [0, 1], got {}",
                self.vaccination_prob
            ))));
        }

        let size = self.grid.size();
        let agents: Vec<Agent> = (0..self.count)
            .map(|i| {
                let x = rng.gen_range(0..size);
                let y = rng.gen_range(0..size);
                let state = if i == AgentId::PATIENT_ZERO.index() {
                    HealthState::Infected
                } else if rng.chance(self.vaccination_prob) {
                    HealthState::Vaccinated
                } else {
                    HealthState::Susceptible
                };
                Agent::new(GridPos::new(x, y), state, self.quarantine_duration)
            })
            .collect();

        Population::from_agents(self.grid, agents)
    }
}
