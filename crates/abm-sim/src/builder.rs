//! Fluent builder for constructing a [`Sim`].

use abm_agent::{Population, PopulationBuilder};
use abm_core::{AbmConfig, AbmError, SimRng, Tick};
use abm_disease::TransitionEngine;
use abm_mobility::MovementEngine;
use log::info;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`AbmConfig`]: sizes, probabilities, tick count, seed, spread mode
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                                          |
/// |--------------------|--------------------------------------------------|
/// | `.rng(r)`          | `SimRng::new(config.seed)`                       |
/// | `.population(p)`   | Seeded randomly from the config and the rng      |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .population(population)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config:     AbmConfig,
    rng:        Option<SimRng>,
    population: Option<Population>,
}

impl SimBuilder {
    /// Create a builder with the required configuration.
    pub fn new(config: AbmConfig) -> Self {
        Self {
            config,
            rng:        None,
            population: None,
        }
    }

    /// Supply the random source instead of seeding one from `config.seed`.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Supply the initial population instead of seeding one randomly.
    ///
    /// Must have exactly `config.population_size` agents on a grid of side
    /// `config.grid_size`.
    pub fn population(mut self, population: Population) -> Self {
        self.population = Some(population);
        self
    }

    /// Validate the configuration, seed the population if none was supplied,
    /// and return a ready-to-run [`Sim`].
    ///
    /// Nothing is drawn from the rng before validation succeeds.
    pub fn build(self) -> SimResult<Sim> {
        let config = self.config;
        config.validate()?;
        let grid = config.grid()?;

        let mut rng = self.rng.unwrap_or_else(|| SimRng::new(config.seed));

        let population = match self.population {
            Some(p) => {
                if p.len() != config.population_size {
                    return Err(SimError::AgentCountMismatch {
                        expected: config.population_size,
                        got:      p.len(),
                    });
                }
                if p.grid() != grid {
                    return Err(SimError::Config(AbmError::Config(format!(
                        "population grid {} does not match configured grid {grid}",
                        p.grid()
                    ))));
                }
                p
            }
            None => PopulationBuilder::from_config(&config)?.build(&mut rng)?,
        };

        let transitions = TransitionEngine::from_config(&config)?;

        info!(
            "simulation ready: {} agents on {} grid, radius {}, {} ticks, seed {}, {} spread",
            population.len(),
            grid,
            config.infection_radius,
            config.total_ticks,
            config.seed,
            config.spread_mode,
        );

        Ok(Sim {
            config,
            current_tick: Tick::ZERO,
            population,
            rng,
            movement: MovementEngine::new(),
            transitions,
        })
    }
}
