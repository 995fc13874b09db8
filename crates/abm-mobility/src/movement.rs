//! Per-tick random walk.

use abm_agent::Population;
use abm_core::{AgentId, SimRng};
use log::trace;

/// Advances every mobile agent by one random unit step.
#[derive(Copy, Clone, Debug, Default)]
pub struct MovementEngine;

impl MovementEngine {
    pub fn new() -> Self {
        Self
    }

    /// Move every non-quarantined agent and advance every agent's spell timer.
    ///
    /// Agents are visited in index order.  For each one the direction draw
    /// (mobile agents only) happens before its `days_in_state` increment, so
    /// the timer update never consumes randomness.
    ///
    /// Returns the number of agents whose position changed.
    pub fn tick(&self, population: &mut Population, rng: &mut SimRng) -> usize {
        let grid = population.grid();
        let mut moved = 0;

        for i in 0..population.len() as u32 {
            let agent = AgentId(i);
            if population.state(agent).can_move() {
                let dir = rng.direction();
                let from = population.position(agent);
                if let Some(to) = grid.step(from, dir) {
                    trace!("{agent} moves {dir:?} {from} -> {to}");
                    population.set_position(agent, to);
                    moved += 1;
                }
            }
            population.advance_days_for(agent);
        }

        moved
    }
}
