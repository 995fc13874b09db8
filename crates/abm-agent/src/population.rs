//! Core agent storage: `Population` (SoA data).
//!
//! Every `Vec` column has exactly `len()` elements; the `AgentId` value is
//! the index into all of them:
//!
//! ```ignore
//! let pos = population.positions()[agent.index()];  // O(1), cache-friendly
//! ```
//!
//! The population is created once per run and never grows or shrinks, so an
//! agent's slot is its identity for the whole run.  Columns are private: all
//! writes go through methods that keep positions on the grid and reset the
//! state timer on entry to a timed state.

use abm_core::{AbmError, AgentId, Grid, GridPos, HealthState};

use crate::{Agent, AgentError, AgentResult};

/// Structure-of-Arrays storage for all agent state.
#[derive(Clone, Debug)]
pub struct Population {
    grid: Grid,
    positions: Vec<GridPos>,
    states: Vec<HealthState>,
    days_in_state: Vec<u32>,
    quarantine_duration: Vec<u32>,
}

impl Population {
    /// Build a population from explicit agent records.
    ///
    /// Fails if `agents` is empty or any position is off the grid.
    pub fn from_agents(grid: Grid, agents: Vec<Agent>) -> AgentResult<Self> {
        if agents.is_empty() {
            return Err(AgentError::Empty);
        }
        if u32::try_from(agents.len()).is_err() {
            return Err(AgentError::Config(AbmError::Config(format!(
                "{} agents exceed the addressable agent range",
                agents.len()
            ))));
        }

        let count = agents.len();
        let mut population = Self {
            grid,
            positions: Vec::with_capacity(count),
            states: Vec::with_capacity(count),
            days_in_state: Vec::with_capacity(count),
            quarantine_duration: Vec::with_capacity(count),
        };

        for (i, agent) in agents.into_iter().enumerate() {
            if !grid.contains(agent.position) {
                return Err(AgentError::OutOfBounds {
                    agent: AgentId(i as u32),
                    pos:   agent.position,
                    grid,
                });
            }
            population.positions.push(agent.position);
            population.states.push(agent.state);
            population.days_in_state.push(agent.days_in_state);
            population.quarantine_duration.push(agent.quarantine_duration);
        }

        Ok(population)
    }

    // ── Shape ─────────────────────────────────────────────────────────────

    /// Number of agents.
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false` for a population built through this crate.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The grid all positions are confined to.
    #[inline]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.len() as u32).map(AgentId)
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// Gather one agent's columns into an [`Agent`].
    #[inline]
    pub fn agent(&self, agent: AgentId) -> Agent {
        let i = agent.index();
        Agent {
            position:            self.positions[i],
            state:               self.states[i],
            days_in_state:       self.days_in_state[i],
            quarantine_duration: self.quarantine_duration[i],
        }
    }

    /// All agents in index order.
    pub fn iter(&self) -> impl Iterator<Item = Agent> + '_ {
        self.agent_ids().map(|id| self.agent(id))
    }

    #[inline]
    pub fn position(&self, agent: AgentId) -> GridPos {
        self.positions[agent.index()]
    }

    #[inline]
    pub fn state(&self, agent: AgentId) -> HealthState {
        self.states[agent.index()]
    }

    #[inline]
    pub fn days_in_state(&self, agent: AgentId) -> u32 {
        self.days_in_state[agent.index()]
    }

    #[inline]
    pub fn quarantine_duration(&self, agent: AgentId) -> u32 {
        self.quarantine_duration[agent.index()]
    }

    pub fn positions(&self) -> &[GridPos] {
        &self.positions
    }

    pub fn states(&self) -> &[HealthState] {
        &self.states
    }

    /// Number of agents currently in `state`.
    pub fn count(&self, state: HealthState) -> usize {
        self.states.iter().filter(|&&s| s == state).count()
    }

    // ── Write access ──────────────────────────────────────────────────────

    /// Move `agent` to `pos`.
    ///
    /// # Panics
    /// Panics in debug mode if `pos` is off the grid; callers obtain `pos`
    /// from [`Grid::step`], which never leaves the grid.
    #[inline]
    pub fn set_position(&mut self, agent: AgentId, pos: GridPos) {
        debug_assert!(self.grid.contains(pos), "{agent} moved off the grid to {pos}");
        self.positions[agent.index()] = pos;
    }

    /// Put `agent` into `state`.
    ///
    /// Entering `Infected` or `Quarantined` from a different state starts a
    /// fresh spell, so `days_in_state` is reset to zero.
    #[inline]
    pub fn set_state(&mut self, agent: AgentId, state: HealthState) {
        let i = agent.index();
        if state.is_timed() && self.states[i] != state {
            self.days_in_state[i] = 0;
        }
        self.states[i] = state;
    }

    /// Advance the spell timer of a single agent, if it is in a timed state.
    #[inline]
    pub fn advance_days_for(&mut self, agent: AgentId) {
        let i = agent.index();
        if self.states[i].is_timed() {
            self.days_in_state[i] = self.days_in_state[i].saturating_add(1);
        }
    }
}
