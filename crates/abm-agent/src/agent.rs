//! By-value agent record.
//!
//! The population stores agents column-wise; `Agent` gathers one row of
//! those columns so callers and tests can reason about a single individual.

use abm_core::{GridPos, HealthState};

/// One agent's position, state, and timers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub position: GridPos,
    pub state: HealthState,
    /// Ticks spent in the current `Infected` / `Quarantined` spell.
    pub days_in_state: u32,
    /// Ticks this agent must stay quarantined before returning to
    /// `Susceptible`.
    pub quarantine_duration: u32,
}

impl Agent {
    pub fn new(position: GridPos, state: HealthState, quarantine_duration: u32) -> Self {
        Self { position, state, days_in_state: 0, quarantine_duration }
    }

    /// `true` once a quarantined agent has served its full quarantine.
    #[inline]
    pub fn quarantine_served(&self) -> bool {
        self.state == HealthState::Quarantined && self.days_in_state >= self.quarantine_duration
    }
}
