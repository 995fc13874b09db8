//! Aggregation: per-state agent counts.

use abm_agent::Population;
use abm_core::{HealthState, Tick};
use abm_disease::TransitionReport;

/// Number of agents in each state at a tick boundary.
///
/// The five counters always sum to the population size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StateCounts {
    pub susceptible: usize,
    pub infected:    usize,
    pub recovered:   usize,
    pub vaccinated:  usize,
    pub quarantined: usize,
}

impl StateCounts {
    /// Count every agent of `population`.  Pure; no mutation.
    pub fn tally(population: &Population) -> Self {
        let mut counts = Self::default();
        for &state in population.states() {
            *counts.slot_mut(state) += 1;
        }
        counts
    }

    /// Counter for one state.
    #[inline]
    pub fn get(&self, state: HealthState) -> usize {
        match state {
            HealthState::Susceptible => self.susceptible,
            HealthState::Infected    => self.infected,
            HealthState::Recovered   => self.recovered,
            HealthState::Vaccinated  => self.vaccinated,
            HealthState::Quarantined => self.quarantined,
        }
    }

    fn slot_mut(&mut self, state: HealthState) -> &mut usize {
        match state {
            HealthState::Susceptible => &mut self.susceptible,
            HealthState::Infected    => &mut self.infected,
            HealthState::Recovered   => &mut self.recovered,
            HealthState::Vaccinated  => &mut self.vaccinated,
            HealthState::Quarantined => &mut self.quarantined,
        }
    }

    /// Sum of all five counters.
    pub fn total(&self) -> usize {
        self.susceptible + self.infected + self.recovered + self.vaccinated + self.quarantined
    }

    /// Counters in output column order.
    pub fn as_array(&self) -> [usize; 5] {
        HealthState::ALL.map(|s| self.get(s))
    }
}

impl std::fmt::Display for StateCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "S={} I={} R={} V={} Q={}",
            self.susceptible, self.infected, self.recovered, self.vaccinated, self.quarantined
        )
    }
}

/// Everything the tick loop learned about one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickSummary {
    pub tick:        Tick,
    /// Counts after the tick's movement and both transition passes.
    pub counts:      StateCounts,
    pub transitions: TransitionReport,
    /// Agents whose position changed this tick.
    pub moved:       usize,
}
