//! Per-tick transition tallies.

/// How many agents took each transition during one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionReport {
    /// Susceptible → Infected through contact (Pass A).
    pub infections: usize,
    /// Infected → Recovered.
    pub recoveries: usize,
    /// Infected → Quarantined.
    pub quarantines: usize,
    /// Quarantined → Susceptible.
    pub releases: usize,
    /// Vaccinated → Infected.
    pub breakthroughs: usize,
}

impl TransitionReport {
    /// Total number of state changes.
    pub fn total(&self) -> usize {
        self.infections + self.recoveries + self.quarantines + self.releases + self.breakthroughs
    }
}
