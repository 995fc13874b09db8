//! Plain data row written by output backends.

use abm_sim::TickSummary;

/// Agent counts per state at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickCountsRow {
    /// Zero-based tick index.
    pub step:        u64,
    pub susceptible: u64,
    pub infected:    u64,
    pub recovered:   u64,
    pub vaccinated:  u64,
    pub quarantined: u64,
}

impl TickCountsRow {
    /// Counters in column order, after `step`.
    pub fn counts(&self) -> [u64; 5] {
        [self.susceptible, self.infected, self.recovered, self.vaccinated, self.quarantined]
    }
}

impl From<&TickSummary> for TickCountsRow {
    fn from(summary: &TickSummary) -> Self {
        let c = &summary.counts;
        Self {
            step:        summary.tick.0,
            susceptible: c.susceptible as u64,
            infected:    c.infected as u64,
            recovered:   c.recovered as u64,
            vaccinated:  c.vaccinated as u64,
            quarantined: c.quarantined as u64,
        }
    }
}
