use abm_agent::Population;
use abm_core::Tick;
use abm_sim::{SimObserver, TickSummary};
use log::info;

/// Logs the state counts every `interval` ticks.  An interval of 0 disables
/// the per-step lines.
pub struct ProgressObserver {
    interval: u64,
}

impl ProgressObserver {
    pub fn new(interval: u64) -> Self {
        Self { interval }
    }

    pub(crate) fn due(&self, tick: Tick) -> bool {
        self.interval != 0 && tick.0 % self.interval == 0
    }
}

impl SimObserver for ProgressObserver {
    fn on_tick_end(&mut self, summary: &TickSummary, _population: &Population) {
        if self.due(summary.tick) {
            info!("step {}: {}", summary.tick.0, summary.counts);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        info!("simulation complete after {} ticks", final_tick.0);
    }
}
