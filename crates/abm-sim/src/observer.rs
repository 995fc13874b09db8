//! Simulation observer trait for progress reporting and data collection.

use abm_agent::Population;
use abm_core::Tick;

use crate::TickSummary;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, summary: &TickSummary, _population: &Population) {
///         if summary.tick.0 % self.interval == 0 {
///             println!("{}: {}", summary.tick, summary.counts);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with that tick's aggregate row and
    /// read-only access to the population.
    fn on_tick_end(&mut self, _summary: &TickSummary, _population: &Population) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Forward every callback to both observers, `A` first.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_tick_start(&mut self, tick: Tick) {
        self.0.on_tick_start(tick);
        self.1.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, summary: &TickSummary, population: &Population) {
        self.0.on_tick_end(summary, population);
        self.1.on_tick_end(summary, population);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.0.on_sim_end(final_tick);
        self.1.on_sim_end(final_tick);
    }
}

impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_tick_start(&mut self, tick: Tick) {
        (**self).on_tick_start(tick);
    }

    fn on_tick_end(&mut self, summary: &TickSummary, population: &Population) {
        (**self).on_tick_end(summary, population);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        (**self).on_sim_end(final_tick);
    }
}
