//! The `Sim` struct and its tick loop.

use abm_agent::Population;
use abm_core::{AbmConfig, SimRng, Tick};
use abm_disease::TransitionEngine;
use abm_mobility::MovementEngine;
use log::{debug, info};

use crate::{SimObserver, StateCounts, TickSummary};

/// The main simulation runner.
///
/// `Sim` owns the population and the run's random stream and drives the
/// four-phase tick loop:
///
/// 1. **Movement**: one random unit step for every non-quarantined agent.
/// 2. **Pass A**: infection spread.
/// 3. **Pass B**: recovery, quarantine, release, breakthrough.
/// 4. **Aggregate**: count per state and report to the observer.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Read-only run configuration.
    pub config: AbmConfig,

    /// The next tick to be processed.
    pub current_tick: Tick,

    /// All agents.  Mutated only by the tick loop.
    pub population: Population,

    /// The run's only random source.
    pub rng: SimRng,

    pub movement: MovementEngine,

    pub transitions: TransitionEngine,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        let end = self.config.end_tick();
        while self.current_tick < end {
            self.observe_tick(observer);
        }
        observer.on_sim_end(self.current_tick);
        info!("simulation finished at {}: {}", self.current_tick, self.counts());
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.observe_tick(observer);
        }
    }

    /// Process one tick without an observer and return its summary.
    pub fn step(&mut self) -> TickSummary {
        let summary = self.process_tick(self.current_tick);
        self.current_tick = self.current_tick.next();
        summary
    }

    /// Current per-state counts.
    pub fn counts(&self) -> StateCounts {
        StateCounts::tally(&self.population)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn observe_tick<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.current_tick;
        observer.on_tick_start(now);
        let summary = self.process_tick(now);
        observer.on_tick_end(&summary, &self.population);
        self.current_tick = now.next();
    }

    fn process_tick(&mut self, now: Tick) -> TickSummary {
        // ── Phase 1: movement (+ spell timers) ────────────────────────────
        let moved = self.movement.tick(&mut self.population, &mut self.rng);

        // ── Phases 2–3: Pass A then Pass B ────────────────────────────────
        let transitions = self.transitions.tick(&mut self.population, &mut self.rng);

        // ── Phase 4: aggregate ────────────────────────────────────────────
        let counts = StateCounts::tally(&self.population);
        debug_assert_eq!(counts.total(), self.population.len());

        debug!(
            "{now}: {counts} (moved {moved}, +{} infected, {} transitions)",
            transitions.infections,
            transitions.total()
        );

        TickSummary { tick: now, counts, transitions, moved }
    }
}
