//! `abm-sim` — tick loop orchestrator for the `abm_epi` simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Movement  — every non-quarantined agent takes one random unit step;
//!                 Infected/Quarantined spell timers advance.
//!   ② Pass A    — infection spread over all (infected, susceptible) pairs
//!                 in contact.
//!   ③ Pass B    — recovery / quarantine / release / breakthrough.
//!   ④ Aggregate — count agents per state and hand the row to the observer.
//! ```
//!
//! Each phase visits agents in ascending `AgentId` order and draws from the
//! run's single `SimRng`, so a run is fully determined by its configuration
//! and seed.  A run always executes exactly `total_ticks` iterations.
//!
//! # Quick-start
//!
//! ```rust
//! use abm_core::AbmConfig;
//! use abm_sim::{NoopObserver, SimBuilder};
//!
//! let config = AbmConfig { total_ticks: 10, ..AbmConfig::default() };
//! let mut sim = SimBuilder::new(config).build().unwrap();
//! sim.run(&mut NoopObserver);
//! assert_eq!(sim.counts().total(), 100);
//! ```

pub mod builder;
pub mod counts;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use counts::{StateCounts, TickSummary};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
