//! `abm-disease` — the epidemiological state machine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`engine`]    | `TransitionEngine` — runs both passes for one tick          |
//! | [`spread`]    | Pass A: infected → susceptible transmission                 |
//! | [`resolve`]   | Pass B: recovery, quarantine, release, breakthrough         |
//! | [`report`]    | `TransitionReport` — per-tick transition tallies            |
//!
//! # States and transitions
//!
//! ```text
//!              Pass A (contact, infection_prob)
//!   Susceptible ───────────────────────────────▶ Infected
//!        ▲                                        │  one draw r:
//!        │ days_in_state >= quarantine_duration   │   r < recovery_prob   ─▶ Recovered
//!        └────────────── Quarantined ◀────────────┘   r < quarantine_prob ─▶ Quarantined
//!
//!   Vaccinated ──(5 % per tick)──▶ Infected
//! ```
//!
//! Both passes visit agents in ascending index order and draw from the run's
//! single [`SimRng`][abm_core::SimRng], so a fixed seed reproduces a run
//! exactly.  No transition can fail once the configuration is valid.

pub mod engine;
pub mod report;
pub mod resolve;
pub mod spread;


pub use engine::TransitionEngine;
pub use report::TransitionReport;
