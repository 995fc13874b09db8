//! `abm-core` — foundational types for the `abm_epi` spatial epidemic simulator.
//!
//! This crate is a dependency of every other `abm-*` crate.  It has no
//! `abm-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`grid`]        | `Grid`, `GridPos`, `Direction`                        |
//! | [`health`]      | `HealthState` — the five epidemiological states       |
//! | [`time`]        | `Tick`                                                |
//! | [`config`]      | `AbmConfig`, `DiseaseParams`, `SpreadMode`            |
//! | [`rng`]         | `SimRng` (one seeded stream per run)                  |
//! | [`error`]       | `AbmError`, `AbmResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod config;
pub mod error;
pub mod grid;
pub mod health;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AbmConfig, DiseaseParams, SpreadMode};
pub use error::{AbmError, AbmResult};
pub use grid::{Direction, Grid, GridPos};
pub use health::HealthState;
pub use ids::AgentId;
pub use rng::SimRng;
pub use time::Tick;
