//! `abm-agent` — Structure-of-Arrays agent storage for the `abm_epi` simulator.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`agent`]       | `Agent` — a by-value view of one agent's fields           |
//! | [`population`]  | `Population` (SoA arrays, fixed size for the run)         |
//! | [`builder`]     | `PopulationBuilder` (random seeding from a `SimRng`)      |
//! | [`error`]       | `AgentError`, `AgentResult`                               |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on `Agent`.           |

pub mod agent;
pub mod builder;
pub mod error;
pub mod population;


pub use agent::Agent;
pub use builder::PopulationBuilder;
pub use error::{AgentError, AgentResult};
pub use population::Population;
