//! `abm-mobility` — agent movement and contact detection.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`movement`]  | `MovementEngine` — one random unit step per mobile agent   |
//! | [`contact`]   | `ContactDetector` — squared-distance radius predicate      |
//!
//! # Movement model
//!
//! Each tick every agent that is not quarantined draws one of four
//! directions uniformly.  A step that would leave the grid is discarded and
//! the agent stays put for that tick; it is never clamped to the edge or
//! redrawn.  Neither operation can fail.

pub mod contact;
pub mod movement;


pub use contact::ContactDetector;
pub use movement::MovementEngine;
