//! Radius-based contact predicate.
//!
//! Two agents are in contact when the squared Euclidean distance between
//! their cells is at most `radius²`.  The comparison stays in integers; no
//! square root is taken.  Contact ignores health state entirely; callers
//! decide which pairs matter.
//!
//! The infection pass scans all pairs, which is quadratic in the population.
//! That is fine at the modelled scale; a uniform bucket grid keyed by
//! `cell / radius` would be the replacement if populations grow large.

use abm_agent::Population;
use abm_core::{AgentId, GridPos};

/// Symmetric, pure contact test for a fixed infection radius.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ContactDetector {
    radius: u32,
    radius_sq: u64,
}

impl ContactDetector {
    pub fn new(radius: u32) -> Self {
        Self {
            radius,
            radius_sq: u64::from(radius) * u64::from(radius),
        }
    }

    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// `true` iff `a` and `b` are within the infection radius.
    #[inline]
    pub fn in_contact(&self, a: GridPos, b: GridPos) -> bool {
        a.distance_sq(b) <= self.radius_sq
    }

    /// Contact test on two agents of `population`.
    #[inline]
    pub fn agents_in_contact(&self, population: &Population, a: AgentId, b: AgentId) -> bool {
        self.in_contact(population.position(a), population.position(b))
    }
}
