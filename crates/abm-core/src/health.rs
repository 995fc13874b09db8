//! Epidemiological state shared across all simulation crates.

/// The state an agent is in.  Exactly one value at any time.
///
/// `Recovered` and `Quarantined` are reachable only from `Infected`;
/// `Vaccinated` is assigned only when the population is seeded.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthState {
    #[default]
    Susceptible,
    Infected,
    Recovered,
    Vaccinated,
    Quarantined,
}

impl HealthState {
    /// Every state, in output column order.
    pub const ALL: [HealthState; 5] = [
        HealthState::Susceptible,
        HealthState::Infected,
        HealthState::Recovered,
        HealthState::Vaccinated,
        HealthState::Quarantined,
    ];

    /// `true` for the states whose `days_in_state` counter advances each tick.
    #[inline]
    pub fn is_timed(self) -> bool {
        matches!(self, HealthState::Infected | HealthState::Quarantined)
    }

    /// Quarantined agents stay where they are.
    #[inline]
    pub fn can_move(self) -> bool {
        !matches!(self, HealthState::Quarantined)
    }

    /// Column label used in the CSV header.
    pub fn as_str(self) -> &'static str {
        match self {
            HealthState::Susceptible => "Susceptible",
            HealthState::Infected    => "Infected",
            HealthState::Recovered   => "Recovered",
            HealthState::Vaccinated  => "Vaccinated",
            HealthState::Quarantined => "Quarantined",
        }
    }
}

impl std::fmt::Display for HealthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
