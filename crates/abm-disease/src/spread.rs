//! Pass A — infection spread.
//!
//! For every infector, every susceptible agent within contact range gets one
//! uniform draw; a draw below `infection_prob` infects it.  The two
//! [`SpreadMode`]s differ only in whether infections made during the pass are
//! visible to the rest of the pass.

use abm_agent::Population;
use abm_core::{AgentId, HealthState, SimRng, SpreadMode};
use abm_mobility::ContactDetector;
use log::trace;

/// Run Pass A over `population`, returning the number of new infections.
pub fn spread(
    population:     &mut Population,
    contact:        &ContactDetector,
    infection_prob: f64,
    mode:           SpreadMode,
    rng:            &mut SimRng,
) -> usize {
    match mode {
        SpreadMode::Cascading => spread_cascading(population, contact, infection_prob, rng),
        SpreadMode::Snapshot  => spread_snapshot(population, contact, infection_prob, rng),
    }
}

/// In-place pass.
///
/// The infector's state is read when its index is reached, so an agent
/// infected by a lower-indexed infector acts as an infector itself later in
/// the same pass.  One infected by a higher-indexed infector has already
/// been passed over and waits for the next tick.
fn spread_cascading(
    population:     &mut Population,
    contact:        &ContactDetector,
    infection_prob: f64,
    rng:            &mut SimRng,
) -> usize {
    let n = population.len() as u32;
    let mut infections = 0;

    for i in 0..n {
        let infector = AgentId(i);
        if population.state(infector) != HealthState::Infected {
            continue;
        }
        for j in 0..n {
            let target = AgentId(j);
            if population.state(target) == HealthState::Susceptible
                && contact.agents_in_contact(population, infector, target)
                && rng.chance(infection_prob)
            {
                trace!("{infector} infects {target}");
                population.set_state(target, HealthState::Infected);
                infections += 1;
            }
        }
    }

    infections
}

/// Snapshot-then-apply pass.
///
/// Infectors and susceptible targets are fixed by the state at the start of
/// the pass.  A target already marked for infection gets no further draws.
fn spread_snapshot(
    population:     &mut Population,
    contact:        &ContactDetector,
    infection_prob: f64,
    rng:            &mut SimRng,
) -> usize {
    let n = population.len() as u32;
    let infectors: Vec<AgentId> = population
        .agent_ids()
        .filter(|&a| population.state(a) == HealthState::Infected)
        .collect();
    let mut newly_infected = vec![false; population.len()];

    for &infector in &infectors {
        for j in 0..n {
            let target = AgentId(j);
            if !newly_infected[target.index()]
                && population.state(target) == HealthState::Susceptible
                && contact.agents_in_contact(population, infector, target)
                && rng.chance(infection_prob)
            {
                trace!("{infector} infects {target} (applied at end of pass)");
                newly_infected[target.index()] = true;
            }
        }
    }

    let mut infections = 0;
    for (i, _) in newly_infected.iter().enumerate().filter(|(_, hit)| **hit) {
        population.set_state(AgentId(i as u32), HealthState::Infected);
        infections += 1;
    }
    infections
}
