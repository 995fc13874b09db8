//! Pass B — resolution of infected, quarantined, and vaccinated agents.

use abm_agent::Population;
use abm_core::{AgentId, DiseaseParams, HealthState, SimRng};
use log::trace;

use crate::TransitionReport;

/// Run Pass B over `population`, adding its transitions to `report`.
///
/// Each agent is visited once, in index order, and handled according to its
/// state at the moment it is visited:
///
/// - **Infected**: one draw `r`.  `r < recovery_prob` recovers; otherwise
///   `r < quarantine_prob` quarantines.  Both thresholds see the same `r`, so
///   quarantine is unreachable whenever `quarantine_prob <= recovery_prob`.
/// - **Quarantined**: released to `Susceptible` once `days_in_state` has
///   reached `quarantine_duration`.  No draw.
/// - **Vaccinated**: one draw; breakthrough to `Infected` with
///   [`DiseaseParams::BREAKTHROUGH_PROB`].
/// - **Susceptible**, **Recovered**: untouched, no draw.
pub fn resolve(
    population: &mut Population,
    params:     &DiseaseParams,
    rng:        &mut SimRng,
    report:     &mut TransitionReport,
) {
    for i in 0..population.len() as u32 {
        let agent = AgentId(i);
        match population.state(agent) {
            HealthState::Infected => {
                let r = rng.uniform();
                if r < params.recovery_prob {
                    trace!("{agent} recovers");
                    population.set_state(agent, HealthState::Recovered);
                    report.recoveries += 1;
                } else if r < params.quarantine_prob {
                    trace!("{agent} enters quarantine");
                    population.set_state(agent, HealthState::Quarantined);
                    report.quarantines += 1;
                }
            }
            HealthState::Quarantined => {
                if population.agent(agent).quarantine_served() {
                    trace!("{agent} released from quarantine");
                    population.set_state(agent, HealthState::Susceptible);
                    report.releases += 1;
                }
            }
            HealthState::Vaccinated => {
                if rng.chance(DiseaseParams::BREAKTHROUGH_PROB) {
                    trace!("{agent} breakthrough infection");
                    population.set_state(agent, HealthState::Infected);
                    report.breakthroughs += 1;
                }
            }
            HealthState::Susceptible | HealthState::Recovered => {}
        }
    }
}
