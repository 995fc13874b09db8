//! Integration tests for abm-sim.

use abm_agent::{Agent, Population};
use abm_core::{AbmConfig, AgentId, DiseaseParams, Grid, GridPos, HealthState, SpreadMode, Tick};

use crate::{NoopObserver, SimBuilder, SimObserver, StateCounts, TickSummary};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(population_size: usize, grid_size: u32, total_ticks: u64) -> AbmConfig {
    AbmConfig {
        population_size,
        grid_size,
        total_ticks,
        ..AbmConfig::default()
    }
}

fn disease(infection: f64, recovery: f64, vaccination: f64, quarantine: f64) -> DiseaseParams {
    DiseaseParams {
        infection_prob:   infection,
        recovery_prob:    recovery,
        vaccination_prob: vaccination,
        quarantine_prob:  quarantine,
    }
}

/// Records every tick summary and checks per-tick invariants as it goes.
#[derive(Default)]
struct Recorder {
    rows:      Vec<TickSummary>,
    ended_at:  Option<Tick>,
    starts:    usize,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, _tick: Tick) {
        self.starts += 1;
    }

    fn on_tick_end(&mut self, summary: &TickSummary, population: &Population) {
        assert_eq!(summary.counts.total(), population.len(), "counts at {}", summary.tick);
        assert!(
            population.positions().iter().all(|&p| population.grid().contains(p)),
            "agent off grid at {}",
            summary.tick
        );
        self.rows.push(*summary);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.ended_at = Some(final_tick);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn builds_successfully_with_defaults() {
        let sim = SimBuilder::new(AbmConfig::default()).build().unwrap();
        assert_eq!(sim.population.len(), 100);
        assert_eq!(sim.population.state(AgentId::PATIENT_ZERO), HealthState::Infected);
        assert_eq!(sim.current_tick, Tick::ZERO);
    }

    #[test]
    fn invalid_probability_rejected_before_run() {
        let mut cfg = config(10, 5, 3);
        cfg.disease.quarantine_prob = -0.5;
        assert!(matches!(SimBuilder::new(cfg).build(), Err(SimError::Config(_))));
    }

    #[test]
    fn zero_grid_rejected() {
        assert!(SimBuilder::new(config(10, 0, 3)).build().is_err());
    }

    #[test]
    fn zero_population_rejected() {
        assert!(SimBuilder::new(config(0, 5, 3)).build().is_err());
    }

    #[test]
    fn population_count_mismatch_errors() {
        let grid = Grid::new(5).unwrap();
        let pop = Population::from_agents(
            grid,
            vec![Agent::new(GridPos::new(0, 0), HealthState::Infected, 5)],
        )
        .unwrap();
        let result = SimBuilder::new(config(2, 5, 3)).population(pop).build();
        assert!(matches!(result, Err(SimError::AgentCountMismatch { expected: 2, got: 1 })));
    }

    #[test]
    fn population_grid_mismatch_errors() {
        let pop = Population::from_agents(
            Grid::new(4).unwrap(),
            vec![Agent::new(GridPos::new(0, 0), HealthState::Infected, 5)],
        )
        .unwrap();
        assert!(SimBuilder::new(config(1, 5, 3)).population(pop).build().is_err());
    }
}

// ── Run loop ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn runs_exactly_total_ticks() {
        let mut sim = SimBuilder::new(config(20, 8, 7)).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec);
        assert_eq!(rec.starts, 7);
        assert_eq!(rec.rows.len(), 7);
        assert_eq!(rec.ended_at, Some(Tick(7)));
        assert_eq!(sim.current_tick, Tick(7));
        let ticks: Vec<u64> = rec.rows.iter().map(|r| r.tick.0).collect();
        assert_eq!(ticks, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn zero_ticks_emits_nothing() {
        let mut sim = SimBuilder::new(config(5, 5, 0)).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec);
        assert!(rec.rows.is_empty());
        assert_eq!(rec.ended_at, Some(Tick(0)));
    }

    #[test]
    fn run_ticks_advances_clock() {
        let mut sim = SimBuilder::new(config(5, 5, 100)).build().unwrap();
        sim.run_ticks(5, &mut NoopObserver);
        assert_eq!(sim.current_tick, Tick(5));
        sim.run_ticks(3, &mut NoopObserver);
        assert_eq!(sim.current_tick, Tick(8));
        assert_eq!(sim.step().tick, Tick(8));
        assert_eq!(sim.current_tick, Tick(9));
    }

    #[test]
    fn counts_sum_to_population_every_tick() {
        let mut cfg = config(150, 12, 80);
        cfg.disease = disease(0.3, 0.05, 0.2, 0.4);
        cfg.quarantine_duration = 3;
        let mut sim = SimBuilder::new(cfg).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec);
        assert!(rec.rows.iter().all(|r| r.counts.total() == 150));
    }

    #[test]
    fn same_seed_reproduces_series() {
        let mut cfg = config(60, 10, 40);
        cfg.disease = disease(0.4, 0.05, 0.1, 0.3);
        let mut a = Recorder::default();
        let mut b = Recorder::default();
        SimBuilder::new(cfg.clone()).build().unwrap().run(&mut a);
        SimBuilder::new(cfg).build().unwrap().run(&mut b);
        assert_eq!(a.rows, b.rows);
    }

    #[test]
    fn snapshot_mode_runs_and_conserves_counts() {
        let mut cfg = config(80, 10, 30);
        cfg.spread_mode = SpreadMode::Snapshot;
        cfg.disease = disease(0.5, 0.05, 0.1, 0.2);
        let mut rec = Recorder::default();
        SimBuilder::new(cfg).build().unwrap().run(&mut rec);
        assert_eq!(rec.rows.len(), 30);
    }

    #[test]
    fn tuple_observer_forwards_to_both() {
        let mut sim = SimBuilder::new(config(5, 5, 4)).build().unwrap();
        let mut pair = (Recorder::default(), Recorder::default());
        sim.run(&mut pair);
        assert_eq!(pair.0.rows.len(), 4);
        assert_eq!(pair.0.rows, pair.1.rows);
    }
}

// ── Model properties ──────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use super::*;

    #[test]
    fn no_contact_infections_when_infection_prob_zero() {
        let mut cfg = config(100, 6, 60);
        cfg.disease = disease(0.0, 0.1, 0.0, 0.5);
        let mut rec = Recorder::default();
        SimBuilder::new(cfg).build().unwrap().run(&mut rec);
        assert!(rec.rows.iter().all(|r| r.transitions.infections == 0));
        assert!(rec.rows.iter().all(|r| r.counts.infected <= 1));
    }

    #[test]
    fn quarantine_release_exactly_after_duration() {
        // Lone agent: certain quarantine at tick 0, duration 4 → Susceptible at tick 4.
        let mut cfg = config(1, 5, 8);
        cfg.disease = disease(0.0, 0.0, 0.0, 1.0);
        cfg.quarantine_duration = 4;
        let mut rec = Recorder::default();
        SimBuilder::new(cfg).build().unwrap().run(&mut rec);

        let states: Vec<(usize, usize)> =
            rec.rows.iter().map(|r| (r.counts.quarantined, r.counts.susceptible)).collect();
        assert_eq!(states[0], (1, 0), "quarantined at tick 0");
        for t in 1..4 {
            assert_eq!(states[t], (1, 0), "still quarantined at tick {t}");
        }
        for t in 4..8 {
            assert_eq!(states[t], (0, 1), "released by tick {t}");
        }
        assert_eq!(rec.rows[4].transitions.releases, 1);
    }

    #[test]
    fn vaccinated_leave_only_by_breakthrough() {
        let mut cfg = config(50, 5, 60);
        cfg.disease = disease(1.0, 0.0, 1.0, 0.0);
        cfg.infection_radius = 10;
        let mut rec = Recorder::default();
        SimBuilder::new(cfg).build().unwrap().run(&mut rec);

        let mut vaccinated = 49;
        for row in &rec.rows {
            vaccinated -= row.transitions.breakthroughs;
            assert_eq!(row.counts.vaccinated, vaccinated, "at {}", row.tick);
            // With no susceptible agents contact never infects anyone.
            assert_eq!(row.transitions.infections, 0);
        }
    }

    /// Ten agents, 5×5 grid, radius 5, certain infection, nothing else.
    /// Patient zero starts in the centre; after one unit step every cell of
    /// the grid is within distance² 13 ≤ 25, so all contacts are guaranteed.
    #[test]
    fn full_contact_infects_everyone_in_one_tick() {
        let mut cfg = config(10, 5, 1);
        cfg.infection_radius = 5;
        cfg.disease = disease(1.0, 0.0, 0.0, 0.0);

        let grid = Grid::new(5).unwrap();
        let mut agents = vec![Agent::new(GridPos::new(2, 2), HealthState::Infected, 5)];
        agents.extend((0..9).map(|i| {
            Agent::new(GridPos::new(i % 5, (i * 2) % 5), HealthState::Susceptible, 5)
        }));
        let pop = Population::from_agents(grid, agents).unwrap();

        let mut sim = SimBuilder::new(cfg).population(pop).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec);

        assert_eq!(rec.rows.len(), 1);
        assert_eq!(rec.rows[0].counts.infected, 10);
        assert_eq!(rec.rows[0].transitions.infections, 9);
    }

    /// Same scenario with a randomly seeded population and a radius that
    /// covers the whole 5×5 grid diagonal.
    #[test]
    fn full_contact_with_random_population() {
        let mut cfg = config(10, 5, 1);
        cfg.infection_radius = 6;
        cfg.disease = disease(1.0, 0.0, 0.0, 0.0);
        let mut sim = SimBuilder::new(cfg).build().unwrap();
        let summary = sim.step();
        assert_eq!(summary.counts.infected, 10);
        assert_eq!(summary.counts.total(), 10);
    }

    #[test]
    fn lone_agent_stays_in_infected_recovered_or_quarantined() {
        for seed in 0..20 {
            let mut cfg = config(1, 4, 50);
            cfg.seed = seed;
            // quarantine_prob <= recovery_prob: quarantine is unreachable, so the
            // agent can never be released back to Susceptible.
            cfg.disease = disease(0.9, 0.2, 0.7, 0.1);
            let mut rec = Recorder::default();
            SimBuilder::new(cfg).build().unwrap().run(&mut rec);
            for row in &rec.rows {
                let c = row.counts;
                assert_eq!(c.infected + c.recovered + c.quarantined, 1, "seed {seed} {}", row.tick);
                assert_eq!(c.susceptible + c.vaccinated, 0);
            }
        }
    }

    #[test]
    fn largest_grid_far_apart_agents_never_touch() {
        let far = u32::MAX - 2;
        let mut cfg = config(2, u32::MAX, 3);
        cfg.disease = disease(1.0, 0.0, 0.0, 0.0);
        cfg.validate().unwrap();

        let pop = Population::from_agents(
            Grid::new(u32::MAX).unwrap(),
            vec![
                Agent::new(GridPos::new(1, 1), HealthState::Infected, 5),
                Agent::new(GridPos::new(far, far), HealthState::Susceptible, 5),
            ],
        )
        .unwrap();
        let mut sim = SimBuilder::new(cfg).population(pop).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec);

        assert_eq!(rec.rows.len(), 3);
        for row in &rec.rows {
            assert_eq!(row.transitions.infections, 0);
            assert_eq!((row.counts.infected, row.counts.susceptible), (1, 1));
        }
    }

    #[test]
    fn aggregate_matches_population() {
        let sim = SimBuilder::new(config(30, 6, 1)).build().unwrap();
        let counts = StateCounts::tally(&sim.population);
        for s in HealthState::ALL {
            assert_eq!(counts.get(s), sim.population.count(s));
        }
        assert_eq!(counts.as_array().iter().sum::<usize>(), 30);
    }
}
