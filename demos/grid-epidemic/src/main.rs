//! `grid-epidemic` — random-walk S/I/R/V/Q epidemic on a square grid.
//!
//! Agents wander a `grid_size × grid_size` lattice; infected agents infect
//! susceptible neighbours within `infection_radius`.  One row of state counts
//! per tick is written to a CSV file.
//!
//! Settings are layered, later layers winning:
//!
//! 1. built-in defaults,
//! 2. `--config <file.json>` (any subset of `AbmConfig` fields),
//! 3. `--params <file>` (`key=value` probabilities; missing file is skipped),
//! 4. individual command-line flags.
//!
//! Run with:
//!   cargo run -p grid-epidemic --release -- --ticks 200 --seed 7

mod logging;
mod progress;
mod settings;


use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use abm_output::{CsvWriter, SimOutputObserver};
use abm_params::write_params_file;
use abm_sim::SimBuilder;

use progress::ProgressObserver;
use settings::{Args, build_config};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_level)?;

    let config = build_config(&args)?;

    if let Some(path) = &args.write_params {
        write_params_file(path, &config.disease)
            .with_context(|| format!("writing parameters to {}", path.display()))?;
        info!("wrote parameters to {}", path.display());
    }

    info!(
        "population={} grid={} radius={} ticks={} quarantine={} seed={} spread={}",
        config.population_size,
        config.grid_size,
        config.infection_radius,
        config.total_ticks,
        config.quarantine_duration,
        config.seed,
        config.spread_mode,
    );
    info!(
        "infection={} recovery={} vaccination={} quarantine={}",
        config.disease.infection_prob,
        config.disease.recovery_prob,
        config.disease.vaccination_prob,
        config.disease.quarantine_prob,
    );

    let mut sim = SimBuilder::new(config)
        .build()
        .context("building simulation")?;

    // Open the sink before running so an unwritable path fails fast.
    let writer = CsvWriter::new(&args.output)?;
    let mut observers = (
        ProgressObserver::new(args.progress_interval),
        SimOutputObserver::new(writer),
    );

    let t0 = Instant::now();
    sim.run(&mut observers);
    observers
        .1
        .finish()
        .with_context(|| format!("writing results to {}", args.output.display()))?;

    info!(
        "finished in {:.2?}: {}; results in {}",
        t0.elapsed(),
        sim.counts(),
        args.output.display()
    );
    Ok(())
}
