//! Command-line arguments and configuration layering.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info, warn};

use abm_core::{AbmConfig, SpreadMode};
use abm_output::DEFAULT_OUTPUT_FILE;
use abm_params::{ParamsError, load_params_file};

pub const DEFAULT_PARAMS_FILE: &str = "ABM_params.txt";

#[derive(Parser, Debug)]
#[command(name = "grid-epidemic")]
#[command(about = "Agent-based S/I/R/V/Q epidemic on a square grid")]
pub struct Args {
    /// JSON configuration file (any subset of fields)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// key=value probability file; skipped with a warning if absent
    #[arg(short, long, default_value = DEFAULT_PARAMS_FILE)]
    pub params: PathBuf,

    /// CSV file for the per-tick counts
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Write the effective probabilities to this file before running
    #[arg(long)]
    pub write_params: Option<PathBuf>,

    /// Random seed
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of agents
    #[arg(long)]
    pub population: Option<usize>,

    /// Side length of the square grid
    #[arg(long)]
    pub grid_size: Option<u32>,

    /// Contact radius in cells
    #[arg(long)]
    pub radius: Option<u32>,

    /// Number of ticks to simulate
    #[arg(short, long)]
    pub ticks: Option<u64>,

    /// Ticks spent in quarantine before release
    #[arg(long)]
    pub quarantine_duration: Option<u32>,

    /// Infection pass semantics: cascading or snapshot
    #[arg(long)]
    pub spread_mode: Option<SpreadMode>,

    #[arg(long)]
    pub infection_prob: Option<f64>,

    #[arg(long)]
    pub recovery_prob: Option<f64>,

    #[arg(long)]
    pub vaccination_prob: Option<f64>,

    #[arg(long)]
    pub quarantine_prob: Option<f64>,

    /// Log the state counts every N ticks (0 disables)
    #[arg(long, default_value_t = 10)]
    pub progress_interval: u64,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

/// Merge defaults, JSON config, parameter file and flags, then validate.
pub fn build_config(args: &Args) -> Result<AbmConfig> {
    let mut config = match &args.config {
        Some(path) => load_json(path)?,
        None => AbmConfig::default(),
    };

    apply_params_file(&args.params, &mut config)?;
    apply_flags(args, &mut config);

    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn load_json(path: &Path) -> Result<AbmConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

fn apply_params_file(path: &Path, config: &mut AbmConfig) -> Result<()> {
    match load_params_file(path) {
        Ok(overrides) => {
            overrides.apply(&mut config.disease);
            info!("loaded parameters from {}", path.display());
            Ok(())
        }
        Err(ParamsError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            warn!("parameter file {} not found; using defaults", path.display());
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("loading parameters from {}", path.display())),
    }
}

fn apply_flags(args: &Args, config: &mut AbmConfig) {
    if let Some(v) = args.seed                { config.seed = v; }
    if let Some(v) = args.population          { config.population_size = v; }
    if let Some(v) = args.grid_size           { config.grid_size = v; }
    if let Some(v) = args.radius              { config.infection_radius = v; }
    if let Some(v) = args.ticks               { config.total_ticks = v; }
    if let Some(v) = args.quarantine_duration { config.quarantine_duration = v; }
    if let Some(v) = args.spread_mode         { config.spread_mode = v; }
    if let Some(v) = args.infection_prob      { config.disease.infection_prob = v; }
    if let Some(v) = args.recovery_prob       { config.disease.recovery_prob = v; }
    if let Some(v) = args.vaccination_prob    { config.disease.vaccination_prob = v; }
    if let Some(v) = args.quarantine_prob     { config.disease.quarantine_prob = v; }
}
