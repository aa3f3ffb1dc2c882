use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use boid_cli::{settings, RunOptions, Runner};
use boid_core::NeighborStrategy;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless boid flocking simulation", long_about = None)]
struct Args {
    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Milliseconds per frame
    #[arg(long, default_value_t = 1000.0 / 60.0)]
    delta_ms: f32,

    /// Override the population size from the settings
    #[arg(short, long)]
    population: Option<usize>,

    /// Seed for a reproducible initial population
    #[arg(long)]
    seed: Option<u64>,

    /// JSON settings file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Write one JSON snapshot per frame to this file
    #[arg(long)]
    snapshots: Option<PathBuf>,

    /// Log flock statistics every N frames (0 logs only the last frame)
    #[arg(long, default_value_t = 60)]
    stats_every: u64,

    /// Look up neighbours through a spatial grid
    #[arg(long)]
    grid: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn execute<W: Write>(mut runner: Runner<W>) -> Result<()> {
    let stats = runner.run().context("Simulation error")?;
    log::info!(
        "Finished after {} frames with {} boids",
        stats.frame,
        stats.boid_count
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let mut simulation_settings = settings::load_settings(args.settings.as_deref())?;
    if let Some(population) = args.population {
        simulation_settings.population = population;
    }
    simulation_settings
        .validate()
        .context("Invalid simulation settings")?;
    if simulation_settings.min_speed == simulation_settings.max_speed {
        log::debug!(
            "min_speed equals max_speed ({}): every boid moves at constant speed",
            simulation_settings.max_speed
        );
    }

    let config = settings::to_config(&simulation_settings);
    let options = RunOptions {
        frames: args.frames,
        delta_millis: args.delta_ms,
        seed: args.seed,
        stats_every: args.stats_every,
        strategy: if args.grid {
            NeighborStrategy::Grid
        } else {
            NeighborStrategy::Naive
        },
    };
    options.validate().context("Invalid --delta-ms")?;

    log::info!("Boid simulation starting...");
    log::info!(
        "World: {}x{}, boids: {}",
        config.world.width,
        config.world.height,
        config.population
    );

    match args.snapshots {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create snapshot file {}", path.display()))?;
            log::info!("Writing snapshots to {}", path.display());
            execute(Runner::with_writer(config, options, BufWriter::new(file)))
        }
        None => execute(Runner::new(config, options)),
    }
}
