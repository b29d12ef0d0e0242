use std::path::PathBuf;

use clap::Parser;
use satellite_trajectory::config::{SimulationConfig, load_config};
use satellite_trajectory::simulation;
use tracing_subscriber::EnvFilter;

/// Propagate a satellite around Earth with a fixed-step Velocity-Verlet integrator
/// and write its trajectory as `x y z` lines (metres).
#[derive(Parser, Debug)]
#[command(author, version, about = "Two-body satellite trajectory simulator")]
struct Cli {
    /// Optional TOML/YAML config; omitted fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Trajectory output file (use '-' for stdout)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Number of integration steps
    #[arg(long)]
    steps: Option<usize>,

    /// Time step in seconds
    #[arg(long)]
    dt: Option<f64>,

    /// Initial altitude above Earth's mean radius in km
    #[arg(long, allow_negative_numbers = true)]
    altitude_km: Option<f64>,

    /// Initial tangential speed in m/s
    #[arg(long, allow_negative_numbers = true)]
    speed: Option<f64>,

    /// Write a JSON run summary to this path
    #[arg(long)]
    summary: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(output) = cli.output {
        config.output = output;
    }
    if let Some(steps) = cli.steps {
        config.steps = steps;
    }
    if let Some(dt) = cli.dt {
        config.time_step_s = dt;
    }
    if let Some(altitude_km) = cli.altitude_km {
        config.altitude_km = altitude_km;
    }
    if let Some(speed) = cli.speed {
        config.speed_m_s = speed;
    }
    if cli.summary.is_some() {
        config.summary = cli.summary;
    }

    simulation::run(&config)?;
    Ok(())
}
