use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ramsey spin-squeezing frequency metrology sweep.
#[derive(Parser)]
#[command(
    name = "ramsey",
    version,
    about = "Spin-squeezing frequency metrology sweep"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the full parameter sweep and dominance selection.
    Sweep(SweepArgs),
    /// Compute the ensemble spectrum for a single parameter combination.
    Spectrum(SpectrumArgs),
}

/// Arguments for the `sweep` subcommand.
#[derive(clap::Args)]
pub struct SweepArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "ramsey.toml")]
    pub config: PathBuf,

    /// Override report JSON path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `spectrum` subcommand.
#[derive(clap::Args)]
pub struct SpectrumArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "ramsey.toml")]
    pub config: PathBuf,

    /// Collective spin size J.
    #[arg(long, default_value_t = 100)]
    pub spin_size: u32,

    /// One-axis twisting squeezing strength chi.
    #[arg(long, default_value_t = 0.0)]
    pub squeezing: f64,

    /// Accumulated phase offset alpha (radians).
    #[arg(long, default_value_t = std::f64::consts::FRAC_PI_2)]
    pub alpha: f64,

    /// Polar rotation angle beta (radians).
    #[arg(long, default_value_t = std::f64::consts::FRAC_PI_2)]
    pub beta: f64,

    /// Path for spectrum JSON output.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}
