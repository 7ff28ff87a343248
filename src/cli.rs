use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// TRANSEP transfer-function transport model.
#[derive(Parser)]
#[command(
    name = "transep",
    version,
    about = "Transfer-function transport simulation"
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
    /// Convolve the input series with every configured model.
    Simulate(SimulateArgs),
    /// Write the sampled transit-time distribution of every configured model.
    Kernel(KernelArgs),
}

/// Convolution engine selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EngineArg {
    /// Centered linear convolution scaled by the time step.
    Fast,
    /// Explicit superposition sum.
    Explicit,
}

/// Arguments for the `simulate` subcommand.
#[derive(clap::Args)]
pub struct SimulateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "transep.toml")]
    pub config: PathBuf,

    /// Override output directory from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override convolution engine from config.
    #[arg(short, long, value_enum)]
    pub engine: Option<EngineArg>,
}

/// Arguments for the `kernel` subcommand.
#[derive(clap::Args)]
pub struct KernelArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "transep.toml")]
    pub config: PathBuf,

    /// Number of lags to sample.
    #[arg(short = 'n', long = "lags", default_value_t = 400)]
    pub lags: usize,

    /// Override output directory from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
