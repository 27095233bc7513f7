//! Sampler CLI - Command Line Point Sampling
//!
//! Draws initial designs inside a box from the command line.
//!
//! # Commands
//!
//! - `sampler uniform --bounds 0:1,3:4 -n 10` - independent uniform points
//! - `sampler latin --bounds 0:1,3:4 -n 10 --seed 42` - Latin hypercube design
//! - `sampler sobol --bounds 0:1,3:4 -n 10` - randomly skipped Sobol points
//! - `sampler grid --bounds 0:1,3:4 -n 10` - regular grid of n^d points
//! - `sampler check` - print the resolved configuration
//!
//! # Configuration
//!
//! Settings are layered: defaults, then the `--config` TOML file, then
//! `SAMPLER_*` environment variables, then command line flags.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sampler_core::{Bounds, SamplingMethod};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{build_config, CliArgs, SamplerConfig};

/// Point sampling over bounded boxes
#[derive(Parser)]
#[command(name = "sampler")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging unless --log-level is given)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "SAMPLER_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (table, csv, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Decimal places in table and CSV output
    #[arg(short, long, global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments shared by the random samplers
#[derive(Args)]
struct RandomArgs {
    /// Box bounds as lo:hi pairs, e.g. 0:1,3:4
    #[arg(short, long, allow_hyphen_values = true)]
    bounds: Bounds,

    /// Number of points
    #[arg(short = 'n', long, default_value = "10")]
    points: usize,

    /// Integer seed, or "none" for the default state
    #[arg(short, long)]
    seed: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Independent uniform points
    Uniform(RandomArgs),

    /// Latin hypercube design
    Latin(RandomArgs),

    /// Sobol points after a random skip
    Sobol(RandomArgs),

    /// Regular grid with n points per dimension
    Grid {
        /// Box bounds as lo:hi pairs, e.g. 0:1,3:4
        #[arg(short, long, allow_hyphen_values = true)]
        bounds: Bounds,

        /// Points per dimension
        #[arg(short = 'n', long, default_value = "10")]
        points: usize,
    },

    /// Check configuration
    Check,
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let log_level = match (&self.log_level, self.verbose) {
            (Some(level), _) => Some(level.clone()),
            (None, true) => Some("debug".to_string()),
            (None, false) => None,
        };
        CliArgs {
            config_file: self.config.clone(),
            log_level,
            format: self.format.clone(),
            precision: self.precision,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args())?;

    // Logs go to stderr so stdout carries only the sample.
    init_tracing(config.log_level.as_filter_str());

    info!(
        log_level = %config.log_level,
        format = %config.format,
        precision = config.precision,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Uniform(args) => run_random(&config, SamplingMethod::Uniform, args),
        Commands::Latin(args) => run_random(&config, SamplingMethod::Latin, args),
        Commands::Sobol(args) => run_random(&config, SamplingMethod::Sobol, args),
        Commands::Grid { bounds, points } => {
            commands::sample::run(&config, SamplingMethod::Grid, &bounds, points, None)
        }
        Commands::Check => commands::check::run(&config),
    }
}

fn run_random(config: &SamplerConfig, method: SamplingMethod, args: RandomArgs) -> Result<()> {
    commands::sample::run(config, method, &args.bounds, args.points, args.seed.as_deref())
}
