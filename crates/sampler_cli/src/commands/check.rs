//! Check command implementation
//!
//! Prints the resolved configuration and the available sampling methods.

use sampler_core::qmc::SOBOL_MAX_DIMENSION;
use sampler_core::samplers::SOBOL_SKIP_RANGE;
use sampler_core::SamplingMethod;
use tracing::info;

use crate::config::SamplerConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &SamplerConfig) -> Result<()> {
    info!("Checking configuration...");

    println!("sampler {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Configuration:");
    println!("  log level: {}", config.log_level);
    println!("  format:    {}", config.format);
    match config.seed {
        Some(seed) => println!("  seed:      {}", seed),
        None => println!("  seed:      (default state)"),
    }
    println!("  precision: {}", config.precision);
    println!();
    println!("Methods:");
    for method in SamplingMethod::ALL {
        let kind = if method.is_random() {
            "random"
        } else {
            "deterministic"
        };
        println!("  {:<8} {}", method.name(), kind);
    }
    println!();
    println!(
        "Sobol: up to {} dimensions, skip drawn from {}..{}",
        SOBOL_MAX_DIMENSION, SOBOL_SKIP_RANGE.start, SOBOL_SKIP_RANGE.end
    );

    info!("Check complete");
    Ok(())
}
