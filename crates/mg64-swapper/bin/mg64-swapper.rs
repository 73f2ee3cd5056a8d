//! mg64-swapper binary entry point.
//!
//! Thin wrapper around the mg64-swapper library that:
//! 1. Parses command-line arguments
//! 2. Initializes logging
//! 3. Runs the selected command

use anyhow::Result;
use mg64_swapper::{SwapperConfig, run};

fn main() -> Result<()> {
    let config = SwapperConfig::from_args();

    let default_level = if config.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("ROM path: {}", config.rom.display());

    run(config, &mut std::io::stdout().lock())?;

    Ok(())
}
