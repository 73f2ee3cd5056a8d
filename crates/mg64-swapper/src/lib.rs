//! Course builder for Mario Golf 64 ROM images.
//!
//! This crate wraps [`mg64_rom`] with everything a command-line session
//! needs:
//! - `config`: CLI arguments and environment variables
//! - `plan`: custom and random course plans
//! - `rom_file`: loading and atomically saving ROM images
//! - `commands`: listing and editing commands
//!
//! # Example
//!
//! ```no_run
//! use mg64_swapper::{SwapperConfig, run};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = SwapperConfig::from_args();
//!     run(config, &mut std::io::stdout().lock())?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod commands;
pub mod config;
pub mod error;
pub mod plan;
pub mod rom_file;

pub use commands::run;
pub use config::{Command, EditArgs, SwapperConfig};
pub use error::SwapperError;
pub use plan::{
    CustomPlanner, HoleSelection, PlannedSwap, RandomPlanner, SwapPlan, SwapPlanner,
};
pub use rom_file::{ensure_layout_fits, load_image, persist_image};
