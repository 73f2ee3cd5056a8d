//! Command-line configuration.
//!
//! Configuration can be provided via:
//! - CLI arguments (`--rom`, `--output`, ...)
//! - Environment variables (`MG64_ROM`, `MG64_OUTPUT`)
//! - Default values
//!
//! # Example
//!
//! ```no_run
//! use mg64_swapper::SwapperConfig;
//!
//! let config = SwapperConfig::from_args();
//! println!("Editing {}", config.rom.display());
//! ```

use crate::plan::HoleSelection;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Swapper configuration loaded from CLI args and environment variables.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mg64-swapper",
    about = "Build custom and random courses by relocating holes in a Mario Golf 64 ROM",
    version
)]
pub struct SwapperConfig {
    /// Source ROM image (big-endian .z64)
    #[arg(long, global = true, env = "MG64_ROM", default_value = "baserom.z64")]
    pub rom: PathBuf,

    /// Log every table write
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl SwapperConfig {
    /// Parse configuration from command-line arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }
}

/// What to do with the ROM.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the courses and their hole counts
    Courses,

    /// List the holes of one course in play order
    Holes {
        /// Course name, e.g. "Koopa Park"
        course: String,
    },

    /// Replace holes of a course with hand-picked ones
    Custom {
        /// Course whose holes get replaced
        #[arg(long, default_value = "Toad Highlands")]
        target: String,

        /// Replacement for one hole of the target course
        #[arg(long = "hole", value_name = "ORDINAL=COURSE:HOLE", required = true)]
        holes: Vec<HoleSelection>,

        #[command(flatten)]
        edit: EditArgs,
    },

    /// Replace the first 9 or 18 holes of a course with random ones
    Random {
        /// Number of holes to generate
        #[arg(long, default_value_t = 18, value_parser = parse_course_length)]
        holes: usize,

        /// Seed for a reproducible course
        #[arg(long)]
        seed: Option<u64>,

        /// Course whose holes get replaced
        #[arg(long, default_value = "Toad Highlands")]
        target: String,

        #[command(flatten)]
        edit: EditArgs,
    },

    /// Swap two holes by global index
    Swap {
        /// First hole index
        a: usize,

        /// Second hole index
        b: usize,

        #[command(flatten)]
        edit: EditArgs,
    },
}

/// Options shared by every command that edits the ROM.
#[derive(Debug, Clone, Default, Args)]
pub struct EditArgs {
    /// Where to write the edited ROM
    #[arg(short, long, env = "MG64_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Swap geometry only, leaving every par value in place
    #[arg(long)]
    pub geometry_only: bool,

    /// Apply the swaps in memory and print the report without saving
    #[arg(long)]
    pub dry_run: bool,
}

impl EditArgs {
    /// Output path, or `default` when none was given
    pub fn output_or<'a>(&'a self, default: &'a str) -> &'a Path {
        self.output.as_deref().unwrap_or_else(|| Path::new(default))
    }
}

fn parse_course_length(value: &str) -> Result<usize, String> {
    match value.trim() {
        "9" => Ok(9),
        "18" => Ok(18),
        other => Err(format!("expected 9 or 18, got '{other}'")),
    }
}
