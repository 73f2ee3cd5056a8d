//! Command handlers.

pub mod edit;
pub mod list;

use crate::config::{Command, SwapperConfig};
use crate::error::SwapperError;
use std::io::Write;

/// Run the command selected by `config`, writing its report to `out`.
pub fn run(config: SwapperConfig, out: &mut impl Write) -> Result<(), SwapperError> {
    match config.command {
        Command::Courses => list::courses(out),
        Command::Holes { course } => list::holes(&course, out),
        Command::Custom {
            target,
            holes,
            edit,
        } => edit::custom(&config.rom, &target, holes, &edit, out),
        Command::Random {
            holes,
            seed,
            target,
            edit,
        } => edit::random(&config.rom, &target, holes, seed, &edit, out),
        Command::Swap { a, b, edit } => edit::swap(&config.rom, a, b, &edit, out),
    }
}
