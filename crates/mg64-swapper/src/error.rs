//! Error types for the course swapper.

use mg64_rom::RomError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, editing or saving a ROM.
#[derive(Debug, Error)]
pub enum SwapperError {
    /// ROM path does not exist
    #[error("ROM file not found: {}", .path.display())]
    FileNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Reading or writing a ROM file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Image too short to contain the tables of the layout
    #[error("ROM image is 0x{len:X} bytes, the table layout needs at least 0x{required:X}")]
    ImageTooSmall {
        /// Image length
        len: usize,
        /// Minimum length required by the layout
        required: usize,
    },

    /// Course selection that cannot be turned into swaps
    #[error("invalid course plan: {0}")]
    InvalidPlan(String),

    /// Table or catalog error from the ROM layer
    #[error(transparent)]
    Rom(#[from] RomError),

    /// At least one swap of the batch failed; nothing was saved
    #[error("{failed} swap(s) failed, ROM not saved")]
    BatchFailed {
        /// Number of failed swaps
        failed: usize,
    },

    /// Writing the report failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
