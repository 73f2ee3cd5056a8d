//! Error types for ROM table access and hole swapping

use crate::par::ParCoordinate;
use crate::swap::SwapState;
use thiserror::Error;

/// Errors raised by image, table and catalog access
#[derive(Error, Debug)]
pub enum RomError {
    /// Byte access past the end of the image
    #[error("access of {width} byte(s) at 0x{offset:X} is outside the image (length 0x{len:X})")]
    OutOfBounds {
        /// Start of the attempted access
        offset: usize,
        /// Number of bytes accessed
        width: usize,
        /// Image length
        len: usize,
    },

    /// Resource entry index past the end of the resource table
    #[error("entry {index} at 0x{address:X} is outside the resource table (ends at 0x{table_end:X})")]
    IndexOutOfRange {
        /// Requested entry index
        index: usize,
        /// Address the entry would occupy, saturated on overflow
        address: usize,
        /// Exclusive end of the table
        table_end: usize,
    },

    /// Par byte outside `{3, 4, 5}`
    #[error("invalid par value {value} at 0x{address:X} (expected 3, 4 or 5)")]
    InvalidParValue {
        /// Offending value
        value: u8,
        /// Par table address involved
        address: usize,
    },

    /// Par coordinate outside the `6 x 18` table
    #[error("par coordinate {0} is outside the par table")]
    InvalidParCoordinate(ParCoordinate),

    /// Par address does not fit in the address space
    #[error("par coordinate {coordinate} overflows the address space from base 0x{base:X}")]
    ParAddressOverflow {
        /// Table base
        base: usize,
        /// Coordinate being addressed
        coordinate: ParCoordinate,
    },

    /// Global hole index without a par coordinate or catalog entry
    #[error("unknown hole index {0}")]
    UnknownUnit(usize),

    /// Course name that does not match the catalog
    #[error(
        "unknown course: {0} (expected one of Toad Highlands, Koopa Park, Shy Guy Desert, \
         Yoshi's Island, Boo Valley, Mario's Star, Luigi's Garden, Peach's Castle)"
    )]
    UnknownCourse(String),

    /// Hole number that does not exist in a course
    #[error("{course} has no hole {hole}")]
    UnknownHole {
        /// Course name
        course: String,
        /// Requested hole number
        hole: u8,
    },

    /// `BinRw` encoding or decoding error
    #[error("record codec error: {0}")]
    Codec(#[from] binrw::Error),
}

impl RomError {
    /// Whether the error is a table or image extent violation
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(
            self,
            Self::OutOfBounds { .. }
                | Self::IndexOutOfRange { .. }
                | Self::ParAddressOverflow { .. }
        )
    }
}

/// Failure of a single hole swap
///
/// The variant tells the caller how much of the swap reached the image.
#[derive(Error, Debug)]
pub enum SwapError {
    /// Geometry records could not be exchanged; the image is unmodified
    #[error("cannot swap geometry of holes {unit_a} and {unit_b}: {source}")]
    Geometry {
        /// First hole
        unit_a: usize,
        /// Second hole
        unit_b: usize,
        /// Underlying table error
        #[source]
        source: RomError,
    },

    /// Geometry was exchanged but the par bytes were not
    ///
    /// The image is inconsistent for this pair: each hole's geometry now
    /// belongs to the other hole while its par byte does not.
    #[error("holes {unit_a} and {unit_b} swapped geometry but not par: {source}")]
    ParFailed {
        /// First hole
        unit_a: usize,
        /// Second hole
        unit_b: usize,
        /// Underlying par table error
        #[source]
        source: RomError,
    },
}

impl SwapError {
    /// State the swap stopped in
    pub const fn state(&self) -> SwapState {
        match self {
            Self::Geometry { .. } => SwapState::Start,
            Self::ParFailed { .. } => SwapState::ParFailed,
        }
    }

    /// Whether the image was modified before the failure
    pub const fn image_modified(&self) -> bool {
        matches!(self, Self::ParFailed { .. })
    }
}

/// Type alias for table operation results
pub type Result<T> = std::result::Result<T, RomError>;
