//! Par table: one difficulty byte per hole
//!
//! The table is laid out per course group rather than per global hole index:
//!
//! ```text
//! address = base + 20 + 200 * group + 10 * unit
//! ```
//!
//! Only the first byte of each 10-byte unit slot is the par value; the rest
//! of the slot is left alone.

use crate::error::{Result, RomError};
use crate::image::RomImage;
use std::fmt;
use tracing::debug;

/// Number of course groups with par entries
pub const PAR_GROUPS: u8 = 6;

/// Holes per course group
pub const PAR_UNITS_PER_GROUP: u8 = 18;

/// Offset of the first group from the table base
pub const PAR_HEADER_SIZE: usize = 20;

/// Distance between consecutive groups
pub const PAR_GROUP_STRIDE: usize = 200;

/// Distance between consecutive units within a group
pub const PAR_UNIT_STRIDE: usize = 10;

/// Bytes from the table base through the last par byte
pub const PAR_TABLE_LEN: usize = PAR_HEADER_SIZE
    + PAR_GROUP_STRIDE * (PAR_GROUPS as usize - 1)
    + PAR_UNIT_STRIDE * (PAR_UNITS_PER_GROUP as usize - 1)
    + 1;

/// `(group, unit)` coordinate of a par entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParCoordinate {
    /// Course group, `0..6`
    pub group: u8,
    /// Hole within the group, `0..18`
    pub unit: u8,
}

impl ParCoordinate {
    /// Create a new coordinate
    pub const fn new(group: u8, unit: u8) -> Self {
        Self { group, unit }
    }

    /// Whether the coordinate names a slot inside the table
    pub const fn is_valid(&self) -> bool {
        self.group < PAR_GROUPS && self.unit < PAR_UNITS_PER_GROUP
    }
}

impl fmt::Display for ParCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.group, self.unit)
    }
}

/// Valid par value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ParValue {
    /// Par 3
    Three = 3,
    /// Par 4
    Four = 4,
    /// Par 5
    Five = 5,
}

impl ParValue {
    /// Raw byte stored in the table
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    /// Parse a raw byte, `None` outside `{3, 4, 5}`
    pub const fn from_byte(value: u8) -> Option<Self> {
        match value {
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            5 => Some(Self::Five),
            _ => None,
        }
    }
}

impl From<ParValue> for u8 {
    fn from(value: ParValue) -> Self {
        value.as_byte()
    }
}

impl fmt::Display for ParValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "par {}", self.as_byte())
    }
}

/// View of the par table inside an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParTable {
    base: usize,
}

impl ParTable {
    /// Table rooted at `base`
    pub const fn new(base: usize) -> Self {
        Self { base }
    }

    /// Base address of the table
    pub const fn base(&self) -> usize {
        self.base
    }

    /// Address of the par byte for `coordinate`
    ///
    /// Coordinates outside `6 x 18` are rejected rather than aliased onto a
    /// neighbouring group's slot.
    pub fn address(&self, coordinate: ParCoordinate) -> Result<usize> {
        if !coordinate.is_valid() {
            return Err(RomError::InvalidParCoordinate(coordinate));
        }

        let offset = PAR_HEADER_SIZE
            + PAR_GROUP_STRIDE * usize::from(coordinate.group)
            + PAR_UNIT_STRIDE * usize::from(coordinate.unit);
        self.base
            .checked_add(offset)
            .ok_or(RomError::ParAddressOverflow {
                base: self.base,
                coordinate,
            })
    }

    /// Read the raw par byte at `coordinate`
    ///
    /// The byte is returned as stored, even if it is not a valid par value.
    pub fn read_par(&self, image: &RomImage, coordinate: ParCoordinate) -> Result<u8> {
        image.read_u8(self.address(coordinate)?)
    }

    /// Write a par value given as a raw byte
    ///
    /// Values outside `{3, 4, 5}` are rejected before anything is written.
    pub fn write_par(
        &self,
        image: &mut RomImage,
        coordinate: ParCoordinate,
        value: u8,
    ) -> Result<()> {
        let address = self.address(coordinate)?;
        let par =
            ParValue::from_byte(value).ok_or(RomError::InvalidParValue { value, address })?;
        self.write_value(image, coordinate, par)
    }

    /// Write a validated par value
    pub fn write_value(
        &self,
        image: &mut RomImage,
        coordinate: ParCoordinate,
        value: ParValue,
    ) -> Result<()> {
        image.write_u8(self.address(coordinate)?, value.as_byte())
    }

    /// Read and validate the par value at `coordinate`
    pub fn read_value(&self, image: &RomImage, coordinate: ParCoordinate) -> Result<ParValue> {
        let address = self.address(coordinate)?;
        let value = image.read_u8(address)?;
        ParValue::from_byte(value).ok_or(RomError::InvalidParValue { value, address })
    }

    /// Exchange the par values at `a` and `b`
    ///
    /// Both values are read and validated before either is written, so the
    /// table is never left half-swapped.
    pub fn swap_par(
        &self,
        image: &mut RomImage,
        a: ParCoordinate,
        b: ParCoordinate,
    ) -> Result<()> {
        let par_a = self.read_value(image, a)?;
        let par_b = self.read_value(image, b)?;

        self.write_value(image, a, par_b)?;
        self.write_value(image, b, par_a)?;

        debug!(%a, %b, %par_a, %par_b, "swapped par values");
        Ok(())
    }
}
