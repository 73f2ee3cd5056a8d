//! Resource table: fixed-stride `(length, offset)` records
//!
//! Binary layout of one entry (8 bytes, big-endian):
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0x00   | 4    | Data length |
//! | 0x04   | 4    | Data offset |
//!
//! Entry `i` lives at `start + i * 8` and is valid while that address is
//! below the table end. Length and offset are opaque here; the table never
//! interprets what they point at.

use crate::error::{Result, RomError};
use crate::image::RomImage;
use binrw::{BinRead, BinWrite};
use std::io::Cursor;
use tracing::debug;

/// Size of one resource entry in bytes
pub const ENTRY_SIZE: usize = 8;

/// One resource table record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, BinRead, BinWrite)]
#[brw(big)]
pub struct ResourceEntry {
    /// Length of the referenced data block
    pub data_length: u32,
    /// ROM offset of the referenced data block
    pub data_offset: u32,
}

impl ResourceEntry {
    /// Create a new entry
    pub const fn new(data_length: u32, data_offset: u32) -> Self {
        Self {
            data_length,
            data_offset,
        }
    }

    /// Decode an entry from exactly [`ENTRY_SIZE`] bytes
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(bytes);
        Ok(Self::read(&mut cursor)?)
    }

    /// Encode the entry
    pub fn build(&self) -> Result<[u8; ENTRY_SIZE]> {
        let mut out = [0u8; ENTRY_SIZE];
        let mut cursor = Cursor::new(&mut out[..]);
        self.write(&mut cursor)?;
        Ok(out)
    }
}

/// View of the resource table inside an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceTable {
    start: usize,
    end: usize,
}

impl ResourceTable {
    /// Table covering `[start, end)`
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// First byte of the table
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Exclusive end of the table
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Address of entry `index`
    ///
    /// Fails with [`RomError::IndexOutOfRange`] when the address is at or past
    /// the table end.
    pub fn address(&self, index: usize) -> Result<usize> {
        let address = index
            .checked_mul(ENTRY_SIZE)
            .and_then(|rel| rel.checked_add(self.start));

        match address {
            Some(address) if address < self.end => Ok(address),
            _ => Err(RomError::IndexOutOfRange {
                index,
                address: address.unwrap_or(usize::MAX),
                table_end: self.end,
            }),
        }
    }

    /// Read entry `index`
    pub fn read_entry(&self, image: &RomImage, index: usize) -> Result<ResourceEntry> {
        let address = self.address(index)?;
        ResourceEntry::parse(image.read_bytes(address, ENTRY_SIZE)?)
    }

    /// Write entry `index`; both fields land or neither does
    pub fn write_entry(
        &self,
        image: &mut RomImage,
        index: usize,
        entry: ResourceEntry,
    ) -> Result<()> {
        let address = self.address(index)?;
        image.write_bytes(address, &entry.build()?)
    }

    /// Exchange entries `a` and `b`
    ///
    /// Both entries are read before either is written, so a failure leaves
    /// the table untouched. `a == b` round-trips the entry unchanged.
    pub fn swap_entries(&self, image: &mut RomImage, a: usize, b: usize) -> Result<()> {
        let entry_a = self.read_entry(image, a)?;
        let entry_b = self.read_entry(image, b)?;

        self.write_entry(image, a, entry_b)?;
        self.write_entry(image, b, entry_a)?;

        debug!(a, b, ?entry_a, ?entry_b, "swapped resource entries");
        Ok(())
    }
}
