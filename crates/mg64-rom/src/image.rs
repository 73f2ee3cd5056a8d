//! Owned, bounds-checked ROM byte buffer
//!
//! All accesses are checked before any byte is touched, so a failed write
//! leaves the image exactly as it was.

use crate::error::{Result, RomError};
use std::ops::Range;

/// Mutable in-memory copy of a ROM image
#[derive(Clone, PartialEq, Eq)]
pub struct RomImage {
    data: Vec<u8>,
}

impl RomImage {
    /// Wrap raw ROM bytes
    pub const fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Zero-filled image of `len` bytes
    pub fn zeroed(len: usize) -> Self {
        Self::new(vec![0; len])
    }

    /// Image length in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the image holds no bytes
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Give back the raw bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    fn range(&self, offset: usize, width: usize) -> Result<Range<usize>> {
        let out_of_bounds = || RomError::OutOfBounds {
            offset,
            width,
            len: self.data.len(),
        };

        let end = offset.checked_add(width).ok_or_else(out_of_bounds)?;
        if end > self.data.len() {
            return Err(out_of_bounds());
        }
        Ok(offset..end)
    }

    /// Borrow `width` bytes starting at `offset`
    pub fn read_bytes(&self, offset: usize, width: usize) -> Result<&[u8]> {
        let range = self.range(offset, width)?;
        Ok(&self.data[range])
    }

    /// Overwrite `bytes.len()` bytes starting at `offset`
    pub fn write_bytes(&mut self, offset: usize, bytes: &[u8]) -> Result<()> {
        let range = self.range(offset, bytes.len())?;
        self.data[range].copy_from_slice(bytes);
        Ok(())
    }

    /// Read a single byte
    pub fn read_u8(&self, offset: usize) -> Result<u8> {
        Ok(self.read_bytes(offset, 1)?[0])
    }

    /// Write a single byte
    pub fn write_u8(&mut self, offset: usize, value: u8) -> Result<()> {
        self.write_bytes(offset, &[value])
    }

    /// Read a big-endian `u32`
    pub fn read_u32_be(&self, offset: usize) -> Result<u32> {
        let bytes = self.read_bytes(offset, 4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Write a big-endian `u32`
    pub fn write_u32_be(&mut self, offset: usize, value: u32) -> Result<()> {
        self.write_bytes(offset, &value.to_be_bytes())
    }
}

impl From<Vec<u8>> for RomImage {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl AsRef<[u8]> for RomImage {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

// Images are tens of megabytes; never dump the buffer.
impl std::fmt::Debug for RomImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RomImage")
            .field("len", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u32_big_endian_layout() {
        let mut image = RomImage::zeroed(8);
        image.write_u32_be(2, 0x0102_0304).unwrap();

        assert_eq!(image.as_bytes(), &[0, 0, 1, 2, 3, 4, 0, 0]);
        assert_eq!(image.read_u32_be(2).unwrap(), 0x0102_0304);
    }

    #[test]
    fn test_last_valid_offsets() {
        let mut image = RomImage::zeroed(8);
        image.write_u32_be(4, u32::MAX).unwrap();
        image.write_u8(7, 9).unwrap();

        assert_eq!(image.read_u8(7).unwrap(), 9);
        assert_eq!(image.read_u32_be(4).unwrap(), 0xFFFF_FF09);
    }

    #[test]
    fn test_out_of_bounds_read() {
        let image = RomImage::zeroed(8);

        let err = image.read_u32_be(5).unwrap_err();
        assert!(matches!(
            err,
            RomError::OutOfBounds {
                offset: 5,
                width: 4,
                len: 8
            }
        ));
        assert!(image.read_u8(8).is_err());
    }

    #[test]
    fn test_failed_write_leaves_image_untouched() {
        let mut image = RomImage::new(vec![0xAA; 6]);

        assert!(image.write_u32_be(3, 0x1122_3344).is_err());
        assert!(image.write_u8(6, 1).is_err());
        assert_eq!(image.as_bytes(), &[0xAA; 6]);
    }

    #[test]
    fn test_offset_overflow_is_out_of_bounds() {
        let image = RomImage::zeroed(4);
        let err = image.read_bytes(usize::MAX, 2).unwrap_err();
        assert!(err.is_out_of_bounds());
    }

    #[test]
    fn test_debug_does_not_dump_bytes() {
        let image = RomImage::zeroed(16);
        assert_eq!(format!("{image:?}"), "RomImage { len: 16 }");
    }
}
