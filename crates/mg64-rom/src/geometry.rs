//! Per-hole grouping of resource table records
//!
//! Every hole owns seven consecutive resource entries, starting at
//! `hole * 7`. Exchanging two holes' geometry swaps those seven entries
//! component by component.

use crate::error::Result;
use crate::image::RomImage;
use crate::resource::{ResourceEntry, ResourceTable};
use std::ops::Range;

/// Resource entries owned by one hole
pub const COMPONENTS_PER_HOLE: usize = 7;

/// Geometry records of holes, grouped over a resource table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleGeometry {
    table: ResourceTable,
}

impl HoleGeometry {
    /// Group the entries of `table` by hole
    pub const fn new(table: ResourceTable) -> Self {
        Self { table }
    }

    /// Underlying resource table
    pub const fn table(&self) -> ResourceTable {
        self.table
    }

    /// Resource entry indices owned by `hole`
    ///
    /// Saturates instead of overflowing; out-of-table indices are caught by
    /// the resource table itself.
    pub const fn entry_range(hole: usize) -> Range<usize> {
        let start = hole.saturating_mul(COMPONENTS_PER_HOLE);
        start..start.saturating_add(COMPONENTS_PER_HOLE)
    }

    /// Read all seven records of `hole`
    pub fn read_records(
        &self,
        image: &RomImage,
        hole: usize,
    ) -> Result<[ResourceEntry; COMPONENTS_PER_HOLE]> {
        let mut records = [ResourceEntry::default(); COMPONENTS_PER_HOLE];
        for (record, index) in records.iter_mut().zip(Self::entry_range(hole)) {
            *record = self.table.read_entry(image, index)?;
        }
        Ok(records)
    }

    /// Write all seven records of `hole`
    pub fn write_records(
        &self,
        image: &mut RomImage,
        hole: usize,
        records: &[ResourceEntry; COMPONENTS_PER_HOLE],
    ) -> Result<()> {
        for (record, index) in records.iter().zip(Self::entry_range(hole)) {
            self.table.write_entry(image, index, *record)?;
        }
        Ok(())
    }

    /// Check that every record of `hole` is addressable and readable
    pub fn validate(&self, image: &RomImage, hole: usize) -> Result<()> {
        self.read_records(image, hole).map(|_| ())
    }

    /// Exchange the geometry of holes `a` and `b`
    ///
    /// Components are swapped in order. The first failing component aborts
    /// the operation; components before it stay swapped.
    pub fn swap_groups(&self, image: &mut RomImage, a: usize, b: usize) -> Result<()> {
        for (entry_a, entry_b) in Self::entry_range(a).zip(Self::entry_range(b)) {
            self.table.swap_entries(image, entry_a, entry_b)?;
        }
        Ok(())
    }
}
