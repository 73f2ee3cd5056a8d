//! Fixed table locations inside the ROM
//!
//! The layout is plain configuration: tables are constructed from it and
//! never hard-code addresses themselves, which lets tests run the same code
//! against small synthetic images.

use crate::geometry::COMPONENTS_PER_HOLE;
use crate::par::{PAR_TABLE_LEN, ParTable};
use crate::resource::{ENTRY_SIZE, ResourceTable};

/// Addresses of the resource and par tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RomLayout {
    /// First byte of the resource table
    pub resource_table_start: usize,
    /// Exclusive end of the resource table
    pub resource_table_end: usize,
    /// Base address of the par table
    pub par_table_base: usize,
}

impl RomLayout {
    /// Layout of the retail Mario Golf 64 ROM (big-endian `.z64`)
    pub const MARIO_GOLF_64: Self = Self {
        resource_table_start: 0xE473F0,
        resource_table_end: 0xE493A8,
        par_table_base: 0x9C800,
    };

    /// Resource table view for this layout
    pub const fn resource_table(&self) -> ResourceTable {
        ResourceTable::new(self.resource_table_start, self.resource_table_end)
    }

    /// Par table view for this layout
    pub const fn par_table(&self) -> ParTable {
        ParTable::new(self.par_table_base)
    }

    /// Number of whole entries the resource table holds
    pub const fn resource_entry_count(&self) -> usize {
        self.resource_table_end.saturating_sub(self.resource_table_start) / ENTRY_SIZE
    }

    /// Number of holes whose seven records fit in the resource table
    pub const fn hole_capacity(&self) -> usize {
        self.resource_entry_count() / COMPONENTS_PER_HOLE
    }

    /// Smallest image length that contains both tables
    pub const fn required_len(&self) -> usize {
        let par_end = self.par_table_base.saturating_add(PAR_TABLE_LEN);
        if par_end > self.resource_table_end {
            par_end
        } else {
            self.resource_table_end
        }
    }
}

impl Default for RomLayout {
    fn default() -> Self {
        Self::MARIO_GOLF_64
    }
}
