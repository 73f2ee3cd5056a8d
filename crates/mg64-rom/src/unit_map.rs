//! Global hole index to par table coordinate
//!
//! The resource table numbers holes in the game's internal data order, which
//! interleaves courses (index 1 is Toad Highlands hole 8, index 40 is Koopa
//! Park hole 3, ...). The par table is ordered by course group and hole
//! number instead. Groups follow the in-game course order:
//!
//! | Group | Course |
//! |-------|--------|
//! | 0 | Toad Highlands |
//! | 1 | Koopa Park |
//! | 2 | Shy Guy Desert |
//! | 3 | Yoshi's Island |
//! | 4 | Boo Valley |
//! | 5 | Mario's Star |
//!
//! Holes 108 and up (Luigi's Garden, Peach's Castle, the intro preview) have
//! no par entry.

use crate::error::{Result, RomError};
use crate::par::ParCoordinate;

/// Number of holes with a par coordinate
pub const MAPPED_UNITS: usize = 108;

const fn c(group: u8, unit: u8) -> ParCoordinate {
    ParCoordinate::new(group, unit)
}

#[rustfmt::skip]
static MARIO_GOLF_64_COORDINATES: [ParCoordinate; MAPPED_UNITS] = [
    c(1,  0), c(0,  7), c(0,  4), c(1,  3), c(1,  4), c(1,  5), // 0..5
    c(1,  6), c(1,  7), c(1,  8), c(1,  9), c(1, 10), c(1, 11), // 6..11
    c(1, 12), c(1, 13), c(1, 14), c(1, 15), c(1, 16), c(1, 17), // 12..17
    c(4,  0), c(4,  1), c(4,  2), c(4,  3), c(4,  4), c(4,  5), // 18..23
    c(4,  6), c(4,  7), c(4,  8), c(4,  9), c(4, 10), c(4, 11), // 24..29
    c(4, 12), c(4, 13), c(4, 14), c(4, 15), c(4, 16), c(4, 17), // 30..35
    c(0,  0), c(0, 12), c(0,  2), c(0, 15), c(1,  2), c(0,  5), // 36..41
    c(0,  6), c(1,  1), c(0,  8), c(0,  9), c(0, 10), c(0, 11), // 42..47
    c(0,  1), c(0, 13), c(0, 14), c(0,  3), c(0, 16), c(0, 17), // 48..53
    c(2, 17), c(2,  3), c(2, 10), c(2, 15), c(2,  0), c(2,  9), // 54..59
    c(2,  5), c(2,  4), c(2,  1), c(2,  6), c(2, 11), c(2, 14), // 60..65
    c(2,  2), c(2, 13), c(2, 16), c(2,  8), c(2, 12), c(2,  7), // 66..71
    c(3,  0), c(3,  1), c(3,  2), c(3,  3), c(3,  4), c(3,  5), // 72..77
    c(3,  6), c(3,  7), c(3,  8), c(3,  9), c(3, 10), c(3, 11), // 78..83
    c(3, 12), c(3, 13), c(3, 14), c(3, 15), c(3, 16), c(3, 17), // 84..89
    c(5, 10), c(5,  8), c(5,  0), c(5,  3), c(5, 13), c(5,  6), // 90..95
    c(5, 12), c(5,  4), c(5, 14), c(5,  7), c(5, 11), c(5,  2), // 96..101
    c(5,  5), c(5, 16), c(5, 15), c(5,  9), c(5,  1), c(5, 17), // 102..107
];

/// Read-only mapping from global hole index to par coordinate
///
/// Indices past the end of the mapping have no par entry. An empty map turns
/// every swap into a geometry-only swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitIndexMap {
    coordinates: &'static [ParCoordinate],
}

impl UnitIndexMap {
    /// Mapping of the retail game
    pub const fn mario_golf_64() -> Self {
        Self::from_static(&MARIO_GOLF_64_COORDINATES)
    }

    /// Mapping without any par coordinates
    pub const fn empty() -> Self {
        Self::from_static(&[])
    }

    /// Mapping backed by `coordinates`, indexed by global hole index
    pub const fn from_static(coordinates: &'static [ParCoordinate]) -> Self {
        Self { coordinates }
    }

    /// Number of mapped holes
    pub const fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Whether no hole is mapped
    pub const fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Par coordinate of `unit`
    pub fn to_coordinate(&self, unit: usize) -> Result<ParCoordinate> {
        self.coordinates
            .get(unit)
            .copied()
            .ok_or(RomError::UnknownUnit(unit))
    }

    /// Global hole index stored at `coordinate`
    pub fn to_unit(&self, coordinate: ParCoordinate) -> Option<usize> {
        self.coordinates.iter().position(|c| *c == coordinate)
    }

    /// Whether `unit` has a par coordinate
    pub fn contains(&self, unit: usize) -> bool {
        unit < self.coordinates.len()
    }
}

impl Default for UnitIndexMap {
    fn default() -> Self {
        Self::mario_golf_64()
    }
}
