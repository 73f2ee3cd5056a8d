//! Hole swapping across the resource and par tables
//!
//! A swap moves through these states:
//!
//! ```text
//! Start ──geometry──▶ GeometrySwapped ──par──▶ ParSwapped
//!   │                        │
//!   └─ geometry error        ├─ no par coordinate: stop here (geometry-only)
//!      (image untouched)     └─ par error ──▶ ParFailed (geometry kept)
//! ```
//!
//! Geometry is never rolled back. A `ParFailed` swap leaves the pair
//! inconsistent and is reported to the caller as [`SwapError::ParFailed`].

use crate::error::{RomError, SwapError};
use crate::geometry::HoleGeometry;
use crate::image::RomImage;
use crate::layout::RomLayout;
use crate::par::{ParCoordinate, ParTable};
use crate::unit_map::UnitIndexMap;
use std::fmt;
use tracing::{info, warn};

/// Where a swap ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapState {
    /// Nothing was written
    Start,
    /// Geometry exchanged, par untouched
    GeometrySwapped,
    /// Geometry and par exchanged
    ParSwapped,
    /// Geometry exchanged, par exchange failed
    ParFailed,
}

impl fmt::Display for SwapState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::GeometrySwapped => "geometry swapped",
            Self::ParSwapped => "par swapped",
            Self::ParFailed => "par failed",
        };
        f.write_str(name)
    }
}

/// Successful result of [`SwapEngine::swap_units`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapOutcome {
    /// Both indices were the same hole; nothing was written
    Unchanged {
        /// The hole
        unit: usize,
    },
    /// Geometry exchanged; one of the holes has no par coordinate
    GeometryOnly {
        /// First hole
        unit_a: usize,
        /// Second hole
        unit_b: usize,
        /// Hole that has no par coordinate
        unmapped: usize,
    },
    /// Geometry and par exchanged
    Swapped {
        /// First hole
        unit_a: usize,
        /// Second hole
        unit_b: usize,
        /// Par coordinate of the first hole
        par_a: ParCoordinate,
        /// Par coordinate of the second hole
        par_b: ParCoordinate,
    },
}

impl SwapOutcome {
    /// Final state of the swap
    pub const fn state(&self) -> SwapState {
        match self {
            Self::Unchanged { .. } => SwapState::Start,
            Self::GeometryOnly { .. } => SwapState::GeometrySwapped,
            Self::Swapped { .. } => SwapState::ParSwapped,
        }
    }

    /// Whether geometry was exchanged without par
    pub const fn is_geometry_only(&self) -> bool {
        matches!(self, Self::GeometryOnly { .. })
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unchanged { unit } => write!(f, "hole {unit} kept"),
            Self::GeometryOnly {
                unit_a,
                unit_b,
                unmapped,
            } => write!(
                f,
                "holes {unit_a} and {unit_b} swapped geometry only (hole {unmapped} has no par entry)"
            ),
            Self::Swapped {
                unit_a,
                unit_b,
                par_a,
                par_b,
            } => write!(
                f,
                "holes {unit_a} and {unit_b} swapped (par {par_a} <-> {par_b})"
            ),
        }
    }
}

/// One applied pair of a batch
#[derive(Debug)]
pub struct BatchEntry {
    /// 1-based position in the batch
    pub ordinal: usize,
    /// Hole being replaced
    pub target: usize,
    /// Hole moved into the target's slot
    pub replacement: usize,
    /// Result of the swap
    pub result: Result<SwapOutcome, SwapError>,
}

/// Results of [`SwapEngine::apply_plan`], in application order
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One entry per requested pair
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    /// Entries whose swap failed
    pub fn failures(&self) -> impl Iterator<Item = &BatchEntry> {
        self.entries.iter().filter(|entry| entry.result.is_err())
    }

    /// Number of failed swaps
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// Number of geometry-only swaps
    pub fn geometry_only_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(&entry.result, Ok(outcome) if outcome.is_geometry_only()))
            .count()
    }

    /// Whether every swap succeeded (geometry-only counts as success)
    pub fn is_clean(&self) -> bool {
        self.failure_count() == 0
    }
}

/// Applies hole swaps to an owned ROM image
#[derive(Debug)]
pub struct SwapEngine {
    image: RomImage,
    geometry: HoleGeometry,
    par: ParTable,
    units: UnitIndexMap,
}

impl SwapEngine {
    /// Take ownership of `image` for a swap session
    ///
    /// Pass [`UnitIndexMap::empty`] to swap geometry only.
    pub const fn new(image: RomImage, layout: RomLayout, units: UnitIndexMap) -> Self {
        Self {
            image,
            geometry: HoleGeometry::new(layout.resource_table()),
            par: layout.par_table(),
            units,
        }
    }

    /// Current image
    pub const fn image(&self) -> &RomImage {
        &self.image
    }

    /// End the session and give the image back
    pub fn into_image(self) -> RomImage {
        self.image
    }

    /// Geometry view used by this engine
    pub const fn geometry(&self) -> HoleGeometry {
        self.geometry
    }

    /// Par table used by this engine
    pub const fn par_table(&self) -> ParTable {
        self.par
    }

    /// Coordinate map used by this engine
    pub const fn units(&self) -> UnitIndexMap {
        self.units
    }

    /// Exchange the geometry and, where both holes have one, the par value
    /// of holes `a` and `b`
    pub fn swap_units(&mut self, a: usize, b: usize) -> Result<SwapOutcome, SwapError> {
        if a == b {
            return Ok(SwapOutcome::Unchanged { unit: a });
        }

        let geometry_error = |source: RomError| SwapError::Geometry {
            unit_a: a,
            unit_b: b,
            source,
        };

        // Check both holes up front so a bad index never leaves the
        // geometry half-swapped.
        self.geometry
            .validate(&self.image, a)
            .map_err(geometry_error)?;
        self.geometry
            .validate(&self.image, b)
            .map_err(geometry_error)?;
        self.geometry
            .swap_groups(&mut self.image, a, b)
            .map_err(geometry_error)?;

        let (par_a, par_b) = match (self.units.to_coordinate(a), self.units.to_coordinate(b)) {
            (Ok(par_a), Ok(par_b)) => (par_a, par_b),
            (Err(_), _) | (_, Err(_)) => {
                let unmapped = if self.units.contains(a) { b } else { a };
                warn!(a, b, unmapped, "no par coordinate, swapped geometry only");
                return Ok(SwapOutcome::GeometryOnly {
                    unit_a: a,
                    unit_b: b,
                    unmapped,
                });
            }
        };

        if let Err(source) = self.par.swap_par(&mut self.image, par_a, par_b) {
            warn!(a, b, %source, "par swap failed after geometry swap");
            return Err(SwapError::ParFailed {
                unit_a: a,
                unit_b: b,
                source,
            });
        }

        info!(a, b, %par_a, %par_b, "swapped holes");
        Ok(SwapOutcome::Swapped {
            unit_a: a,
            unit_b: b,
            par_a,
            par_b,
        })
    }

    /// Apply `(target, replacement)` pairs strictly in order
    ///
    /// Every pair is attempted; a failed pair does not stop later ones.
    pub fn apply_plan<I>(&mut self, pairs: I) -> BatchReport
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let entries = pairs
            .into_iter()
            .enumerate()
            .map(|(position, (target, replacement))| BatchEntry {
                ordinal: position + 1,
                target,
                replacement,
                result: self.swap_units(target, replacement),
            })
            .collect();

        BatchReport { entries }
    }
}
