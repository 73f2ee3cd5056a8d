//! Binary record editing for Mario Golf 64 ROM images.
//!
//! Each hole of the game is described by two independent tables inside the
//! ROM:
//!
//! - **Resource table**: seven consecutive 8-byte `(length, offset)` records
//!   per hole, pointing at the hole's geometry blocks.
//! - **Par table**: one byte per hole, addressed by a `(group, unit)`
//!   coordinate that does not follow the resource table's hole numbering.
//!
//! Relocating a hole means exchanging its records in both tables while keeping
//! them consistent with each other. [`SwapEngine`] does that for pairs of
//! holes, using [`UnitIndexMap`] to translate a hole's global index into its
//! par coordinate.
//!
//! # Example
//!
//! ```no_run
//! use mg64_rom::{RomImage, RomLayout, SwapEngine, UnitIndexMap};
//!
//! # fn example(bytes: Vec<u8>) -> Result<(), mg64_rom::SwapError> {
//! let image = RomImage::new(bytes);
//! let mut engine = SwapEngine::new(image, RomLayout::MARIO_GOLF_64, UnitIndexMap::mario_golf_64());
//!
//! // Koopa Park hole 1 <-> Toad Highlands hole 1
//! let outcome = engine.swap_units(0, 36)?;
//! println!("{outcome}");
//!
//! let bytes = engine.into_image().into_bytes();
//! # let _ = bytes;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod catalog;
pub mod error;
pub mod geometry;
pub mod image;
pub mod layout;
pub mod par;
pub mod resource;
pub mod swap;
pub mod unit_map;

pub use catalog::{Course, HoleCatalog, HoleInfo};
pub use error::{Result, RomError, SwapError};
pub use geometry::{COMPONENTS_PER_HOLE, HoleGeometry};
pub use image::RomImage;
pub use layout::RomLayout;
pub use par::{ParCoordinate, ParTable, ParValue};
pub use resource::{ENTRY_SIZE, ResourceEntry, ResourceTable};
pub use swap::{BatchEntry, BatchReport, SwapEngine, SwapOutcome, SwapState};
pub use unit_map::UnitIndexMap;
