//! Command runs against a synthetic ROM image laid out like the retail one.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use clap::Parser;
use mg64_rom::{
    COMPONENTS_PER_HOLE, HoleGeometry, ResourceEntry, RomImage, RomLayout, UnitIndexMap,
};
use mg64_swapper::{SwapperConfig, SwapperError, load_image, persist_image, run};
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const LAYOUT: RomLayout = RomLayout::MARIO_GOLF_64;

fn par_of(unit: usize) -> u8 {
    3 + (unit % 3) as u8
}

fn synthetic_rom(dir: &TempDir) -> PathBuf {
    let mut image = RomImage::zeroed(LAYOUT.required_len());
    let geometry = HoleGeometry::new(LAYOUT.resource_table());
    for unit in 0..LAYOUT.hole_capacity() {
        let records: [ResourceEntry; COMPONENTS_PER_HOLE] = std::array::from_fn(|component| {
            ResourceEntry::new(unit as u32 + 1, (unit * 0x100 + component) as u32)
        });
        geometry.write_records(&mut image, unit, &records).unwrap();
    }

    let units = UnitIndexMap::mario_golf_64();
    for unit in 0..units.len() {
        LAYOUT
            .par_table()
            .write_par(&mut image, units.to_coordinate(unit).unwrap(), par_of(unit))
            .unwrap();
    }

    let path = dir.path().join("baserom.z64");
    persist_image(&image, &path).unwrap();
    path
}

fn run_args(args: &[&str]) -> (Result<(), SwapperError>, String) {
    let config = SwapperConfig::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    let result = run(config, &mut out);
    (result, String::from_utf8(out).unwrap())
}

fn unit_state(path: &Path, unit: usize) -> (u32, u8) {
    let image = load_image(path).unwrap();
    let geometry = HoleGeometry::new(LAYOUT.resource_table());
    let records = geometry.read_records(&image, unit).unwrap();
    let coordinate = UnitIndexMap::mario_golf_64().to_coordinate(unit).unwrap();
    let par = LAYOUT.par_table().read_par(&image, coordinate).unwrap();
    (records[0].data_length, par)
}

#[test]
fn custom_course_moves_geometry_and_par() {
    let dir = TempDir::new().unwrap();
    let rom = synthetic_rom(&dir);
    let output = dir.path().join("custom.z64");

    let (result, text) = run_args(&[
        "mg64-swapper",
        "--rom",
        rom.to_str().unwrap(),
        "custom",
        "--hole",
        "1=Koopa Park:3",
        "-o",
        output.to_str().unwrap(),
    ]);
    result.unwrap();

    assert!(text.contains("Hole  1: Toad Highlands Hole 1 -> Koopa Park Hole 3"));
    // Toad Highlands 1 is index 36, Koopa Park 3 is index 40
    assert_eq!(unit_state(&output, 36), (41, par_of(40)));
    assert_eq!(unit_state(&output, 40), (37, par_of(36)));
    assert_eq!(unit_state(&output, 0), (1, par_of(0)));

    // Source ROM is left alone
    assert_eq!(unit_state(&rom, 36), (37, par_of(36)));
}

#[test]
fn seeded_random_course_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let rom = synthetic_rom(&dir);
    let first = dir.path().join("first.z64");
    let second = dir.path().join("second.z64");

    for output in [&first, &second] {
        let (result, text) = run_args(&[
            "mg64-swapper",
            "--rom",
            rom.to_str().unwrap(),
            "random",
            "--holes",
            "9",
            "--seed",
            "1234",
            "--output",
            output.to_str().unwrap(),
        ]);
        result.unwrap();
        assert!(text.contains("seed 1234"));
        assert_eq!(text.lines().filter(|line| line.contains("Hole ")).count(), 9);
    }

    assert_eq!(
        load_image(&first).unwrap(),
        load_image(&second).unwrap()
    );
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let rom = synthetic_rom(&dir);
    let output = dir.path().join("never.z64");

    let (result, text) = run_args(&[
        "mg64-swapper",
        "--rom",
        rom.to_str().unwrap(),
        "swap",
        "0",
        "36",
        "--dry-run",
        "-o",
        output.to_str().unwrap(),
    ]);
    result.unwrap();

    assert!(text.contains("Dry run"));
    assert!(!output.exists());
}

#[test]
fn geometry_only_keeps_par_values() {
    let dir = TempDir::new().unwrap();
    let rom = synthetic_rom(&dir);
    let output = dir.path().join("geometry.z64");

    let (result, text) = run_args(&[
        "mg64-swapper",
        "--rom",
        rom.to_str().unwrap(),
        "swap",
        "0",
        "1",
        "--geometry-only",
        "-o",
        output.to_str().unwrap(),
    ]);
    result.unwrap();

    assert!(text.contains("1 swap(s) moved geometry without par"));
    assert_eq!(unit_state(&output, 0), (2, par_of(0)));
    assert_eq!(unit_state(&output, 1), (1, par_of(1)));
}

#[test]
fn failed_swap_is_not_saved() {
    let dir = TempDir::new().unwrap();
    let rom = synthetic_rom(&dir);
    let output = dir.path().join("broken.z64");

    let (result, text) = run_args(&[
        "mg64-swapper",
        "--rom",
        rom.to_str().unwrap(),
        "swap",
        "0",
        "145",
        "-o",
        output.to_str().unwrap(),
    ]);

    assert!(matches!(result, Err(SwapperError::BatchFailed { failed: 1 })));
    assert!(text.contains("FAILED"));
    assert!(!output.exists());
}

#[test]
fn par_failure_after_geometry_swap_is_not_saved() {
    let dir = TempDir::new().unwrap();
    let rom = synthetic_rom(&dir);
    let output = dir.path().join("out.z64");

    let mut image = load_image(&rom).unwrap();
    let coordinate = UnitIndexMap::mario_golf_64().to_coordinate(0).unwrap();
    let address = LAYOUT.par_table().address(coordinate).unwrap();
    image.write_u8(address, 9).unwrap();
    persist_image(&image, &rom).unwrap();

    let (result, text) = run_args(&[
        "mg64-swapper",
        "--rom",
        rom.to_str().unwrap(),
        "swap",
        "0",
        "36",
        "-o",
        output.to_str().unwrap(),
    ]);

    assert!(matches!(result, Err(SwapperError::BatchFailed { failed: 1 })));
    assert!(text.contains("FAILED"));
    assert!(text.contains("[par failed]"));
    assert!(!output.exists());
    // Source ROM still has its own geometry
    assert_eq!(load_image(&rom).unwrap(), image);
}

#[test]
fn custom_course_refuses_preview_hole() {
    let dir = TempDir::new().unwrap();
    let rom = synthetic_rom(&dir);
    let output = dir.path().join("custom.z64");

    let (result, _) = run_args(&[
        "mg64-swapper",
        "--rom",
        rom.to_str().unwrap(),
        "custom",
        "--hole",
        "1=Intro Preview:1",
        "-o",
        output.to_str().unwrap(),
    ]);

    assert!(matches!(result, Err(SwapperError::InvalidPlan(_))));
    assert!(!output.exists());
}

#[test]
fn short_rom_is_rejected_before_editing() {
    let dir = TempDir::new().unwrap();
    let rom = dir.path().join("short.z64");
    persist_image(&RomImage::zeroed(LAYOUT.resource_table_start), &rom).unwrap();

    let (result, _) = run_args(&[
        "mg64-swapper",
        "--rom",
        rom.to_str().unwrap(),
        "swap",
        "0",
        "36",
    ]);

    assert!(matches!(
        result,
        Err(SwapperError::ImageTooSmall { required, .. }) if required == LAYOUT.required_len()
    ));
}

#[test]
fn missing_rom_is_reported() {
    let dir = TempDir::new().unwrap();
    let rom = dir.path().join("absent.z64");

    let (result, _) = run_args(&[
        "mg64-swapper",
        "--rom",
        rom.to_str().unwrap(),
        "random",
        "--seed",
        "1",
    ]);

    assert!(matches!(result, Err(SwapperError::FileNotFound { path }) if path == rom));
}

#[test]
fn listings_need_no_rom() {
    let (result, text) = run_args(&["mg64-swapper", "--rom", "/nonexistent.z64", "holes", "Boo Valley"]);
    result.unwrap();

    assert!(text.starts_with("Boo Valley:"));
    assert!(text.contains("Hole 18  index  35"));
}
