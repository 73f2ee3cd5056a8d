//! Commands that rewrite the ROM.

use crate::config::EditArgs;
use crate::error::SwapperError;
use crate::plan::{
    CustomPlanner, HoleSelection, PlannedSwap, RandomPlanner, SwapPlan, SwapPlanner,
};
use crate::rom_file::{ensure_layout_fits, load_image, persist_image};
use mg64_rom::{BatchReport, Course, HoleCatalog, RomLayout, SwapEngine, UnitIndexMap};
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Default output of `custom`
pub const CUSTOM_OUTPUT: &str = "custom_course.z64";
/// Default output of `random`
pub const RANDOM_OUTPUT: &str = "random_course.z64";
/// Default output of `swap`
pub const SWAP_OUTPUT: &str = "swapped.z64";

/// Replace selected holes of `target` with hand-picked ones.
pub fn custom(
    rom: &Path,
    target: &str,
    selections: Vec<HoleSelection>,
    edit: &EditArgs,
    out: &mut impl Write,
) -> Result<(), SwapperError> {
    let target: Course = target.parse()?;
    let mut planner = CustomPlanner::new(target, selections);
    let plan = planner.choose_units_to_swap(&HoleCatalog::mario_golf_64())?;

    writeln!(out, "Custom {target}: {} hole(s) selected", plan.len())?;
    apply(rom, &plan, edit, CUSTOM_OUTPUT, out)
}

/// Replace the first `hole_count` holes of `target` with random ones.
pub fn random(
    rom: &Path,
    target: &str,
    hole_count: usize,
    seed: Option<u64>,
    edit: &EditArgs,
    out: &mut impl Write,
) -> Result<(), SwapperError> {
    let target: Course = target.parse()?;
    let seed = seed.unwrap_or_else(rand::random);
    let mut planner = RandomPlanner::new(target, hole_count, seed);
    let plan = planner.choose_units_to_swap(&HoleCatalog::mario_golf_64())?;

    writeln!(out, "Random {hole_count}-hole course on {target} (seed {seed})")?;
    apply(rom, &plan, edit, RANDOM_OUTPUT, out)
}

/// Swap two holes by global index.
pub fn swap(
    rom: &Path,
    a: usize,
    b: usize,
    edit: &EditArgs,
    out: &mut impl Write,
) -> Result<(), SwapperError> {
    let plan = SwapPlan {
        swaps: vec![PlannedSwap {
            hole_number: 1,
            target: a,
            replacement: b,
        }],
    };
    apply(rom, &plan, edit, SWAP_OUTPUT, out)
}

fn apply(
    rom: &Path,
    plan: &SwapPlan,
    edit: &EditArgs,
    default_output: &str,
    out: &mut impl Write,
) -> Result<(), SwapperError> {
    let layout = RomLayout::default();
    let image = load_image(rom)?;
    ensure_layout_fits(&image, &layout)?;

    let units = if edit.geometry_only {
        info!("Geometry-only mode, par values stay in place");
        UnitIndexMap::empty()
    } else {
        UnitIndexMap::mario_golf_64()
    };

    let mut engine = SwapEngine::new(image, layout, units);
    let report = engine.apply_plan(plan.pairs());
    write_report(plan, &report, out)?;

    if !report.is_clean() {
        let failed = report.failure_count();
        warn!(failed, "Batch had failures, discarding edited image");
        return Err(SwapperError::BatchFailed { failed });
    }

    if edit.dry_run {
        writeln!(out, "Dry run, ROM not saved")?;
        return Ok(());
    }

    let output = edit.output_or(default_output);
    persist_image(engine.image(), output)?;
    writeln!(out, "Saved {}", output.display())?;
    Ok(())
}

fn write_report(
    plan: &SwapPlan,
    report: &BatchReport,
    out: &mut impl Write,
) -> Result<(), SwapperError> {
    let catalog = HoleCatalog::mario_golf_64();
    let name = |index: usize| {
        catalog
            .display_name(index)
            .unwrap_or_else(|_| format!("hole {index}"))
    };

    for (slot, entry) in plan.swaps.iter().zip(&report.entries) {
        let label = format!("Hole {:2}", slot.hole_number);
        match &entry.result {
            Ok(_) if slot.is_kept() => {
                writeln!(out, "  {label}: keeping {}", name(entry.target))?;
            }
            Ok(outcome) => {
                writeln!(
                    out,
                    "  {label}: {} -> {}",
                    name(entry.target),
                    name(entry.replacement)
                )?;
                if outcome.is_geometry_only() {
                    writeln!(out, "           par unchanged ({outcome})")?;
                }
            }
            Err(error) => {
                writeln!(
                    out,
                    "  {label}: FAILED {} -> {}: {error} [{}]",
                    name(entry.target),
                    name(entry.replacement),
                    error.state()
                )?;
            }
        }
    }

    let geometry_only = report.geometry_only_count();
    if geometry_only > 0 {
        writeln!(out, "{geometry_only} swap(s) moved geometry without par")?;
    }
    Ok(())
}
