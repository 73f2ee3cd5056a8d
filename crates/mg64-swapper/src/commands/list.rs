//! Catalog listings. These never open the ROM.

use crate::error::SwapperError;
use mg64_rom::{Course, HoleCatalog};
use std::io::Write;

/// List every playable course.
pub fn courses(out: &mut impl Write) -> Result<(), SwapperError> {
    let catalog = HoleCatalog::mario_golf_64();

    writeln!(out, "Courses:")?;
    for course in catalog.courses() {
        let holes = catalog.course_holes(course).len();
        let par = if course.par_group().is_some() {
            ""
        } else {
            " (no par entries)"
        };
        writeln!(out, "  {course:<16} {holes} holes{par}")?;
    }
    Ok(())
}

/// List the holes of `course` in play order with their global indices.
pub fn holes(course: &str, out: &mut impl Write) -> Result<(), SwapperError> {
    let catalog = HoleCatalog::mario_golf_64();
    let course: Course = course.parse()?;
    if course.is_preview() {
        return Err(SwapperError::InvalidPlan(format!(
            "{course} is not a playable course"
        )));
    }

    writeln!(out, "{course}:")?;
    for index in catalog.course_holes(course) {
        let info = catalog.info(index)?;
        writeln!(out, "  Hole {:2}  index {index:3}", info.number)?;
    }
    Ok(())
}
