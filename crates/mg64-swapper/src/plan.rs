//! Course plans: which holes replace which.
//!
//! A plan is an ordered list of `(target, replacement)` global hole indices.
//! Targets are slots of the course being rebuilt; replacements are the holes
//! moved into them.

use crate::error::SwapperError;
use mg64_rom::catalog::HOLES_PER_COURSE;
use mg64_rom::{Course, HoleCatalog};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;
use std::collections::HashSet;
use std::str::FromStr;
use tracing::debug;

/// One slot of a course plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedSwap {
    /// Hole number on the target course, `1..=18`
    pub hole_number: u8,
    /// Global index of the hole being replaced
    pub target: usize,
    /// Global index of the hole moved into the slot
    pub replacement: usize,
}

impl PlannedSwap {
    /// Whether the slot keeps its own hole
    pub const fn is_kept(&self) -> bool {
        self.target == self.replacement
    }
}

/// Ordered swaps that build a course
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwapPlan {
    /// Slots in application order
    pub swaps: Vec<PlannedSwap>,
}

impl SwapPlan {
    /// `(target, replacement)` pairs in application order
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.swaps
            .iter()
            .map(|swap| (swap.target, swap.replacement))
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.swaps.len()
    }

    /// Whether the plan has no slots
    pub fn is_empty(&self) -> bool {
        self.swaps.is_empty()
    }
}

/// Produces the swaps for a course
pub trait SwapPlanner {
    /// Choose the `(target, replacement)` pairs to apply
    fn choose_units_to_swap(&mut self, catalog: &HoleCatalog) -> Result<SwapPlan, SwapperError>;
}

/// Replacement for one hole of the target course, written
/// `ORDINAL=COURSE:HOLE` on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoleSelection {
    /// Hole number on the target course
    pub ordinal: u8,
    /// Course of the replacement hole
    pub course: String,
    /// Hole number of the replacement on its course
    pub hole: u8,
}

impl FromStr for HoleSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (ordinal, replacement) = s
            .split_once('=')
            .ok_or_else(|| format!("expected ORDINAL=COURSE:HOLE, got '{s}'"))?;
        let (course, hole) = replacement
            .rsplit_once(':')
            .ok_or_else(|| format!("expected COURSE:HOLE after '=', got '{replacement}'"))?;

        let ordinal = ordinal
            .trim()
            .parse()
            .map_err(|_| format!("invalid hole ordinal '{}'", ordinal.trim()))?;
        let hole = hole
            .trim()
            .parse()
            .map_err(|_| format!("invalid hole number '{}'", hole.trim()))?;

        let course = course.trim();
        if course.is_empty() {
            return Err(format!("missing course name in '{s}'"));
        }

        Ok(Self {
            ordinal,
            course: course.to_string(),
            hole,
        })
    }
}

fn target_holes(catalog: &HoleCatalog, target: Course) -> Result<Vec<usize>, SwapperError> {
    let holes = catalog.course_holes(target);
    if target.is_preview() || holes.len() < usize::from(HOLES_PER_COURSE) {
        return Err(SwapperError::InvalidPlan(format!(
            "{target} does not have {HOLES_PER_COURSE} holes to replace"
        )));
    }
    Ok(holes)
}

/// Hand-picked replacements for individual holes of a course
#[derive(Debug, Clone)]
pub struct CustomPlanner {
    target: Course,
    selections: Vec<HoleSelection>,
}

impl CustomPlanner {
    /// Plan replacing holes of `target` with `selections`
    pub const fn new(target: Course, selections: Vec<HoleSelection>) -> Self {
        Self { target, selections }
    }
}

impl SwapPlanner for CustomPlanner {
    fn choose_units_to_swap(&mut self, catalog: &HoleCatalog) -> Result<SwapPlan, SwapperError> {
        let targets = target_holes(catalog, self.target)?;

        let mut seen = HashSet::new();
        let mut swaps = Vec::with_capacity(self.selections.len());
        for selection in &self.selections {
            if !(1..=HOLES_PER_COURSE).contains(&selection.ordinal) {
                return Err(SwapperError::InvalidPlan(format!(
                    "hole ordinal {} is outside 1..={HOLES_PER_COURSE}",
                    selection.ordinal
                )));
            }
            if !seen.insert(selection.ordinal) {
                return Err(SwapperError::InvalidPlan(format!(
                    "hole {} selected more than once",
                    selection.ordinal
                )));
            }

            let course: Course = selection.course.parse()?;
            if course.is_preview() {
                return Err(SwapperError::InvalidPlan(format!(
                    "{course} cannot be swapped into a course"
                )));
            }
            let replacement = catalog.find_hole(course, selection.hole)?;
            swaps.push(PlannedSwap {
                hole_number: selection.ordinal,
                target: targets[usize::from(selection.ordinal) - 1],
                replacement,
            });
        }

        swaps.sort_by_key(|swap| swap.hole_number);
        debug!(target = %self.target, slots = swaps.len(), "custom course planned");
        Ok(SwapPlan { swaps })
    }
}

/// Random replacements for the first 9 or 18 holes of a course
#[derive(Debug)]
pub struct RandomPlanner {
    target: Course,
    hole_count: usize,
    seed: u64,
}

impl RandomPlanner {
    /// Plan `hole_count` random holes for `target`, drawn with `seed`
    pub const fn new(target: Course, hole_count: usize, seed: u64) -> Self {
        Self {
            target,
            hole_count,
            seed,
        }
    }

    /// Seed the plan is drawn with
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl SwapPlanner for RandomPlanner {
    fn choose_units_to_swap(&mut self, catalog: &HoleCatalog) -> Result<SwapPlan, SwapperError> {
        if !matches!(self.hole_count, 9 | 18) {
            return Err(SwapperError::InvalidPlan(format!(
                "random courses have 9 or 18 holes, not {}",
                self.hole_count
            )));
        }

        let targets = target_holes(catalog, self.target)?;
        let pool = catalog.playable_pool();
        if pool.len() < self.hole_count {
            return Err(SwapperError::InvalidPlan(format!(
                "only {} playable holes to draw from",
                pool.len()
            )));
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let picks = index::sample(&mut rng, pool.len(), self.hole_count);

        let swaps = targets
            .iter()
            .zip(picks.iter())
            .zip(1..=HOLES_PER_COURSE)
            .map(|((&target, pick), hole_number)| PlannedSwap {
                hole_number,
                target,
                replacement: pool[pick],
            })
            .collect();

        debug!(target = %self.target, seed = self.seed, holes = self.hole_count, "random course planned");
        Ok(SwapPlan { swaps })
    }
}
