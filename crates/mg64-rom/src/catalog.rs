//! Static catalog of the game's holes
//!
//! Maps each global hole index to the course it belongs to and its hole
//! number on that course. Nothing in the swap path depends on these names;
//! they exist for listing courses and resolving user selections.

use crate::error::{Result, RomError};
use std::fmt;
use std::str::FromStr;

/// Holes on a full course
pub const HOLES_PER_COURSE: u8 = 18;

/// Course a hole belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Course {
    /// Toad Highlands
    ToadHighlands,
    /// Koopa Park
    KoopaPark,
    /// Shy Guy Desert
    ShyGuyDesert,
    /// Yoshi's Island
    YoshisIsland,
    /// Boo Valley
    BooValley,
    /// Mario's Star
    MariosStar,
    /// Luigi's Garden
    LuigisGarden,
    /// Peach's Castle
    PeachsCastle,
    /// Single-hole intro preview, not playable
    IntroPreview,
}

impl Course {
    /// Every course in game order
    pub const ALL: [Self; 9] = [
        Self::ToadHighlands,
        Self::KoopaPark,
        Self::ShyGuyDesert,
        Self::YoshisIsland,
        Self::BooValley,
        Self::MariosStar,
        Self::LuigisGarden,
        Self::PeachsCastle,
        Self::IntroPreview,
    ];

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::ToadHighlands => "Toad Highlands",
            Self::KoopaPark => "Koopa Park",
            Self::ShyGuyDesert => "Shy Guy Desert",
            Self::YoshisIsland => "Yoshi's Island",
            Self::BooValley => "Boo Valley",
            Self::MariosStar => "Mario's Star",
            Self::LuigisGarden => "Luigi's Garden",
            Self::PeachsCastle => "Peach's Castle",
            Self::IntroPreview => "Intro Preview",
        }
    }

    /// Par table group of the course, if it has one
    pub const fn par_group(self) -> Option<u8> {
        match self {
            Self::ToadHighlands => Some(0),
            Self::KoopaPark => Some(1),
            Self::ShyGuyDesert => Some(2),
            Self::YoshisIsland => Some(3),
            Self::BooValley => Some(4),
            Self::MariosStar => Some(5),
            Self::LuigisGarden | Self::PeachsCastle | Self::IntroPreview => None,
        }
    }

    /// Whether this is the intro preview
    pub const fn is_preview(self) -> bool {
        matches!(self, Self::IntroPreview)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Course {
    type Err = RomError;

    /// Case-insensitive match on the display name
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|course| course.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RomError::UnknownCourse(wanted.to_string()))
    }
}

/// Course and hole number of one global hole index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoleInfo {
    /// Owning course
    pub course: Course,
    /// Hole number on the course, `1..=18`
    pub number: u8,
}

impl fmt::Display for HoleInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.course.is_preview() {
            write!(f, "{} Course", self.course)
        } else {
            write!(f, "{} Hole {}", self.course, self.number)
        }
    }
}

const fn h(course: Course, number: u8) -> HoleInfo {
    HoleInfo { course, number }
}

use Course::{
    BooValley as BV, IntroPreview as IP, KoopaPark as KP, LuigisGarden as LG,
    MariosStar as MS, PeachsCastle as PC, ShyGuyDesert as SG, ToadHighlands as TH,
    YoshisIsland as YI,
};

#[rustfmt::skip]
static MARIO_GOLF_64_HOLES: [HoleInfo; 145] = [
    h(KP,  1), h(TH,  8), h(TH,  5), h(KP,  4), h(KP,  5), h(KP,  6), // 0..5
    h(KP,  7), h(KP,  8), h(KP,  9), h(KP, 10), h(KP, 11), h(KP, 12), // 6..11
    h(KP, 13), h(KP, 14), h(KP, 15), h(KP, 16), h(KP, 17), h(KP, 18), // 12..17
    h(BV,  1), h(BV,  2), h(BV,  3), h(BV,  4), h(BV,  5), h(BV,  6), // 18..23
    h(BV,  7), h(BV,  8), h(BV,  9), h(BV, 10), h(BV, 11), h(BV, 12), // 24..29
    h(BV, 13), h(BV, 14), h(BV, 15), h(BV, 16), h(BV, 17), h(BV, 18), // 30..35
    h(TH,  1), h(TH, 13), h(TH,  3), h(TH, 16), h(KP,  3), h(TH,  6), // 36..41
    h(TH,  7), h(KP,  2), h(TH,  9), h(TH, 10), h(TH, 11), h(TH, 12), // 42..47
    h(TH,  2), h(TH, 14), h(TH, 15), h(TH,  4), h(TH, 17), h(TH, 18), // 48..53
    h(SG, 18), h(SG,  4), h(SG, 11), h(SG, 16), h(SG,  1), h(SG, 10), // 54..59
    h(SG,  6), h(SG,  5), h(SG,  2), h(SG,  7), h(SG, 12), h(SG, 15), // 60..65
    h(SG,  3), h(SG, 14), h(SG, 17), h(SG,  9), h(SG, 13), h(SG,  8), // 66..71
    h(YI,  1), h(YI,  2), h(YI,  3), h(YI,  4), h(YI,  5), h(YI,  6), // 72..77
    h(YI,  7), h(YI,  8), h(YI,  9), h(YI, 10), h(YI, 11), h(YI, 12), // 78..83
    h(YI, 13), h(YI, 14), h(YI, 15), h(YI, 16), h(YI, 17), h(YI, 18), // 84..89
    h(MS, 11), h(MS,  9), h(MS,  1), h(MS,  4), h(MS, 14), h(MS,  7), // 90..95
    h(MS, 13), h(MS,  5), h(MS, 15), h(MS,  8), h(MS, 12), h(MS,  3), // 96..101
    h(MS,  6), h(MS, 17), h(MS, 16), h(MS, 10), h(MS,  2), h(MS, 18), // 102..107
    h(LG,  1), h(LG,  2), h(LG,  3), h(LG,  4), h(LG,  5), h(LG,  6), // 108..113
    h(LG,  7), h(LG,  8), h(LG,  9), h(LG, 10), h(LG, 11), h(LG, 12), // 114..119
    h(LG, 13), h(LG, 14), h(LG, 15), h(LG, 16), h(LG, 17), h(LG, 18), // 120..125
    h(PC,  1), h(PC,  2), h(PC,  3), h(PC,  4), h(PC,  5), h(PC,  6), // 126..131
    h(PC,  7), h(PC,  8), h(PC,  9), h(PC, 10), h(PC, 11), h(PC, 12), // 132..137
    h(PC, 13), h(PC, 14), h(PC, 15), h(PC, 16), h(PC, 17), h(PC, 18), // 138..143
    h(IP,  1),                                                        // 144
];

/// Read-only hole catalog indexed by global hole index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCatalog {
    holes: &'static [HoleInfo],
}

impl HoleCatalog {
    /// Catalog of the retail game
    pub const fn mario_golf_64() -> Self {
        Self {
            holes: &MARIO_GOLF_64_HOLES,
        }
    }

    /// Number of catalogued holes
    pub const fn len(&self) -> usize {
        self.holes.len()
    }

    /// Whether the catalog is empty
    pub const fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    /// Course and number of `index`
    pub fn info(&self, index: usize) -> Result<HoleInfo> {
        self.holes
            .get(index)
            .copied()
            .ok_or(RomError::UnknownUnit(index))
    }

    /// Human-readable label, e.g. `"Koopa Park Hole 1"`
    pub fn display_name(&self, index: usize) -> Result<String> {
        self.info(index).map(|info| info.to_string())
    }

    /// Global indices of `course`, ordered by hole number
    pub fn course_holes(&self, course: Course) -> Vec<usize> {
        let mut holes: Vec<usize> = self
            .holes
            .iter()
            .enumerate()
            .filter(|(_, info)| info.course == course)
            .map(|(index, _)| index)
            .collect();
        holes.sort_by_key(|&index| self.holes[index].number);
        holes
    }

    /// Global index of hole `number` on `course`
    pub fn find_hole(&self, course: Course, number: u8) -> Result<usize> {
        self.holes
            .iter()
            .position(|info| info.course == course && info.number == number)
            .ok_or_else(|| RomError::UnknownHole {
                course: course.name().to_string(),
                hole: number,
            })
    }

    /// Courses that can be listed and played, in game order
    pub fn courses(&self) -> impl Iterator<Item = Course> + '_ {
        Course::ALL
            .into_iter()
            .filter(|course| !course.is_preview())
            .filter(|course| self.holes.iter().any(|info| info.course == *course))
    }

    /// Holes eligible for random courses: every hole with a par entry
    pub fn playable_pool(&self) -> Vec<usize> {
        self.holes
            .iter()
            .enumerate()
            .filter(|(_, info)| info.course.par_group().is_some())
            .map(|(index, _)| index)
            .collect()
    }
}

impl Default for HoleCatalog {
    fn default() -> Self {
        Self::mario_golf_64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit_map::{MAPPED_UNITS, UnitIndexMap};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_names() {
        let catalog = HoleCatalog::mario_golf_64();
        assert_eq!(catalog.display_name(0).unwrap(), "Koopa Park Hole 1");
        assert_eq!(catalog.display_name(1).unwrap(), "Toad Highlands Hole 8");
        assert_eq!(catalog.display_name(107).unwrap(), "Mario's Star Hole 18");
        assert_eq!(catalog.display_name(144).unwrap(), "Intro Preview Course");
        assert!(matches!(
            catalog.display_name(145),
            Err(RomError::UnknownUnit(145))
        ));
    }

    #[test]
    fn test_every_course_has_18_distinct_holes() {
        let catalog = HoleCatalog::mario_golf_64();
        for course in catalog.courses() {
            let holes = catalog.course_holes(course);
            let numbers: Vec<u8> = holes
                .iter()
                .map(|&index| catalog.info(index).unwrap().number)
                .collect();
            assert_eq!(numbers, (1..=HOLES_PER_COURSE).collect::<Vec<_>>(), "{course}");
        }
    }

    #[test]
    fn test_toad_highlands_order() {
        let catalog = HoleCatalog::mario_golf_64();
        assert_eq!(
            catalog.course_holes(Course::ToadHighlands),
            vec![36, 48, 38, 51, 2, 41, 42, 1, 44, 45, 46, 47, 37, 49, 50, 39, 52, 53]
        );
    }

    #[test]
    fn test_find_hole() {
        let catalog = HoleCatalog::mario_golf_64();
        assert_eq!(catalog.find_hole(Course::KoopaPark, 3).unwrap(), 40);
        assert_eq!(catalog.find_hole(Course::MariosStar, 1).unwrap(), 92);
        assert!(matches!(
            catalog.find_hole(Course::BooValley, 19),
            Err(RomError::UnknownHole { hole: 19, .. })
        ));
    }

    #[test]
    fn test_course_parsing() {
        assert_eq!("koopa park".parse::<Course>().unwrap(), Course::KoopaPark);
        assert_eq!(
            "  YOSHI'S ISLAND ".parse::<Course>().unwrap(),
            Course::YoshisIsland
        );
        assert!(matches!(
            "Bowser's Castle".parse::<Course>(),
            Err(RomError::UnknownCourse(_))
        ));
    }

    #[test]
    fn test_courses_exclude_preview() {
        let catalog = HoleCatalog::mario_golf_64();
        let courses: Vec<Course> = catalog.courses().collect();
        assert_eq!(courses.len(), 8);
        assert!(!courses.contains(&Course::IntroPreview));
    }

    #[test]
    fn test_playable_pool_matches_par_coverage() {
        let catalog = HoleCatalog::mario_golf_64();
        assert_eq!(
            catalog.playable_pool(),
            (0..MAPPED_UNITS).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_catalog_agrees_with_par_coordinates() {
        let catalog = HoleCatalog::mario_golf_64();
        let map = UnitIndexMap::mario_golf_64();
        for index in catalog.playable_pool() {
            let info = catalog.info(index).unwrap();
            let coordinate = map.to_coordinate(index).unwrap();
            assert_eq!(Some(coordinate.group), info.course.par_group());
            assert_eq!(coordinate.unit + 1, info.number);
        }
    }
}
