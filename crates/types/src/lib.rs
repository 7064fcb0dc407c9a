//! Core types module - shared data structures and constants
//!
//! This module defines the plain value types used throughout the workspace.
//! Nothing here knows about grids, terminals or I/O, so the types can be used
//! by the grid core, the terminal layer and the CLI alike.
//!
//! # Quarters
//!
//! A point's position relative to the origin is classified into one of four
//! quarters:
//!
//! | Quarter | x | y |
//! |---------|---|---|
//! | `Q1` | `>= 0` | `>= 0` |
//! | `Q2` | `< 0` | `> 0` |
//! | `Q3` | `< 0` | `<= 0` |
//! | `Q4` | `>= 0` | `< 0` |
//!
//! A set of quarters can be reduced to the smallest [`Region`] containing it
//! (a single quarter, one of the four half-planes, or the whole plane).
//!
//! # Examples
//!
//! ```
//! use tui_chart_types::{Color, Quarter, QuarterSet, Region};
//!
//! let set: QuarterSet = [Quarter::Q1, Quarter::Q2].into_iter().collect();
//! assert_eq!(set.enclosing_region(), Some(Region::North));
//!
//! assert_eq!(Color::from_name("light-red"), Some(Color::LightRed));
//! ```

use arrayvec::ArrayVec;

/// Content of a cell nobody has written to
pub const BLANK: &str = " ";

/// Label written at the origin cell
pub const ORIGIN_LABEL: &str = "0";

/// Token used by decorated points when none is given
pub const DEFAULT_TOKEN: char = 'X';

/// Default tick increment for both axes
pub const DEFAULT_STEP: i64 = 1;

/// Default label modulus; keeps positive labels to a single digit
pub const DEFAULT_NORMALIZER: i64 = 10;

/// Sign-based classification of a point relative to the origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    /// All quarters, counter-clockwise from `Q1`
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    /// Classify a coordinate pair.
    ///
    /// The `y == 0` boundary is asymmetric: it belongs to `Q1` for `x >= 0`
    /// and to `Q3` for `x < 0`.
    pub fn of(x: i64, y: i64) -> Self {
        match (x >= 0, y) {
            (true, y) if y >= 0 => Quarter::Q1,
            (true, _) => Quarter::Q4,
            (false, y) if y > 0 => Quarter::Q2,
            (false, _) => Quarter::Q3,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Quarter::Q1 => "q1",
            Quarter::Q2 => "q2",
            Quarter::Q3 => "q3",
            Quarter::Q4 => "q4",
        }
    }

    #[inline]
    fn slot(self) -> usize {
        match self {
            Quarter::Q1 => 0,
            Quarter::Q2 => 1,
            Quarter::Q3 => 2,
            Quarter::Q4 => 3,
        }
    }
}

/// Smallest plane enclosing a set of quarters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Quarter(Quarter),
    /// Q1 + Q2
    North,
    /// Q2 + Q3
    West,
    /// Q3 + Q4
    South,
    /// Q4 + Q1
    East,
    Whole,
}

impl Region {
    /// Quarters covered by this region
    pub fn quarters(&self) -> &'static [Quarter] {
        match self {
            Region::Quarter(Quarter::Q1) => &[Quarter::Q1],
            Region::Quarter(Quarter::Q2) => &[Quarter::Q2],
            Region::Quarter(Quarter::Q3) => &[Quarter::Q3],
            Region::Quarter(Quarter::Q4) => &[Quarter::Q4],
            Region::North => &[Quarter::Q1, Quarter::Q2],
            Region::West => &[Quarter::Q2, Quarter::Q3],
            Region::South => &[Quarter::Q3, Quarter::Q4],
            Region::East => &[Quarter::Q4, Quarter::Q1],
            Region::Whole => &Quarter::ALL,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Quarter(q) => q.as_str(),
            Region::North => "north",
            Region::West => "west",
            Region::South => "south",
            Region::East => "east",
            Region::Whole => "whole",
        }
    }
}

/// A set of quarters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct QuarterSet {
    members: [bool; 4],
}

impl QuarterSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, quarter: Quarter) {
        self.members[quarter.slot()] = true;
    }

    pub fn contains(&self, quarter: Quarter) -> bool {
        self.members[quarter.slot()]
    }

    pub fn len(&self) -> usize {
        self.members.iter().filter(|m| **m).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Members in `Q1..Q4` order
    pub fn quarters(&self) -> ArrayVec<Quarter, 4> {
        Quarter::ALL
            .into_iter()
            .filter(|q| self.contains(*q))
            .collect()
    }

    /// The smallest region containing every member.
    ///
    /// Adjacent pairs reduce to their half-plane; diagonal pairs and sets of
    /// three or more need the whole plane. Returns `None` for the empty set.
    pub fn enclosing_region(&self) -> Option<Region> {
        let region = match self.members {
            [false, false, false, false] => return None,
            [true, false, false, false] => Region::Quarter(Quarter::Q1),
            [false, true, false, false] => Region::Quarter(Quarter::Q2),
            [false, false, true, false] => Region::Quarter(Quarter::Q3),
            [false, false, false, true] => Region::Quarter(Quarter::Q4),
            [true, true, false, false] => Region::North,
            [false, true, true, false] => Region::West,
            [false, false, true, true] => Region::South,
            [true, false, false, true] => Region::East,
            _ => Region::Whole,
        };
        Some(region)
    }
}

impl FromIterator<Quarter> for QuarterSet {
    fn from_iter<I: IntoIterator<Item = Quarter>>(iter: I) -> Self {
        let mut set = QuarterSet::new();
        for quarter in iter {
            set.insert(quarter);
        }
        set
    }
}

/// The 16 ANSI terminal colors plus the terminal default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    LightBlack,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    LightWhite,
    Reset,
}

impl Color {
    /// Parse a color name (case-insensitive, `_` and `-` are ignored)
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "black" => Some(Color::Black),
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "yellow" => Some(Color::Yellow),
            "blue" => Some(Color::Blue),
            "magenta" => Some(Color::Magenta),
            "cyan" => Some(Color::Cyan),
            "white" => Some(Color::White),
            "lightblack" => Some(Color::LightBlack),
            "lightred" => Some(Color::LightRed),
            "lightgreen" => Some(Color::LightGreen),
            "lightyellow" => Some(Color::LightYellow),
            "lightblue" => Some(Color::LightBlue),
            "lightmagenta" => Some(Color::LightMagenta),
            "lightcyan" => Some(Color::LightCyan),
            "lightwhite" => Some(Color::LightWhite),
            "reset" => Some(Color::Reset),
            _ => None,
        }
    }
}

/// Text intensity attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intensity {
    Bright,
    Dim,
    Normal,
}

impl Intensity {
    /// Parse an intensity name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "bright" | "bold" => Some(Intensity::Bright),
            "dim" => Some(Intensity::Dim),
            "normal" => Some(Intensity::Normal),
            _ => None,
        }
    }
}

/// Optional styling attached to a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenStyle {
    pub fore: Option<Color>,
    pub back: Option<Color>,
    pub intensity: Option<Intensity>,
}

impl TokenStyle {
    pub const fn new(
        fore: Option<Color>,
        back: Option<Color>,
        intensity: Option<Intensity>,
    ) -> Self {
        Self {
            fore,
            back,
            intensity,
        }
    }

    /// True when no attribute is set
    pub fn is_plain(&self) -> bool {
        self.fore.is_none() && self.back.is_none() && self.intensity.is_none()
    }
}
