//! The six grid directions plus the INCORRECT marker.
//!
//! Real directions sit on a fixed counter-clockwise cycle:
//! RIGHT, UP_RIGHT, UP_LEFT, LEFT, DOWN_LEFT, DOWN_RIGHT. Opposites are three
//! positions apart, a 60 degree turn is one position. `Incorrect` is outside
//! the cycle and takes part in no arithmetic.

use std::fmt;
use std::str::FromStr;

use crate::{Error, HexCoord, Result};

/// Direction of an axis-aligned step on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Direction {
    /// 30 -> 34
    Right,
    /// 32 -> 62
    UpRight,
    /// 25 -> 61
    UpLeft,
    /// 34 -> 30
    Left,
    /// 62 -> 32
    DownLeft,
    /// 61 -> 25
    DownRight,
    /// No single direction applies, e.g. 30 -> 55 bends at 35.
    Incorrect,
}

impl Direction {
    /// The real directions in cycle order.
    pub const ALL: [Self; 6] = [
        Self::Right,
        Self::UpRight,
        Self::UpLeft,
        Self::Left,
        Self::DownLeft,
        Self::DownRight,
    ];

    /// Unit step for each entry of [`Direction::ALL`].
    pub const UNIT_OFFSETS: [HexCoord; 6] = [
        HexCoord { x: 1, y: 0 },
        HexCoord { x: 0, y: 1 },
        HexCoord { x: -1, y: 1 },
        HexCoord { x: -1, y: 0 },
        HexCoord { x: 0, y: -1 },
        HexCoord { x: 1, y: -1 },
    ];

    /// Position on the cycle, `None` for `Incorrect`.
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Right => Some(0),
            Self::UpRight => Some(1),
            Self::UpLeft => Some(2),
            Self::Left => Some(3),
            Self::DownLeft => Some(4),
            Self::DownRight => Some(5),
            Self::Incorrect => None,
        }
    }

    /// The unit step this direction takes, `None` for `Incorrect`.
    pub fn offset(self) -> Option<HexCoord> {
        self.index().map(|i| Self::UNIT_OFFSETS[i])
    }

    /// The reverse direction. `Incorrect` stays `Incorrect`.
    pub fn opposite(self) -> Self {
        match self.index() {
            Some(i) => Self::ALL[(i + 3) % 6],
            None => Self::Incorrect,
        }
    }

    /// Rotate 60 degrees counter-clockwise.
    pub fn next(self) -> Result<Self> {
        self.index()
            .map(|i| Self::ALL[(i + 1) % 6])
            .ok_or(Error::IncorrectDirection { operation: "next" })
    }

    /// Same direction or its reverse. `Incorrect` is parallel to nothing.
    pub fn is_parallel(self, other: Self) -> bool {
        self != Self::Incorrect && (self == other || self == other.opposite())
    }

    /// Upper-case name as used in grid notation.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Right => "RIGHT",
            Self::UpRight => "UP_RIGHT",
            Self::UpLeft => "UP_LEFT",
            Self::Left => "LEFT",
            Self::DownLeft => "DOWN_LEFT",
            Self::DownRight => "DOWN_RIGHT",
            Self::Incorrect => "INCORRECT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .chain([Self::Incorrect])
            .find(|d| d.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::ParseDirection(s.to_string()))
    }
}
