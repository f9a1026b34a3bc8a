//! Straight segments between two grid coordinates.

use std::hash::{Hash, Hasher};

use crate::{Direction, Error, HexCoord, Result};

/// An unordered pair of coordinates.
///
/// A segment equals its reverse, and both hash the same.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexSegment {
    pub begin: HexCoord,
    pub end: HexCoord,
}

impl HexSegment {
    pub const fn new(begin: HexCoord, end: HexCoord) -> Self {
        Self { begin, end }
    }

    /// The one-step segment leaving `begin` along `direction`.
    pub fn unit(begin: HexCoord, direction: Direction) -> Result<Self> {
        if direction.offset().is_none() {
            return Err(Error::IncorrectDirection { operation: "unit segment" });
        }
        let end = begin
            .shift(direction, 1)
            .map_err(|_| Error::OutOfRange { operation: "unit segment" })?;
        Ok(Self::new(begin, end))
    }

    /// True when the endpoints differ and share an x, a y or a z value,
    /// i.e. the segment runs along one of the three grid axes.
    ///
    /// Examples: 30-34 (horizontal), 13-63 and 51-24 (the two diagonals).
    /// 13-26 is not valid.
    pub fn is_valid(&self) -> bool {
        self.begin != self.end
            && (self.begin.x == self.end.x
                || self.begin.y == self.end.y
                || self.begin.z() == self.end.z())
    }

    /// Direction from `begin` towards `end`, or `Incorrect` for a segment
    /// that is not axis-aligned.
    pub fn direction(&self) -> Direction {
        if !self.is_valid() {
            return Direction::Incorrect;
        }
        let (begin, end) = (self.begin, self.end);
        if begin.x == end.x {
            if begin.y < end.y {
                Direction::UpRight
            } else {
                Direction::DownLeft
            }
        } else if begin.y == end.y {
            if begin.x < end.x {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if begin.y < end.y {
            Direction::UpLeft
        } else {
            Direction::DownRight
        }
    }

    /// Grid distance between the endpoints.
    pub fn length(&self) -> u64 {
        self.begin.distance(&self.end)
    }

    /// Endpoints with the smaller one first.
    fn normalized(&self) -> (HexCoord, HexCoord) {
        if self.begin <= self.end {
            (self.begin, self.end)
        } else {
            (self.end, self.begin)
        }
    }
}

impl PartialEq for HexSegment {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for HexSegment {}

impl Hash for HexSegment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}
