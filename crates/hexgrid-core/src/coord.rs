//! Hexagonal grid coordinates.
//!
//! Two stored axes (x, y) with an implicit third axis z = -(x + y). The
//! third axis is never stored; it only shows up in distance and in the
//! alignment test for segments.
//!
//! Grid rows grow upward along y, columns grow rightward along x:
//!
//! ```text
//!       60  61  62  63  64  65
//!     50  51  52  53  54  55  56
//!   40  41  42  43  44  45  46  47
//! 30  31  32  33  34  35  36  37  38
//!   21  22  23  24  25  26  27  28
//!     12  13  14  15  16  17  18
//!       03  04  05  06  07  08
//! ```
//!
//! Each label is `yx`, so `16` is `HexCoord { x: 6, y: 1 }`.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::{Direction, Error, Result};

/// A position on the hexagonal grid.
///
/// Components are `i32`; anything derived from them (deltas, the z axis,
/// distances) is computed in 64 bits and cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCoord {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl HexCoord {
    /// Origin of the coordinate system.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a new coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The implicit third axis: z = -(x + y).
    pub const fn z(&self) -> i64 {
        -(self.x as i64 + self.y as i64)
    }

    /// Number of unit steps between two coordinates.
    ///
    /// Computed as (|dx| + |dy| + |dz|) / 2. The three deltas always sum to
    /// zero, so the numerator is even and the division is exact.
    pub fn distance(&self, other: &Self) -> u64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        (dx.unsigned_abs() + dy.unsigned_abs() + (dx + dy).unsigned_abs()) / 2
    }

    /// Translate by `distance` unit steps along `direction`.
    ///
    /// A negative distance walks the opposite way. Fails for
    /// `Direction::Incorrect`, and with `OutOfRange` when the destination
    /// does not fit in `i32` components.
    pub fn shift(self, direction: Direction, distance: i64) -> Result<Self> {
        let unit = direction
            .offset()
            .ok_or(Error::IncorrectDirection { operation: "move" })?;
        let out_of_range = || Error::OutOfRange { operation: "move" };
        let axis = |from: i32, step: i32| -> Result<i32> {
            let moved = i64::from(step)
                .checked_mul(distance)
                .and_then(|delta| delta.checked_add(i64::from(from)))
                .ok_or_else(out_of_range)?;
            i32::try_from(moved).map_err(|_| out_of_range())
        };
        Ok(Self::new(axis(self.x, unit.x)?, axis(self.y, unit.y)?))
    }

    /// The adjacent coordinates, in `Direction::ALL` order. All six exist
    /// except on the edge of the `i32` range.
    pub fn neighbors(&self) -> impl Iterator<Item = Self> {
        let here = *self;
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| here.shift(direction, 1).ok())
    }
}

/// Free-standing form of [`HexCoord::distance`].
pub fn distance(a: HexCoord, b: HexCoord) -> u64 {
    a.distance(&b)
}

impl Add for HexCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for HexCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for HexCoord {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Mul<i32> for HexCoord {
    type Output = Self;

    #[inline]
    fn mul(self, factor: i32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

/// Row first, then column: `HexCoord::new(3, 1)` prints as `1.3`.
impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.y, self.x)
    }
}

/// Accepts `y.x` with signed components, or the compact two-digit `yx` form.
impl FromStr for HexCoord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let invalid = || Error::ParseCoord(s.to_string());

        if let Some((y, x)) = text.split_once('.') {
            let y = y.trim().parse().map_err(|_| invalid())?;
            let x = x.trim().parse().map_err(|_| invalid())?;
            return Ok(Self::new(x, y));
        }

        match text.as_bytes() {
            [y @ b'0'..=b'9', x @ b'0'..=b'9'] => {
                Ok(Self::new(i32::from(*x - b'0'), i32::from(*y - b'0')))
            }
            _ => Err(invalid()),
        }
    }
}
