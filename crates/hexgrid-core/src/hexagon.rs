//! Regular hexagons on the grid.
//!
//! A hexagon is a center plus a radius: every coordinate within `radius`
//! steps of the center. Its sides run along the grid axes, so its boundary
//! ("ring") can be walked with straight runs of unit steps.
//!
//! # Ring Walk
//!
//! The walk starts at the corner `radius` steps DOWN_LEFT of the center and
//! takes `radius` steps in each direction of the cycle in turn:
//!
//! - Ring 0: just the center (1 point)
//! - Ring n > 0: 6n points, ending back on the starting corner
//!
//! The walk is tracked in 64 bits. Points that fall outside the `i32`
//! coordinate range are skipped, so only a ring hanging over the edge of the
//! grid comes up short.

use std::fmt;

use crate::{Direction, HexCoord};

/// Number of coordinates on the boundary of a radius-`radius` hexagon.
#[inline]
pub const fn ring_len(radius: u64) -> u64 {
    if radius == 0 {
        1
    } else {
        radius.saturating_mul(6)
    }
}

/// Number of coordinates inside a radius-`radius` hexagon, boundary included.
///
/// Formula: 1 + 3r(r+1)
#[inline]
pub const fn area(radius: u64) -> u64 {
    radius
        .saturating_mul(radius.saturating_add(1))
        .saturating_mul(3)
        .saturating_add(1)
}

/// Largest distance between two coordinates with `i32` components.
const MAX_SPAN: i64 = 2 * u32::MAX as i64;

/// A regular hexagon: all points within `radius` of `center`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hexagon {
    pub center: HexCoord,
    pub radius: u64,
}

impl Hexagon {
    pub const fn new(center: HexCoord, radius: u64) -> Self {
        Self { center, radius }
    }

    /// The single-point hexagon.
    pub const fn point(center: HexCoord) -> Self {
        Self { center, radius: 0 }
    }

    /// True if `point` lies inside or on the boundary.
    pub fn contains(&self, point: HexCoord) -> bool {
        self.center.distance(&point) <= self.radius
    }

    /// Steps between the closest points of two hexagons, 0 if they touch or
    /// overlap.
    ///
    /// A hexagon at 31 with radius 1 and one at 26 with radius 2 are 2 apart
    /// (from 32 to 24).
    pub fn distance(&self, other: &Self) -> u64 {
        self.center
            .distance(&other.center)
            .saturating_sub(self.radius)
            .saturating_sub(other.radius)
    }

    /// Walk the boundary in order. See the module docs for the walk.
    pub fn ring(&self) -> Ring {
        Ring::new(self.center, self.radius)
    }

    /// Every coordinate in the hexagon, ring by ring from the center out.
    pub fn points(&self) -> impl Iterator<Item = HexCoord> {
        let center = self.center;
        let widest = self.radius.min(MAX_SPAN.unsigned_abs());
        (0..=widest).flat_map(move |r| Ring::new(center, r))
    }
}

/// Center, a slash, then the radius: `3.3/1`.
impl fmt::Display for Hexagon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.center, self.radius)
    }
}

/// Iterator over the boundary of a hexagon.
#[derive(Debug, Clone)]
pub struct Ring {
    /// Where each of the six runs begins, as (x, y).
    corners: [(i64, i64); 6],
    side: i64,
    current: u64,
    limit: u64,
    /// Every point of the walk has `i32` components.
    inside: bool,
}

impl Ring {
    fn new(center: HexCoord, radius: u64) -> Self {
        // Past MAX_SPAN no point of the ring is representable.
        let Some(side) = i64::try_from(radius).ok().filter(|&side| side <= MAX_SPAN) else {
            return Self {
                corners: [(0, 0); 6],
                side: 0,
                current: 0,
                limit: 0,
                inside: true,
            };
        };

        let mut corner = (i64::from(center.x), i64::from(center.y) - side);
        let mut corners = [corner; 6];
        for (slot, step) in corners.iter_mut().zip(Direction::UNIT_OFFSETS) {
            *slot = corner;
            corner = (
                corner.0 + i64::from(step.x) * side,
                corner.1 + i64::from(step.y) * side,
            );
        }
        // The ring is convex, so it fits whenever its corners do.
        let inside = corners
            .iter()
            .all(|&(x, y)| i32::try_from(x).is_ok() && i32::try_from(y).is_ok());

        Self {
            corners,
            side,
            current: 0,
            limit: ring_len(radius),
            inside,
        }
    }

    /// Position of the `index`-th point of the walk.
    fn position(&self, index: u64) -> (i64, i64) {
        if self.side == 0 {
            return self.corners[0];
        }

        let side = self.side.unsigned_abs();
        let edge = (index / side) as usize;
        let pos_on_edge = (index % side) as i64;
        let (x, y) = self.corners[edge];
        let step = Direction::UNIT_OFFSETS[edge];
        (
            x + i64::from(step.x) * (pos_on_edge + 1),
            y + i64::from(step.y) * (pos_on_edge + 1),
        )
    }
}

impl Iterator for Ring {
    type Item = HexCoord;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current < self.limit {
            let (x, y) = Ring::position(self, self.current);
            self.current += 1;
            if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
                return Some(HexCoord::new(x, y));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.limit - self.current).unwrap_or(usize::MAX);
        if self.inside {
            (remaining, Some(remaining))
        } else {
            (0, Some(remaining))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn hex(label: &str) -> HexCoord {
        label.parse().unwrap()
    }

    #[test]
    fn ring_len_formula() {
        assert_eq!(ring_len(0), 1);
        assert_eq!(ring_len(1), 6);
        assert_eq!(ring_len(2), 12);
        assert_eq!(ring_len(10), 60);
    }

    #[test]
    fn area_formula() {
        assert_eq!(area(0), 1);
        assert_eq!(area(1), 7);
        assert_eq!(area(2), 19);
        assert_eq!(area(3), 37);
    }

    #[test]
    fn contains_boundary_and_interior() {
        let hexagon = Hexagon::new(hex("33"), 1);
        for label in ["33", "42", "43", "34", "24", "23", "32"] {
            assert!(hexagon.contains(hex(label)), "{label} should be inside");
        }
        assert!(!hexagon.contains(hex("44")));
        assert!(!hexagon.contains(hex("22")));
    }

    #[test]
    fn distance_between_hexagons() {
        let a = Hexagon::new(hex("31"), 1);
        let b = Hexagon::new(hex("26"), 2);
        assert_eq!(a.distance(&b), 2);
        assert_eq!(b.distance(&a), 2);

        let overlapping = Hexagon::new(hex("33"), 3);
        assert_eq!(a.distance(&overlapping), 0);
    }

    #[test]
    fn ring_of_radius_one() {
        let ring: HashSet<_> = Hexagon::new(hex("33"), 1).ring().collect();
        let expected: HashSet<_> = ["42", "43", "34", "24", "23", "32"]
            .into_iter()
            .map(hex)
            .collect();
        assert_eq!(ring, expected);
    }

    #[test]
    fn ring_walk_order() {
        let walk: Vec<_> = Hexagon::new(hex("33"), 1).ring().collect();
        let expected: Vec<_> = ["24", "34", "43", "42", "32", "23"]
            .into_iter()
            .map(hex)
            .collect();
        assert_eq!(walk, expected);
    }

    #[test]
    fn ring_of_radius_zero_is_center() {
        let center = hex("55");
        let ring: Vec<_> = Hexagon::point(center).ring().collect();
        assert_eq!(ring, vec![center]);
    }

    #[test]
    fn ring_points_are_unique_and_on_boundary() {
        for radius in 1..=6 {
            let hexagon = Hexagon::new(HexCoord::new(-2, 7), radius);
            let walk: Vec<_> = hexagon.ring().collect();
            assert_eq!(walk.len() as u64, ring_len(radius));

            let unique: HashSet<_> = walk.iter().copied().collect();
            assert_eq!(unique.len(), walk.len());

            for p in walk {
                assert_eq!(p.distance(&hexagon.center), radius);
            }
        }
    }

    #[test]
    fn ring_size_hint_is_exact() {
        let mut ring = Hexagon::new(HexCoord::ORIGIN, 3).ring();
        assert_eq!(ring.size_hint(), (18, Some(18)));
        ring.next();
        assert_eq!(ring.size_hint(), (17, Some(17)));
    }

    #[test]
    fn ring_on_the_grid_edge_skips_missing_points() {
        let edge = HexCoord::new(i32::MAX, 0);
        let ring: Vec<_> = Hexagon::new(edge, 1).ring().collect();
        assert_eq!(ring.len(), 4);
        for p in &ring {
            assert_eq!(p.distance(&edge), 1);
        }
        assert_eq!(Hexagon::new(edge, 1).ring().size_hint(), (0, Some(6)));
    }

    #[test]
    fn largest_rings() {
        let widest = i32::MAX as u64;
        let mut ring = Hexagon::new(HexCoord::ORIGIN, widest).ring();
        let expected = usize::try_from(ring_len(widest)).unwrap();
        assert_eq!(ring.size_hint(), (expected, Some(expected)));
        assert_eq!(ring.next(), Some(HexCoord::new(1, -i32::MAX)));

        // A ring wider than the whole grid has nothing on it.
        let beyond = 2 * u64::from(u32::MAX) + 1;
        assert_eq!(Hexagon::new(HexCoord::ORIGIN, beyond).ring().next(), None);
        assert_eq!(Hexagon::new(HexCoord::ORIGIN, u64::MAX).ring().next(), None);
    }

    #[test]
    fn counts_saturate() {
        assert_eq!(ring_len(u64::MAX), u64::MAX);
        assert_eq!(area(u64::MAX), u64::MAX);
    }

    #[test]
    fn points_fill_the_hexagon() {
        let hexagon = Hexagon::new(hex("44"), 3);
        let points: HashSet<_> = hexagon.points().collect();
        assert_eq!(points.len() as u64, area(3));
        for p in points {
            assert!(hexagon.contains(p));
        }
    }

    #[test]
    fn display() {
        assert_eq!(Hexagon::new(hex("24"), 2).to_string(), "2.4/2");
    }
}
