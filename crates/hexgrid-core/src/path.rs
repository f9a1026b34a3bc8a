//! Shortest paths between two coordinates.
//!
//! A diagonal step (UP_LEFT or DOWN_RIGHT) closes the x gap and the y gap
//! at once, so the path takes as many of those as the gaps allow, then
//! finishes with straight runs along x and along y. The result always has
//! `distance + 1` points. When several shortest paths exist this picks one.

use crate::HexCoord;

/// One straight run of identical unit steps.
#[derive(Debug, Clone, Copy)]
struct Leg {
    step: HexCoord,
    remaining: u64,
}

/// Iterator over a shortest path, both endpoints included.
#[derive(Debug, Clone)]
pub struct HexPath {
    current: Option<HexCoord>,
    legs: [Leg; 3],
    leg: usize,
}

impl HexPath {
    pub fn new(from: HexCoord, to: HexCoord) -> Self {
        let mut dx = i64::from(to.x) - i64::from(from.x);
        let mut dy = i64::from(to.y) - i64::from(from.y);

        // Diagonal steps only help while the gaps point in opposite ways.
        let diagonal = if dx.signum() * dy.signum() < 0 {
            let count = dx.abs().min(dy.abs());
            let (sx, sy) = (dx.signum(), dy.signum());
            dx -= sx * count;
            dy -= sy * count;
            Leg {
                step: HexCoord::new(sx as i32, sy as i32),
                remaining: count.unsigned_abs(),
            }
        } else {
            Leg {
                step: HexCoord::ORIGIN,
                remaining: 0,
            }
        };

        let along_x = Leg {
            step: HexCoord::new(dx.signum() as i32, 0),
            remaining: dx.unsigned_abs(),
        };
        let along_y = Leg {
            step: HexCoord::new(0, dy.signum() as i32),
            remaining: dy.unsigned_abs(),
        };

        Self {
            current: Some(from),
            legs: [diagonal, along_x, along_y],
            leg: 0,
        }
    }
}

impl Iterator for HexPath {
    type Item = HexCoord;

    fn next(&mut self) -> Option<Self::Item> {
        let here = self.current?;

        while self.leg < self.legs.len() && self.legs[self.leg].remaining == 0 {
            self.leg += 1;
        }

        self.current = self.legs.get_mut(self.leg).map(|leg| {
            leg.remaining -= 1;
            here + leg.step
        });

        Some(here)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.current {
            Some(_) => 1 + self.legs.iter().map(|leg| leg.remaining as usize).sum::<usize>(),
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for HexPath {}

/// One shortest path from `from` to `to`, inclusive of both.
///
/// ```
/// use hexgrid_core::{path_between_hexes, HexCoord};
///
/// let path = path_between_hexes(HexCoord::new(2, 2), HexCoord::new(3, 5));
/// assert_eq!(path.len(), 5);
/// ```
pub fn path_between_hexes(from: HexCoord, to: HexCoord) -> Vec<HexCoord> {
    HexPath::new(from, to).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(label: &str) -> HexCoord {
        label.parse().unwrap()
    }

    fn assert_shortest(path: &[HexCoord], from: HexCoord, to: HexCoord) {
        assert_eq!(path.len() as u64, from.distance(&to) + 1);
        assert_eq!(path.first(), Some(&from));
        assert_eq!(path.last(), Some(&to));
        for pair in path.windows(2) {
            assert_eq!(pair[0].distance(&pair[1]), 1, "{} -> {} is not a step", pair[0], pair[1]);
        }
    }

    #[test]
    fn straight_path() {
        let path = path_between_hexes(hex("22"), hex("53"));
        let expected: Vec<_> = ["22", "23", "33", "43", "53"].into_iter().map(hex).collect();
        assert_eq!(path, expected);
    }

    #[test]
    fn diagonal_path() {
        let from = hex("16");
        let to = hex("41");
        let path = path_between_hexes(from, to);
        assert_shortest(&path, from, to);
        assert_eq!(path[1], hex("25"));
    }

    #[test]
    fn path_to_self() {
        let p = hex("44");
        assert_eq!(path_between_hexes(p, p), vec![p]);
    }

    #[test]
    fn paths_in_every_direction() {
        let center = HexCoord::new(0, 0);
        for x in -4..=4 {
            for y in -4..=4 {
                let to = HexCoord::new(x, y);
                assert_shortest(&path_between_hexes(center, to), center, to);
            }
        }
    }

    #[test]
    fn iterator_length_is_exact() {
        let mut path = HexPath::new(hex("16"), hex("60"));
        let total = path.len();
        assert_eq!(total as u64, hex("16").distance(&hex("60")) + 1);
        path.next();
        assert_eq!(path.len(), total - 1);
        assert_eq!(path.count(), total - 1);
    }

    #[test]
    fn path_across_the_whole_grid() {
        let from = HexCoord::new(i32::MIN, 0);
        let to = HexCoord::new(i32::MAX, 0);
        let mut path = HexPath::new(from, to);
        assert_eq!(path.len() as u64, u64::from(u32::MAX) + 1);
        assert_eq!(path.next(), Some(from));
        assert_eq!(path.next(), Some(HexCoord::new(i32::MIN + 1, 0)));

        let from = HexCoord::new(i32::MAX, i32::MIN);
        let to = HexCoord::new(i32::MIN + 1, i32::MAX);
        let mut path = HexPath::new(from, to);
        assert_eq!(path.len() as u64, from.distance(&to) + 1);
        assert_eq!(path.next(), Some(from));
        assert_eq!(path.next(), Some(HexCoord::new(i32::MAX - 1, i32::MIN + 1)));
    }
}
