//! The smallest hexagon containing a set of points.
//!
//! # Feasibility
//!
//! `cover(r)` answers "is there a center whose radius-`r` hexagon holds
//! every point?". The centers that work form a region bounded by the rings
//! of radius `r` around the input points, so it is enough to test the
//! union of those rings as candidate centers.
//!
//! `cover` is monotone: if radius `r` works, so does `r + 1`. The minimal
//! radius is therefore found either by stepping `r` up one at a time, or by
//! doubling `r` until it works and then bisecting the last gap.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::{Error, HexCoord, Hexagon, Result};

/// How the solver narrows down the minimal radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnclosingSearch {
    /// Double the radius until it fits, then binary search.
    #[default]
    Bisect,
    /// Try every radius from 1 upward.
    Linear,
}

/// Minimal enclosing hexagon search.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinEnclosingSolver {
    pub search: EnclosingSearch,
}

impl MinEnclosingSolver {
    pub const fn new(search: EnclosingSearch) -> Self {
        Self { search }
    }

    /// Find the minimal-radius hexagon containing every point.
    ///
    /// Duplicate points are ignored. A single distinct point yields the
    /// radius-0 hexagon on it. Fails on empty input. Among centers that work
    /// at the minimal radius, the smallest by `(x, y)` is returned.
    pub fn solve<I>(&self, points: I) -> Result<Hexagon>
    where
        I: IntoIterator<Item = HexCoord>,
    {
        let points: Vec<HexCoord> = points
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        match points.as_slice() {
            [] => return Err(Error::EmptyPointSet),
            [only] => return Ok(Hexagon::point(*only)),
            _ => {}
        }

        // Two distinct points never fit in a radius-0 hexagon.
        let hexagon = match self.search {
            EnclosingSearch::Bisect => bisect(&points),
            EnclosingSearch::Linear => linear(&points),
        };
        debug!(points = points.len(), %hexagon, "minimal enclosing hexagon");
        Ok(hexagon)
    }
}

/// Minimal enclosing hexagon with the default search.
///
/// ```
/// use hexgrid_core::{min_containing_hexagon, HexCoord};
///
/// let points = ["13", "32", "45", "18"].map(|p| p.parse::<HexCoord>().unwrap());
/// assert_eq!(min_containing_hexagon(points).unwrap().radius, 3);
/// ```
pub fn min_containing_hexagon<I>(points: I) -> Result<Hexagon>
where
    I: IntoIterator<Item = HexCoord>,
{
    MinEnclosingSolver::default().solve(points)
}

/// A radius-`radius` hexagon holding every point, if one exists.
fn cover(points: &[HexCoord], radius: u64) -> Option<Hexagon> {
    let candidates: BTreeSet<HexCoord> = points
        .iter()
        .flat_map(|&p| Hexagon::new(p, radius).ring())
        .collect();
    trace!(radius, candidates = candidates.len(), "testing cover");

    candidates
        .into_iter()
        .map(|center| Hexagon::new(center, radius))
        .find(|hexagon| points.iter().all(|&p| hexagon.contains(p)))
}

fn linear(points: &[HexCoord]) -> Hexagon {
    let mut radius = 1;
    loop {
        if let Some(hexagon) = cover(points, radius) {
            return hexagon;
        }
        radius += 1;
    }
}

fn bisect(points: &[HexCoord]) -> Hexagon {
    // A hexagon around any one input point reaching the farthest one always
    // works, so doubling never needs to pass this radius.
    let ceiling = points
        .iter()
        .map(|p| points[0].distance(p))
        .max()
        .unwrap_or(1);

    // Double upward until some radius works.
    let mut low = 1;
    let mut high = 1;
    let mut best = loop {
        match cover(points, high) {
            Some(hexagon) => break hexagon,
            None => {
                low = high + 1;
                high = high.saturating_mul(2).min(ceiling);
            }
        }
    };
    debug!(low, high, "enclosing radius bracketed");

    // Invariant: `best` has radius `high`, and every radius below `low` fails.
    while low < high {
        let mid = low + (high - low) / 2;
        match cover(points, mid) {
            Some(hexagon) => {
                high = mid;
                best = hexagon;
            }
            None => low = mid + 1,
        }
    }
    best
}
