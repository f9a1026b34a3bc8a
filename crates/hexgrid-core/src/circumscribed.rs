//! The smallest hexagon whose boundary passes through three given points.
//!
//! # Search
//!
//! A hexagon through `a` has its center on the ring of the same radius
//! around `a`. For each candidate radius, walk that ring and keep the first
//! center that is also exactly `radius` away from `b` and from `c`.
//!
//! Radii run from half the smallest pairwise distance up to the largest
//! pairwise distance. No answer can lie outside that bracket, so an empty
//! search means no such hexagon exists.

use tracing::{debug, trace};

use crate::{HexCoord, Hexagon};

/// Radii that can possibly carry a solution, inclusive.
fn radius_bracket(a: HexCoord, b: HexCoord, c: HexCoord) -> (u64, u64) {
    let pairwise = [a.distance(&b), b.distance(&c), c.distance(&a)];
    let shortest = pairwise.iter().copied().min().unwrap_or(0);
    let longest = pairwise.iter().copied().max().unwrap_or(0);
    (shortest / 2, longest)
}

/// Find the minimal-radius hexagon with `a`, `b` and `c` all on its boundary.
///
/// Three equal points give the radius-0 hexagon at that point. Returns
/// `None` when no hexagon passes through all three. If several centers
/// share the minimal radius, the first one met on the ring walk wins.
///
/// ```
/// use hexgrid_core::{hexagon_by_three_points, HexCoord, Hexagon};
///
/// let a: HexCoord = "13".parse().unwrap();
/// let b: HexCoord = "32".parse().unwrap();
/// let c: HexCoord = "44".parse().unwrap();
/// assert_eq!(
///     hexagon_by_three_points(a, b, c),
///     Some(Hexagon::new("24".parse().unwrap(), 2)),
/// );
/// ```
pub fn hexagon_by_three_points(a: HexCoord, b: HexCoord, c: HexCoord) -> Option<Hexagon> {
    if a == b && b == c {
        return Some(Hexagon::point(a));
    }

    let (low, high) = radius_bracket(a, b, c);
    debug!(%a, %b, %c, low, high, "searching circumscribed hexagon");

    for radius in low..=high {
        trace!(radius, "probing radius");
        let found = Hexagon::new(a, radius)
            .ring()
            .find(|center| center.distance(&b) == radius && center.distance(&c) == radius);

        if let Some(center) = found {
            let hexagon = Hexagon::new(center, radius);
            debug!(%hexagon, "circumscribed hexagon found");
            return Some(hexagon);
        }
    }

    debug!("no hexagon passes through all three points");
    None
}
