//! Hexgrid Core
//!
//! Exact integer geometry on a flat-topped hexagonal grid.
//!
//! # Coordinates
//!
//! Points are stored as two axes (x, y) with an implicit third axis
//! z = -(x + y). Distance, alignment and movement all work on whole grid
//! steps; nothing here is approximate.
//!
//! # Building Blocks
//!
//! - [`HexCoord`]: a grid point, with distance and movement
//! - [`Direction`]: the six axis directions plus an `Incorrect` marker
//! - [`HexSegment`]: an unordered pair of points, classified by alignment
//! - [`Hexagon`]: a center and a radius, with containment and ring walks
//!
//! # Searches
//!
//! - [`path_between_hexes`]: one shortest path between two points
//! - [`hexagon_by_three_points`]: the smallest hexagon whose boundary
//!   passes through three points
//! - [`min_containing_hexagon`]: the smallest hexagon holding a point set
//!
//! The grid is unbounded. Every operation is a pure function of its inputs.

mod circumscribed;
mod coord;
mod direction;
mod enclosing;
mod error;
mod hexagon;
mod path;
mod segment;

pub use circumscribed::hexagon_by_three_points;
pub use coord::{distance, HexCoord};
pub use direction::Direction;
pub use enclosing::{min_containing_hexagon, EnclosingSearch, MinEnclosingSolver};
pub use error::{Error, Result};
pub use hexagon::{area, ring_len, Hexagon, Ring};
pub use path::{path_between_hexes, HexPath};
pub use segment::HexSegment;

/// Number of real directions (and of neighbors per coordinate).
pub const DIRECTIONS: usize = 6;

const _: () = assert!(Direction::ALL.len() == DIRECTIONS);
const _: () = assert!(Direction::UNIT_OFFSETS.len() == DIRECTIONS);
