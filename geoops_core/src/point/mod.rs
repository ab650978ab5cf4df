//! Vector arithmetic, ordering and equality for 2D points.
//!
//! The functions operate on [`geo::Coord`] for any coordinate number type, so they
//! work on integer grids as well as floating-point geometry. Ordering is purely
//! lexicographic (x first, then y) and is meant for sorting and map keys, not as a
//! notion of geometric proximity.

mod algebra;
mod lex_point;

pub use algebra::*;
pub use lex_point::*;
