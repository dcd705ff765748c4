//! Dyadic covers of the angle domain `[0, π/2]²`.
//!
//! Purpose
//! - `CoverSquare` names one cell of the quad-tree exactly (integer numerators
//!   over a power of two), so covers can be stored, compared, and sent to the
//!   backend without floating-point drift.
//! - `catalog` turns the four text files of a cover catalog into typed values:
//!   the covered polygon, the stable pairs, the bifurcation triples, and the
//!   assignment of leaves to them.
//!
//! Conventions
//! - Children are always listed upper-left, upper-right, lower-left,
//!   lower-right; the catalog's prefix grammar relies on that order.
//! - Containment is strict, matching the open-set convention of `geom`.

pub mod catalog;
mod square;

pub use catalog::{Catalog, Cover, CoverLeaf};
pub use square::CoverSquare;
