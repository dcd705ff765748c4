//! Code sequences, stability constraints, and cover geometry for periodic
//! billiard trajectories.
//!
//! Layout
//! - `math`: axis alphabets, exact integer linear combinations, trig equations.
//! - `geom`: 2D kernel (points, intervals, segments, convex polygons, rectangles)
//!   with separating-axis intersection tests on open sets.
//! - `codeseq`: validation, canonical form, classification and the stability
//!   constraint of code sequences.
//! - `cover`: dyadic quad-tree squares over `[0, π/2]²` and the catalog parsers.
//! - `backend`: contract for the external service producing polygons and
//!   boundary equations for a code pair.
//! - `storage`: a classified code pair bound to its geometric witness.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; prefer
//!   `api` or `prelude` re-exports in callers.

pub mod api;
pub mod backend;
pub mod cfg;
pub mod codeseq;
pub mod cover;
mod error;
pub mod geom;
pub mod math;
pub mod storage;

pub use error::{Error, Result};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::codeseq::{CodePair, CodeSequence, CodeType, InitialAngles, TriplePair};
    pub use crate::cover::{Catalog, Cover, CoverSquare};
    pub use crate::geom::{ConvexPolygon, Interval, LineSegment, Location, Point, Rectangle};
    pub use crate::math::{LinCom, XyEta, Xyz};
    pub use crate::storage::Storage;
    pub use crate::{Error, Result};
}
