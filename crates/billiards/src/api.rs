//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for project-internal
//!   callers such as the CLI. Breaking changes are allowed and expected.
//! - Prefer these re-exports for clarity and consistency across tools.

// Code sequences
pub use crate::codeseq::{CodePair, CodeSequence, CodeType, InitialAngles, TriplePair};
// Random legal sequences
pub use crate::codeseq::rand::{
    draw_code_sequence, draw_legal_codes, LengthDist, ReplayToken as CodeReplay, SampleCfg,
};
// Exact arithmetic
pub use crate::math::{Equation, LinCom, Trig, TrigTerm, XyEta, Xyz};
// 2D geometry
pub use crate::geom::{ConvexPolygon, Interval, LineSegment, Location, Point, Rectangle};
// Covers and catalogs
pub use crate::cover::catalog::{
    parse_cover, parse_initial_angles, parse_polygon, parse_rectangle, parse_stables,
    parse_triples,
};
pub use crate::cover::{Catalog, Cover, CoverLeaf, CoverSquare};
// Backend contract and storage
pub use crate::backend::{rational_to_radians, Backend, CodeInfo, CoverDescriptor};
pub use crate::storage::{Shape, Storage};
