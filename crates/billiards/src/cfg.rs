//! Tolerance and precision defaults.
//!
//! Policy
//! - Defaults are fixed constants to avoid “tolerance juggling”. Changing
//!   `POSITIVE_EPS` changes which points count as satisfying the exact-region
//!   equations, so it stays tied to the angle domain `[0, π/2]` in radians.

/// Slack for `Storage::is_positive`: an equation value `v` passes iff `v >= -POSITIVE_EPS`.
pub const POSITIVE_EPS: f64 = 1e-14;

/// Relative collinearity slack in the convexity check: a vertex at offset `d`
/// from an edge `e` counts as on the edge line iff `|e × d| <= CONVEXITY_EPS·|e|·|d|`.
pub const CONVEXITY_EPS: f64 = 1e-12;

/// Deepest dyadic level a `CoverSquare` may reach; keeps `1 << denom` and the
/// numerators inside `i64`.
pub const MAX_COVER_DEPTH: u8 = 60;
