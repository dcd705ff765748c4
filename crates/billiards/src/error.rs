//! Error types for the billiards crate.

use thiserror::Error;

use crate::codeseq::CodeType;
use crate::math::Xyz;

/// Result type for billiards operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by construction and arithmetic in the core.
///
/// Every variant is reported at the failing operation; nothing in the crate
/// retries or substitutes defaults.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A code sequence needs at least one code number.
    #[error("empty code sequence")]
    EmptySequence,

    /// Code numbers must be strictly positive.
    #[error("non-positive code number {value} at index {index}")]
    NonPositiveEntry { index: usize, value: i32 },

    /// The axis automaton does not return to its start state.
    #[error("illegal code sequence pattern")]
    IllegalPattern,

    /// Checked integer arithmetic overflowed.
    #[error("integer overflow in {op}")]
    Overflow { op: &'static str },

    /// A convex polygon needs at least three vertices.
    #[error("convex polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    /// The vertices do not describe a convex polygon in a consistent winding.
    #[error("vertices do not form a convex polygon")]
    NotConvex,

    /// A line segment is built from exactly two points.
    #[error("line segment needs exactly 2 points, got {0}")]
    SegmentPointCount(usize),

    /// Two axes that must differ are the same.
    #[error("axes must be distinct, got {0} twice")]
    SameAxis(Xyz),

    /// Textual input could not be parsed.
    #[error("cannot parse {what} from {input:?}")]
    Parse { what: &'static str, input: String },

    /// A cover catalog is structurally invalid.
    #[error("malformed cover catalog: {0}")]
    Catalog(String),

    /// A storage variant that does not match the code's stability.
    #[error("{code_type} code cannot be stored as {variant}")]
    ShapeMismatch {
        code_type: CodeType,
        variant: &'static str,
    },

    /// Subdividing past the supported dyadic precision.
    #[error("cover square depth {0} exceeds the supported maximum")]
    TooDeep(u8),
}

impl Error {
    pub(crate) fn parse(what: &'static str, input: impl Into<String>) -> Self {
        Error::Parse {
            what,
            input: input.into(),
        }
    }

    pub(crate) fn overflow(op: &'static str) -> Self {
        Error::Overflow { op }
    }
}
