//! Code sequences: validation, canonical form, and classification.
//!
//! Purpose
//! - A code sequence is the itinerary of a periodic billiard trajectory as a
//!   list of positive integers. Legality is decided by an axis-tracking
//!   automaton over `Xyz`; the canonical representative is the minimal legal
//!   period, minimised over rotations and reflections.
//! - Classification (`CodeType`) combines parity of the length, the existence
//!   of a time-reversal axis (`closed_index`), and stability (vanishing of the
//!   integer `constraint`).
//!
//! Layout
//! - `automaton`: the `(prev, curr)` axis state machine.
//! - `sequence`: `CodeSequence` and its derived quantities.
//! - `angles`, `pair`, `code_type`: the small value types around it.
//! - `rand`: reproducible sampler of legal sequences for tests and benches.

mod angles;
mod automaton;
mod code_type;
mod pair;
pub mod rand;
mod sequence;

pub use angles::InitialAngles;
pub use code_type::CodeType;
pub use pair::{CodePair, TriplePair};
pub use sequence::CodeSequence;

#[cfg(test)]
mod tests;
