use std::fmt;

use super::{CodeSequence, InitialAngles};
use crate::math::{LinCom, XyEta};
use crate::Result;

/// A canonical code sequence with the automaton's starting axes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodePair {
    pub sequence: CodeSequence,
    pub angles: InitialAngles,
}

impl CodePair {
    #[inline]
    pub fn new(sequence: CodeSequence, angles: InitialAngles) -> Self {
        Self { sequence, angles }
    }

    /// Stability constraint for these starting axes.
    pub fn constraint(&self) -> Result<LinCom<XyEta>> {
        self.sequence
            .constraint(self.angles.first(), self.angles.second())
    }
}

impl fmt::Display for CodePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.sequence, self.angles)
    }
}

/// Bifurcation triple: two stable pairs around an unstable one sharing a boundary.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriplePair {
    pub stable_neg: CodePair,
    pub unstable: CodePair,
    pub stable_pos: CodePair,
}

impl TriplePair {
    #[inline]
    pub fn new(stable_neg: CodePair, unstable: CodePair, stable_pos: CodePair) -> Self {
        Self {
            stable_neg,
            unstable,
            stable_pos,
        }
    }

    /// The three pairs in `neg, unstable, pos` order.
    pub fn pairs(&self) -> [&CodePair; 3] {
        [&self.stable_neg, &self.unstable, &self.stable_pos]
    }
}

impl fmt::Display for TriplePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; {}; {}",
            self.stable_neg, self.unstable, self.stable_pos
        )
    }
}
