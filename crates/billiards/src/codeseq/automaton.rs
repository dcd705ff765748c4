//! Axis-tracking automaton behind legality and the stability constraint.

use crate::math::Xyz;
use crate::{Error, Result};

/// Automaton state `(prev, curr)`.
///
/// Invariant: `prev != curr`. Both transitions preserve it: an even code
/// number repeats `prev`, an odd one moves to the third axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct AngleState {
    pub prev: Xyz,
    pub curr: Xyz,
}

impl AngleState {
    pub const START: AngleState = AngleState {
        prev: Xyz::X,
        curr: Xyz::Y,
    };

    pub fn new(prev: Xyz, curr: Xyz) -> Result<Self> {
        if prev == curr {
            return Err(Error::SameAxis(prev));
        }
        Ok(Self { prev, curr })
    }

    /// Axis reached after consuming code number `n`.
    #[inline]
    pub fn next_angle(self, n: i32) -> Xyz {
        if n % 2 == 0 {
            self.prev
        } else {
            third(self.prev, self.curr)
        }
    }

    #[inline]
    pub fn step(self, n: i32) -> Self {
        Self {
            prev: self.curr,
            curr: self.next_angle(n),
        }
    }
}

#[inline]
fn third(a: Xyz, b: Xyz) -> Xyz {
    match Xyz::other(a, b) {
        Ok(c) => c,
        Err(_) => unreachable!("automaton state holds equal axes {a}{b}"),
    }
}

/// True iff the automaton returns to `START` after consuming `codes`.
pub(crate) fn is_legal(codes: &[i32]) -> bool {
    codes
        .iter()
        .fold(AngleState::START, |state, &n| state.step(n))
        == AngleState::START
}
