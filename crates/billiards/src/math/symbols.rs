//! Symbol alphabets indexing `LinCom` coefficients.

use std::fmt;

use crate::{Error, Result};

/// Number of symbols in every alphabet used with `LinCom`.
pub const ALPHABET_LEN: usize = 3;

/// A fixed, ordered alphabet. `index` is the coefficient slot and defines the
/// order used by `LinCom::unit`.
pub trait Symbol: Copy + Eq + fmt::Debug {
    const ALL: [Self; ALPHABET_LEN];

    fn index(self) -> usize;
}

/// The three angles of the triangle, used as automaton states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Xyz {
    X,
    Y,
    Z,
}

impl Xyz {
    /// The unique axis different from both `a` and `b`.
    pub fn other(a: Xyz, b: Xyz) -> Result<Xyz> {
        use Xyz::*;
        match (a, b) {
            (X, Y) | (Y, X) => Ok(Z),
            (X, Z) | (Z, X) => Ok(Y),
            (Y, Z) | (Z, Y) => Ok(X),
            _ => Err(Error::SameAxis(a)),
        }
    }

    /// Lowercase labels only.
    pub fn from_char(c: char) -> Option<Xyz> {
        match c {
            'x' => Some(Xyz::X),
            'y' => Some(Xyz::Y),
            'z' => Some(Xyz::Z),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Xyz::X => 'x',
            Xyz::Y => 'y',
            Xyz::Z => 'z',
        }
    }
}

impl Symbol for Xyz {
    const ALL: [Self; ALPHABET_LEN] = [Xyz::X, Xyz::Y, Xyz::Z];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Xyz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Constraint basis after eliminating `z = 2·eta − x − y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum XyEta {
    X,
    Y,
    Eta,
}

impl Symbol for XyEta {
    const ALL: [Self; ALPHABET_LEN] = [XyEta::X, XyEta::Y, XyEta::Eta];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for XyEta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            XyEta::X => "x",
            XyEta::Y => "y",
            XyEta::Eta => "eta",
        };
        f.write_str(s)
    }
}
