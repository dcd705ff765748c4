use std::fmt;
use std::str::FromStr;

use crate::math::Xyz;
use crate::{Error, Result};

/// Starting pair `(first, second)` of the automaton; the axes are distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InitialAngles {
    first: Xyz,
    second: Xyz,
}

impl InitialAngles {
    pub const XY: InitialAngles = InitialAngles {
        first: Xyz::X,
        second: Xyz::Y,
    };

    pub fn new(first: Xyz, second: Xyz) -> Result<Self> {
        if first == second {
            return Err(Error::SameAxis(first));
        }
        Ok(Self { first, second })
    }

    #[inline]
    pub fn first(&self) -> Xyz {
        self.first
    }

    #[inline]
    pub fn second(&self) -> Xyz {
        self.second
    }
}

impl fmt::Display for InitialAngles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

/// Exactly one of the six lowercase labels `"xy"`, `"xz"`, `"yx"`, `"yz"`,
/// `"zx"`, `"zy"`; no surrounding whitespace.
impl FromStr for InitialAngles {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::parse("initial angles", s);
        let mut chars = s.chars();
        let (Some(a), Some(b), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(bad());
        };
        let first = Xyz::from_char(a).ok_or_else(bad)?;
        let second = Xyz::from_char(b).ok_or_else(bad)?;
        Self::new(first, second)
    }
}
