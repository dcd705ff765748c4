//! Exact integer linear combinations over a ternary symbol alphabet.
//!
//! All arithmetic is checked: the constraints derived from code sequences are
//! used in proofs, so wraparound must surface as `Error::Overflow`.

use std::fmt;
use std::marker::PhantomData;

use super::symbols::{Symbol, ALPHABET_LEN};
use crate::{Error, Result};

/// Integer vector `Σ c_s · s` over the alphabet `S`.
///
/// Values are immutable; every operation returns a new combination.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinCom<S> {
    coeffs: [i32; ALPHABET_LEN],
    _alphabet: PhantomData<S>,
}

impl<S: Symbol> LinCom<S> {
    /// Coefficients in alphabet order (`S::ALL`).
    #[inline]
    pub fn new(coeffs: [i32; ALPHABET_LEN]) -> Self {
        Self {
            coeffs,
            _alphabet: PhantomData,
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new([0; ALPHABET_LEN])
    }

    #[inline]
    pub fn coeff(&self, symbol: S) -> i32 {
        self.coeffs[symbol.index()]
    }

    #[inline]
    pub fn coeffs(&self) -> [i32; ALPHABET_LEN] {
        self.coeffs
    }

    /// `self + coeff·symbol`.
    pub fn add(self, coeff: i32, symbol: S) -> Result<Self> {
        self.update(symbol, |c| c.checked_add(coeff), "lincom add")
    }

    /// `self − coeff·symbol`.
    pub fn sub(self, coeff: i32, symbol: S) -> Result<Self> {
        self.update(symbol, |c| c.checked_sub(coeff), "lincom sub")
    }

    /// Multiply every coefficient by `s`.
    pub fn scale(self, s: i32) -> Result<Self> {
        let mut coeffs = self.coeffs;
        for c in &mut coeffs {
            *c = c.checked_mul(s).ok_or(Error::overflow("lincom scale"))?;
        }
        Ok(Self::new(coeffs))
    }

    /// Sign of the first nonzero coefficient in alphabet order; 0 for the zero vector.
    pub fn unit(&self) -> i32 {
        self.coeffs
            .iter()
            .find(|&&c| c != 0)
            .map_or(0, |c| c.signum())
    }

    /// Scale by `unit()`, making the first nonzero coefficient positive.
    pub fn normalize_unit(self) -> Result<Self> {
        match self.unit() {
            // zero vector stays zero
            0 | 1 => Ok(self),
            u => self.scale(u),
        }
    }

    /// Gcd of the absolute coefficients; 0 only for the zero vector.
    ///
    /// Returned as `u32` so that `|i32::MIN|` is representable.
    pub fn content(&self) -> u32 {
        self.coeffs
            .iter()
            .fold(0u32, |g, &c| gcd(g, c.unsigned_abs()))
    }

    /// Divide by `content()`. Signs are preserved; never overflows since the
    /// quotients are bounded by the original magnitudes.
    pub fn divide_content(self) -> Self {
        let g = i64::from(self.content());
        if g == 0 {
            return self;
        }
        let mut coeffs = self.coeffs;
        for c in &mut coeffs {
            // |c / g| <= |c|, so the quotient fits back into i32
            *c = (i64::from(*c) / g) as i32;
        }
        Self::new(coeffs)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0)
    }

    fn update(
        self,
        symbol: S,
        op: impl FnOnce(i32) -> Option<i32>,
        name: &'static str,
    ) -> Result<Self> {
        let mut coeffs = self.coeffs;
        let slot = &mut coeffs[symbol.index()];
        *slot = op(*slot).ok_or(Error::overflow(name))?;
        Ok(Self::new(coeffs))
    }
}

impl<S: Symbol> Default for LinCom<S> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<S: Symbol> fmt::Debug for LinCom<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut m = f.debug_map();
        for s in S::ALL {
            m.entry(&s, &self.coeff(s));
        }
        m.finish()
    }
}

impl<S: Symbol> fmt::Display for LinCom<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.coeffs;
        write!(f, "[{a}, {b}, {c}]")
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
