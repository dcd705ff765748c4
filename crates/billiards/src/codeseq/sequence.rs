//! `CodeSequence`: a validated, canonical code sequence.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::automaton::{is_legal, AngleState};
use super::code_type::CodeType;
use super::InitialAngles;
use crate::math::{LinCom, XyEta, Xyz};
use crate::{Error, Result};

/// Ordered, strictly positive code numbers held in canonical form.
///
/// Invariants:
/// - Nonempty, every entry `> 0`, legal under the axis automaton.
/// - Minimal legal period, then the smallest image under rotation and
///   reflection; re-canonicalizing is the identity.
///
/// Ordering is by length first, then elementwise.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CodeSequence {
    code_numbers: Vec<i32>,
}

impl CodeSequence {
    /// Validate `raw` and reduce it to canonical form.
    pub fn new(raw: &[i32]) -> Result<Self> {
        validate(raw)?;
        let period = smallest_period(raw);
        if period < raw.len() {
            tracing::trace!(len = raw.len(), period, "reduced repeated code sequence");
        }
        Ok(Self {
            code_numbers: minimal_image(&raw[..period]),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.code_numbers.len()
    }

    /// Always false; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.code_numbers.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.code_numbers
    }

    pub fn code_numbers(&self) -> impl Iterator<Item = i32> + '_ {
        self.code_numbers.iter().copied()
    }

    /// Exact sum of the code numbers.
    pub fn sum(&self) -> Result<i32> {
        self.code_numbers
            .iter()
            .try_fold(0i32, |acc, &n| acc.checked_add(n))
            .ok_or(Error::overflow("code sequence sum"))
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        self.len() % 2 != 0
    }

    /// First index `i < L/2` such that entries `i` and `i + L/2` are even and
    /// the two arcs between them mirror each other. Odd sequences have none.
    pub fn closed_index(&self) -> Option<usize> {
        if self.is_odd() {
            return None;
        }
        let half = self.len() / 2;
        let c = &self.code_numbers;
        (0..half).find(|&i| c[i] % 2 == 0 && c[i + half] % 2 == 0 && self.mirrored_at(i))
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed_index().is_some()
    }

    /// Stable iff `constraint(X, Y)` vanishes. Odd sequences are always stable.
    pub fn is_stable(&self) -> Result<bool> {
        Ok(self.constraint(Xyz::X, Xyz::Y)?.is_zero())
    }

    pub fn code_type(&self) -> Result<CodeType> {
        let odd = self.is_odd();
        let closed = self.is_closed();
        let stable = self.is_stable()?;
        match CodeType::from_flags(odd, closed, stable) {
            Some(t) => Ok(t),
            None => unreachable!(
                "{self} cannot be classified (odd={odd}, closed={closed}, stable={stable})"
            ),
        }
    }

    /// Integer stability constraint in the `(x, y, eta)` basis, reduced by its
    /// content and with a positive leading coefficient.
    ///
    /// Entries at even indices add their axis, odd indices subtract it; the
    /// axis at index `i >= 2` follows the automaton from `(first, second)`.
    /// Odd-length sequences always give the zero vector.
    pub fn constraint(&self, first: Xyz, second: Xyz) -> Result<LinCom<XyEta>> {
        let mut state = AngleState::new(first, second)?;
        if self.is_odd() {
            return Ok(LinCom::zero());
        }
        let c = &self.code_numbers;
        let mut acc = LinCom::<Xyz>::zero()
            .add(c[0], first)?
            .sub(c[1], second)?;
        for i in 2..c.len() {
            state = state.step(c[i - 1]);
            acc = if i % 2 == 0 {
                acc.add(c[i], state.curr)?
            } else {
                acc.sub(c[i], state.curr)?
            };
        }

        // z = 2·eta − x − y
        let z = acc.coeff(Xyz::Z);
        let x = acc
            .coeff(Xyz::X)
            .checked_sub(z)
            .ok_or(Error::overflow("constraint x coefficient"))?;
        let y = acc
            .coeff(Xyz::Y)
            .checked_sub(z)
            .ok_or(Error::overflow("constraint y coefficient"))?;
        let eta = z
            .checked_mul(2)
            .ok_or(Error::overflow("constraint eta coefficient"))?;
        LinCom::<XyEta>::new([x, y, eta])
            .divide_content()
            .normalize_unit()
    }

    /// `constraint` for a validated angle pair.
    pub fn constraint_for(&self, angles: InitialAngles) -> Result<LinCom<XyEta>> {
        self.constraint(angles.first(), angles.second())
    }

    /// Walk inward from `i + L/2 − 1` and outward from `i + L/2 + 1` until the
    /// walkers meet at `i`, requiring equal entries at each step.
    fn mirrored_at(&self, i: usize) -> bool {
        let c = &self.code_numbers;
        let len = c.len();
        let half = len / 2;
        let mut j = i + half - 1;
        let mut k = (i + half + 1) % len;
        while j != k {
            if c[j] != c[k] {
                return false;
            }
            j -= 1;
            k = (k + 1) % len;
        }
        true
    }
}

impl PartialOrd for CodeSequence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CodeSequence {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_codes(&self.code_numbers, &other.code_numbers)
    }
}

/// Entries separated by single spaces, the backend's wire form.
impl fmt::Display for CodeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut it = self.code_numbers.iter();
        if let Some(first) = it.next() {
            write!(f, "{first}")?;
        }
        for n in it {
            write!(f, " {n}")?;
        }
        Ok(())
    }
}

/// Whitespace-separated integers, validated and canonicalized.
impl FromStr for CodeSequence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let raw = s
            .split_whitespace()
            .map(|tok| {
                tok.parse::<i32>()
                    .map_err(|_| Error::parse("code number", tok))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(&raw)
    }
}

fn validate(raw: &[i32]) -> Result<()> {
    if raw.is_empty() {
        return Err(Error::EmptySequence);
    }
    if let Some((index, &value)) = raw.iter().enumerate().find(|(_, &n)| n <= 0) {
        return Err(Error::NonPositiveEntry { index, value });
    }
    if !is_legal(raw) {
        return Err(Error::IllegalPattern);
    }
    Ok(())
}

/// Smallest divisor `p` of `L` with `2 <= p < L` such that `raw` repeats with
/// period `p` and its `p`-prefix is legal; `L` if there is none.
fn smallest_period(raw: &[i32]) -> usize {
    let len = raw.len();
    (2..len)
        .find(|&p| len % p == 0 && repeats_with_period(raw, p) && is_legal(&raw[..p]))
        .unwrap_or(len)
}

fn repeats_with_period(raw: &[i32], p: usize) -> bool {
    raw.iter().enumerate().skip(p).all(|(i, &n)| n == raw[i % p])
}

/// Smallest of the `2p` rotations of `period` and of its reversal.
fn minimal_image(period: &[i32]) -> Vec<i32> {
    let reversed: Vec<i32> = period.iter().rev().copied().collect();
    let mut best = period.to_vec();
    for base in [period, reversed.as_slice()] {
        for shift in 0..base.len() {
            let rotated = base[shift..].iter().chain(&base[..shift]);
            if rotated.clone().lt(best.iter()) {
                best = rotated.copied().collect();
            }
        }
    }
    best
}

/// Shorter sequences first; equal lengths compare elementwise.
fn compare_codes(a: &[i32], b: &[i32]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
