//! Random legal code sequences (parity rejection + replay tokens).
//!
//! Purpose
//! - Feed property tests and benches with reproducible legal sequences.
//!
//! Model
//! - Legality depends only on the parity of each code number, so a parity
//!   pattern of the requested length is drawn until the automaton closes, and
//!   the values are then filled in with matching parity.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::automaton::is_legal;
use super::CodeSequence;

/// Length distribution.
#[derive(Clone, Copy, Debug)]
pub enum LengthDist {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl LengthDist {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            LengthDist::Fixed(n) => n.max(2),
            LengthDist::Uniform { min, max } => {
                let lo = min.max(2);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub length: LengthDist,
    /// Largest code number drawn. Values below 2 are raised to 2.
    pub max_code_number: i32,
    /// Parity patterns tried before giving up.
    pub max_attempts: usize,
}
impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            length: LengthDist::Uniform { min: 2, max: 12 },
            max_code_number: 9,
            max_attempts: 256,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw raw legal code numbers (not canonicalized).
///
/// Returns `None` if no legal parity pattern was hit within `max_attempts`;
/// some lengths (e.g. 1) admit none.
pub fn draw_legal_codes(cfg: SampleCfg, tok: ReplayToken) -> Option<Vec<i32>> {
    let mut rng = tok.to_std_rng();
    let len = cfg.length.sample(&mut rng);
    let max = cfg.max_code_number.max(2);
    for _ in 0..cfg.max_attempts.max(1) {
        // 1 for odd, 2 for even: the smallest representative of each parity.
        let pattern: Vec<i32> = (0..len)
            .map(|_| if rng.gen::<bool>() { 1 } else { 2 })
            .collect();
        if !is_legal(&pattern) {
            continue;
        }
        let codes = pattern
            .into_iter()
            .map(|p| {
                let slots = (max - p) / 2;
                p + 2 * rng.gen_range(0..=slots)
            })
            .collect();
        return Some(codes);
    }
    tracing::debug!(len, attempts = cfg.max_attempts, "no legal parity pattern");
    None
}

/// Draw a canonical `CodeSequence`.
pub fn draw_code_sequence(cfg: SampleCfg, tok: ReplayToken) -> Option<CodeSequence> {
    let codes = draw_legal_codes(cfg, tok)?;
    CodeSequence::new(&codes).ok()
}
