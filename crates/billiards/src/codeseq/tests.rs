use super::rand::{draw_code_sequence, draw_legal_codes, LengthDist, ReplayToken, SampleCfg};
use super::*;
use crate::math::{LinCom, XyEta, Xyz};
use crate::Error;
use proptest::prelude::*;

fn seq(raw: &[i32]) -> CodeSequence {
    CodeSequence::new(raw).unwrap()
}

#[test]
fn canonical_forms_of_small_sequences() {
    assert_eq!(seq(&[1, 1, 1]).as_slice(), &[1, 1, 1]);
    assert_eq!(seq(&[2, 2]).as_slice(), &[2, 2]);
    assert_eq!(seq(&[1, 1, 3]).as_slice(), &[1, 1, 3]);
    assert_eq!(seq(&[3, 1, 1]).as_slice(), &[1, 1, 3]);
    assert_eq!(seq(&[2, 4]).as_slice(), &[2, 4]);
    assert_eq!(seq(&[4, 2]).as_slice(), &[2, 4]);
}

#[test]
fn repeated_periods_collapse_only_when_legal() {
    assert_eq!(seq(&[1, 1, 1, 1, 1, 1]).as_slice(), &[1, 1, 1]);
    assert_eq!(seq(&[1; 9]).as_slice(), &[1, 1, 1]);
    // [1, 1, 4] repeats but is not legal on its own
    assert_eq!(seq(&[1, 1, 4, 1, 1, 4]).as_slice(), &[1, 1, 4, 1, 1, 4]);
}

#[test]
fn validation_errors() {
    assert_eq!(CodeSequence::new(&[]), Err(Error::EmptySequence));
    assert_eq!(
        CodeSequence::new(&[0]),
        Err(Error::NonPositiveEntry { index: 0, value: 0 })
    );
    assert_eq!(
        CodeSequence::new(&[-1]),
        Err(Error::NonPositiveEntry { index: 0, value: -1 })
    );
    assert_eq!(
        CodeSequence::new(&[0, 1]),
        Err(Error::NonPositiveEntry { index: 0, value: 0 })
    );
    assert_eq!(
        CodeSequence::new(&[-1, 2]),
        Err(Error::NonPositiveEntry { index: 0, value: -1 })
    );
    assert_eq!(
        CodeSequence::new(&[1, 2, 3, 0]),
        Err(Error::NonPositiveEntry { index: 3, value: 0 })
    );
    assert!(matches!(
        CodeSequence::new(&[-1, 2, -3, 4]),
        Err(Error::NonPositiveEntry { index: 0, .. })
    ));
}

#[test]
fn illegal_patterns_are_rejected() {
    let illegal: &[&[i32]] = &[
        &[1],
        &[2],
        &[3, 5],
        &[1, 2],
        &[4, 7],
        &[1, 3, 8],
        &[15, 4, 7],
        &[32, 17, 81],
        &[3, 12, 18],
        &[8, 21, 78],
        &[38, 52, 25],
        &[2, 4, 8],
        &[15, 37, 55, 21],
        &[15, 37, 55, 20],
        &[15, 37, 54, 21],
        &[15, 38, 55, 21],
        &[16, 37, 55, 21],
    ];
    for raw in illegal {
        assert_eq!(CodeSequence::new(raw), Err(Error::IllegalPattern), "{raw:?}");
    }
}

#[test]
fn classification_of_known_sequences() {
    let cases: &[(&[i32], CodeType)] = &[
        (&[1, 1, 1], CodeType::OpenStableOdd),
        (&[2, 2], CodeType::ClosedNotStable),
        (&[1, 1, 2, 1, 3, 2], CodeType::OpenNotStable),
        (&[1, 1, 1, 1, 2, 1, 1, 1, 1, 2], CodeType::ClosedStable),
        (&[1, 1, 2, 2, 1, 1, 3, 3], CodeType::OpenStableNotOdd),
    ];
    for (raw, expected) in cases {
        let s = seq(raw);
        assert_eq!(s.code_type().unwrap(), *expected, "{s}");
        assert_eq!(expected.is_stable(), s.is_stable().unwrap());
        assert_eq!(expected.is_closed(), s.is_closed());
    }
}

#[test]
fn closed_index_of_known_sequences() {
    assert_eq!(seq(&[2, 2]).closed_index(), Some(0));
    assert_eq!(seq(&[1, 1, 1, 1, 2, 1, 1, 1, 1, 2]).closed_index(), Some(4));
    assert_eq!(seq(&[1, 1, 1]).closed_index(), None);
    assert_eq!(seq(&[1, 1, 2, 1, 3, 2]).closed_index(), None);
}

#[test]
fn constraints_of_known_sequences() {
    let c = seq(&[2, 2]).constraint(Xyz::X, Xyz::Y).unwrap();
    assert_eq!(c, LinCom::<XyEta>::new([1, -1, 0]));
    // 2z − 2y with z = 2·eta − x − y, reduced and sign-normalized
    let c = seq(&[2, 2]).constraint(Xyz::Z, Xyz::Y).unwrap();
    assert_eq!(c, LinCom::<XyEta>::new([1, 2, -2]));
    let c = seq(&[1, 1, 2, 1, 3, 2]).constraint(Xyz::X, Xyz::Y).unwrap();
    assert_eq!(c, LinCom::<XyEta>::new([2, -1, 0]));
    assert!(seq(&[1, 1, 1]).constraint(Xyz::Y, Xyz::X).unwrap().is_zero());
    assert_eq!(
        seq(&[2, 2]).constraint(Xyz::Y, Xyz::Y),
        Err(Error::SameAxis(Xyz::Y))
    );
    let pair = CodePair::new(seq(&[2, 2]), InitialAngles::XY);
    assert_eq!(pair.constraint().unwrap(), LinCom::new([1, -1, 0]));
}

#[test]
fn ordering_is_length_then_lexicographic() {
    let mut v = vec![seq(&[2, 4]), seq(&[1, 1, 1]), seq(&[2, 2]), seq(&[1, 1, 3])];
    v.sort();
    let got: Vec<String> = v.iter().map(ToString::to_string).collect();
    assert_eq!(got, ["2 2", "2 4", "1 1 1", "1 1 3"]);
}

#[test]
fn parse_and_display() {
    let s: CodeSequence = "  3 1\t1 ".parse().unwrap();
    assert_eq!(s.to_string(), "1 1 3");
    assert_eq!(s.sum().unwrap(), 5);
    assert!("1 x 1".parse::<CodeSequence>().is_err());
    assert_eq!("".parse::<CodeSequence>(), Err(Error::EmptySequence));

    let pair = CodePair::new(s.clone(), "zy".parse().unwrap());
    assert_eq!(pair.to_string(), "1 1 3, zy");
    let triple = TriplePair::new(pair.clone(), pair.clone(), pair);
    assert_eq!(triple.to_string(), "1 1 3, zy; 1 1 3, zy; 1 1 3, zy");
}

#[test]
fn sum_overflow_is_reported() {
    let s = seq(&[i32::MAX - 1, i32::MAX - 1]);
    assert!(matches!(s.sum(), Err(Error::Overflow { .. })));
}

fn sampler() -> SampleCfg {
    SampleCfg {
        length: LengthDist::Uniform { min: 2, max: 14 },
        max_code_number: 11,
        max_attempts: 1024,
    }
}

fn rotate(v: &[i32], k: usize) -> Vec<i32> {
    let k = k % v.len();
    v[k..].iter().chain(&v[..k]).copied().collect()
}

proptest! {
    #[test]
    fn canonical_form_is_idempotent(seed in any::<u64>(), index in 0u64..1_000) {
        if let Some(s) = draw_code_sequence(sampler(), ReplayToken { seed, index }) {
            prop_assert_eq!(CodeSequence::new(s.as_slice()).unwrap(), s);
        }
    }

    #[test]
    fn canonical_form_is_dihedral_invariant(seed in any::<u64>(), shift in 0usize..32, flip in any::<bool>()) {
        if let Some(raw) = draw_legal_codes(sampler(), ReplayToken { seed, index: 0 }) {
            let base = CodeSequence::new(&raw).unwrap();
            let mut moved = rotate(&raw, shift);
            if flip {
                moved.reverse();
            }
            prop_assert_eq!(CodeSequence::new(&moved).unwrap(), base);
        }
    }

    #[test]
    fn canonical_length_divides_input_length(seed in any::<u64>(), reps in 1usize..4) {
        if let Some(raw) = draw_legal_codes(sampler(), ReplayToken { seed, index: 1 }) {
            let repeated: Vec<i32> = raw.iter().copied().cycle().take(raw.len() * reps).collect();
            let s = CodeSequence::new(&repeated).unwrap();
            prop_assert_eq!(repeated.len() % s.len(), 0);
            prop_assert_eq!(s, CodeSequence::new(&raw).unwrap());
        }
    }

    #[test]
    fn flags_are_consistent(seed in any::<u64>()) {
        if let Some(s) = draw_code_sequence(sampler(), ReplayToken { seed, index: 2 }) {
            let stable = s.is_stable().unwrap();
            prop_assert_eq!(stable, s.constraint(Xyz::X, Xyz::Y).unwrap().is_zero());
            prop_assert_eq!(s.is_closed(), s.closed_index().is_some());
            if s.is_odd() {
                prop_assert!(stable);
                prop_assert!(!s.is_closed());
            }
            let t = s.code_type().unwrap();
            prop_assert_eq!(t.is_stable(), stable);
            prop_assert_eq!(t.is_closed(), s.is_closed());
        }
    }
}
