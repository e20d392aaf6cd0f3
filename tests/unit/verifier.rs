//! Verifier behavior on hand-built sequences.
//!
//! Each fixture breaks exactly one constraint (or none), so the tests can pin
//! which pass reports it.

use super::common::{
    alternating, assert_pairwise_unique, parse, IMBALANCED_40, NINE_RUN_40, VALID_40,
};
use bitloom::{check, check_balance, check_runs, check_unique, verify, Bit, Violation};

// ============================================================================
// ACCEPTANCE
// ============================================================================

#[test]
fn valid_40_bit_sequence_is_accepted() {
    let bits = parse(VALID_40);
    assert!(verify(&bits));
    // 9 windows, 36 pairs, all distinct.
    assert_pairwise_unique(&bits);
}

#[test]
fn verify_is_pure() {
    for fixture in [VALID_40, IMBALANCED_40, NINE_RUN_40] {
        let bits = parse(fixture);
        let first = verify(&bits);
        let second = verify(&bits);
        assert_eq!(first, second, "verify changed its answer on {}", fixture);
    }
}

// ============================================================================
// BALANCE
// ============================================================================

#[test]
fn window_with_19_ones_fails_balance_first() {
    let bits = parse(IMBALANCED_40);
    assert!(!verify(&bits));
    match check(&bits) {
        Err(Violation::Imbalance { start, ones, zeros }) => {
            assert_eq!(start, 0);
            assert_eq!((ones, zeros), (19, 13));
        }
        other => panic!("expected an imbalance, got {:?}", other),
    }
}

#[test]
fn all_zero_window_is_rejected() {
    let bits = vec![Bit::Zero; 32];
    assert!(!verify(&bits));
    assert_eq!(
        check_balance(&bits),
        Err(Violation::Imbalance {
            start: 0,
            ones: 0,
            zeros: 32
        })
    );
}

#[test]
fn imbalance_of_exactly_four_is_allowed() {
    // 18 ones, 14 zeros in the only window.
    let mut bits = alternating(32);
    bits[0] = Bit::One;
    bits[2] = Bit::One;
    assert_eq!(check_balance(&bits), Ok(()));
}

// ============================================================================
// UNIQUENESS
// ============================================================================

#[test]
fn repeated_window_is_rejected_with_both_positions() {
    let bits = alternating(40);
    assert_eq!(check_balance(&bits), Ok(()));
    assert_eq!(
        check_unique(&bits),
        Err(Violation::DuplicateWindow {
            start: 2,
            first_start: 0,
            value: 0x5555_5555
        })
    );
    assert!(!verify(&bits));
}

#[test]
fn single_window_is_trivially_unique() {
    assert_eq!(check_unique(&alternating(32)), Ok(()));
}

// ============================================================================
// RUNS
// ============================================================================

#[test]
fn nine_identical_bits_fail_only_the_run_check() {
    let bits = parse(NINE_RUN_40);
    assert_eq!(check_balance(&bits), Ok(()));
    assert_eq!(check_unique(&bits), Ok(()));
    assert!(!verify(&bits));
    assert!(matches!(
        check(&bits),
        Err(Violation::RunTooLong {
            start: 7,
            position: 15,
            bit: Bit::One
        })
    ));
}

#[test]
fn trailing_run_of_eight_is_allowed() {
    // NINE_RUN_40 ends with eight zeros; shortening the ones run fixes it.
    let mut bits = parse(NINE_RUN_40);
    assert!(bits.ends_with(&[Bit::Zero; 8]));
    bits[7] = Bit::Zero;
    assert_eq!(check_runs(&bits), Ok(()));
}

#[test]
fn run_check_applies_below_window_length() {
    let bits = vec![Bit::One; 9];
    assert!(!verify(&bits));
    assert!(verify(&bits[..8]));
}
