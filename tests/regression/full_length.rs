//! Full-length generation: repeated trials and brute-force checks.

use bitloom::{generate, generate_seeded, verify, VerifiedBits, DEFAULT_LENGTH, MAX_RUN};

use super::common::{
    all_window_values, assert_balanced, assert_sorted_unique, generated, longest_run,
};

const TRIALS: usize = 20;

#[test]
fn entropy_generation_succeeds_every_trial() {
    for trial in 0..TRIALS {
        let generation = generate(DEFAULT_LENGTH).unwrap();
        assert!(
            generation.success,
            "trial {} failed after {} backtracks",
            trial, generation.stats.backtracks
        );
        assert_eq!(generation.len(), DEFAULT_LENGTH);
        assert!(verify(&generation.bits), "trial {} did not verify", trial);
    }
}

#[test]
fn full_length_sequence_passes_brute_force_checks() {
    let bits = generated(DEFAULT_LENGTH, 2024);

    assert_eq!(all_window_values(&bits).len(), DEFAULT_LENGTH - 31);
    assert_sorted_unique(&bits);

    assert_balanced(&bits);
    assert!(longest_run(&bits) <= MAX_RUN);
}

#[test]
fn full_length_converts_to_verified() {
    let verified: VerifiedBits = generate_seeded(DEFAULT_LENGTH, 7)
        .unwrap()
        .into_verified()
        .unwrap();
    assert_eq!(verified.len(), DEFAULT_LENGTH);
    assert_eq!(verified.window_values().count(), DEFAULT_LENGTH - 31);
}

#[test]
fn longer_than_default_also_succeeds() {
    let bits = generated(2 * DEFAULT_LENGTH, 11);
    assert_eq!(bits.len(), 2 * DEFAULT_LENGTH);
    assert!(verify(&bits));
}
