// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the generator over arbitrary seeds and short lengths.
//!
//! Whatever the seed, a successful generation has exactly the requested
//! length and verifies; lengths below one window are rejected cleanly.

#![no_main]

use arbitrary::Arbitrary;
use bitloom::{generate_seeded, verify, GenerateError, WINDOW_BITS};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    seed: u64,
    length: u16,
}

fuzz_target!(|input: Input| {
    let n = usize::from(input.length % 4096);
    match generate_seeded(n, input.seed) {
        Ok(generation) => {
            assert!(n >= WINDOW_BITS);
            assert!(generation.success, "seed {} failed at {} bits", input.seed, n);
            assert_eq!(generation.len(), n);
            assert!(verify(&generation.bits));
        }
        Err(GenerateError::LengthTooShort { requested, .. }) => {
            assert_eq!(requested, n);
            assert!(n < WINDOW_BITS);
        }
        Err(other) => panic!("unexpected error: {}", other),
    }
});
