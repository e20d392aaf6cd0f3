// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target comparing the verifier against a naive oracle.
//!
//! Each input byte becomes one bit (low bit), which keeps long runs and
//! repeated windows reachable. The verifier must never panic and must agree
//! with a brute-force check of all three constraints.

#![no_main]

use bitloom::{check, verify, Bit, Violation};
use libfuzzer_sys::fuzz_target;

fn naive_balanced(bits: &[u8]) -> bool {
    bits.windows(32).all(|w| {
        let ones = w.iter().filter(|&&b| b == 1).count() as i64;
        (2 * ones - 32).abs() <= 4
    })
}

fn naive_unique(bits: &[u8]) -> bool {
    let windows: Vec<&[u8]> = bits.windows(32).collect();
    (0..windows.len()).all(|i| (i + 1..windows.len()).all(|j| windows[i] != windows[j]))
}

fn naive_short_runs(bits: &[u8]) -> bool {
    bits.chunk_by(|a, b| a == b).all(|run| run.len() <= 8)
}

fuzz_target!(|data: &[u8]| {
    // Quadratic oracle; keep inputs small.
    if data.len() > 512 {
        return;
    }
    let raw: Vec<u8> = data.iter().map(|b| b & 1).collect();
    let bits: Vec<Bit> = raw.iter().map(|&b| Bit::from(b == 1)).collect();

    let balanced = naive_balanced(&raw);
    let unique = naive_unique(&raw);
    let short_runs = naive_short_runs(&raw);

    assert_eq!(verify(&bits), balanced && unique && short_runs);

    // The first failing pass is the one reported.
    match check(&bits) {
        Ok(()) => {}
        Err(Violation::Imbalance { .. }) => assert!(!balanced),
        Err(Violation::DuplicateWindow { .. }) => assert!(balanced && !unique),
        Err(Violation::RunTooLong { .. }) => assert!(balanced && unique && !short_runs),
    }
});
