// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: independent re-checks and type-level wrappers.
//!
//! Nothing here trusts the generator. Each pass rebuilds its ground truth from
//! the raw bits: window sums are counted directly, window values are read
//! back most-significant-bit first, and runs are rescanned. The generator's
//! counters and seen-set never leak in.
//!
//! Passes run in a fixed order and stop at the first violation:
//!
//! 1. [`check_balance`]: `|ones - zeros| ≤ MAX_IMBALANCE` in every full window
//! 2. [`check_unique`]: every full window value is distinct
//! 3. [`check_runs`]: no run exceeds `MAX_RUN`
//!
//! Sequences shorter than one window have no full windows, so only the run
//! pass can reject them.

mod types;

pub use types::*;

use std::collections::HashMap;

use tracing::warn;

use crate::types::{Bit, MAX_IMBALANCE, MAX_RUN, WINDOW_BITS};
use crate::window::{ones, window_count, window_value};

/// Check every constraint. True only if all three passes succeed.
///
/// Pure: the same input always gives the same answer.
pub fn verify(bits: &[Bit]) -> bool {
    check(bits).is_ok()
}

/// Check every constraint and report the first violation found.
pub fn check(bits: &[Bit]) -> Result<(), Violation> {
    check_balance(bits)
        .and_then(|()| check_unique(bits))
        .and_then(|()| check_runs(bits))
        .inspect_err(|violation| {
            warn!(
                constraint = violation.constraint(),
                len = bits.len(),
                "verification failed: {violation}"
            );
        })
}

/// Pass 1: every full window holds a balanced number of ones and zeros.
pub fn check_balance(bits: &[Bit]) -> Result<(), Violation> {
    for start in 0..window_count(bits.len()) {
        let ones = ones(&bits[start..start + WINDOW_BITS]);
        let zeros = WINDOW_BITS - ones;
        if ones.abs_diff(zeros) > MAX_IMBALANCE as usize {
            return Err(Violation::Imbalance { start, ones, zeros });
        }
    }
    Ok(())
}

/// Pass 2: no window value appears twice.
///
/// Values are rebuilt from scratch for each window rather than rolled, so a
/// bug in the rolling update cannot hide here.
pub fn check_unique(bits: &[Bit]) -> Result<(), Violation> {
    let mut seen: HashMap<u32, usize> = HashMap::with_capacity(window_count(bits.len()));
    for start in 0..window_count(bits.len()) {
        let value = window_value(&bits[start..start + WINDOW_BITS]);
        if let Some(&first_start) = seen.get(&value) {
            return Err(Violation::DuplicateWindow {
                start,
                first_start,
                value,
            });
        }
        seen.insert(value, start);
    }
    Ok(())
}

/// Pass 3: no run of identical bits is longer than `MAX_RUN`.
pub fn check_runs(bits: &[Bit]) -> Result<(), Violation> {
    let mut run_start = 0;
    for (position, pair) in bits.windows(2).enumerate() {
        let position = position + 1;
        if pair[0] != pair[1] {
            run_start = position;
        } else if position - run_start + 1 > MAX_RUN {
            return Err(Violation::RunTooLong {
                start: run_start,
                position,
                bit: pair[1],
            });
        }
    }
    Ok(())
}
