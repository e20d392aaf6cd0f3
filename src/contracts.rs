//! Runtime contracts for the search state.
//!
//! The search keeps counters instead of rescanning bits, which is fast but
//! easy to get subtly wrong. These contracts rebuild the same numbers the
//! slow way and compare. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Check the **same invariants** as `verify`, but per step
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | What it re-derives                               |
//! |----------------------------|--------------------------------------------------|
//! | `check_trailing_state`     | trailing window counts, value and run length     |
//! | `check_sequence_length`    | a successful search returns exactly `n` bits     |
//!
//! # Usage
//!
//! ```ignore
//! // In debug builds, this panics if the rolling counters drifted
//! check_trailing_state(&bits, zeros, ones, window, run);
//!
//! // In release builds, this is a no-op
//! ```

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

use crate::types::{Bit, MAX_DRIFT, MAX_IMBALANCE, MAX_RUN, WINDOW_BITS};

const _: () = {
    // Window values are u32.
    assert!(WINDOW_BITS == u32::BITS as usize);

    // A full window has an even number of bits, so ones - zeros is always
    // even. An odd bound would silently behave like the even one below it.
    assert!(MAX_IMBALANCE % 2 == 0);
    assert!((MAX_IMBALANCE as usize) < WINDOW_BITS);

    // A run of length L moves the cumulative drift by L. Keeping the drift
    // inside [-MAX_DRIFT, MAX_DRIFT] therefore caps runs at 2 * MAX_DRIFT,
    // which must not exceed MAX_RUN.
    assert!(MAX_DRIFT > 0);
    assert!(2 * MAX_DRIFT as usize <= MAX_RUN);
};

// ============================================================================
// SEARCH STATE CONTRACTS
// ============================================================================

/// Check the rolling counters against the bits they summarize.
///
/// # Panics (debug builds only)
/// Panics if the trailing window counts, the rolling window value, or the
/// trailing run length disagree with a rescan of `bits`.
#[inline]
pub fn check_trailing_state(bits: &[Bit], zeros: u32, ones: u32, window: u32, run: usize) {
    if cfg!(debug_assertions) {
        let tail = &bits[bits.len().saturating_sub(WINDOW_BITS)..];
        let tail_ones = crate::window::ones(tail) as u32;
        debug_assert_eq!(
            (zeros, ones),
            (tail.len() as u32 - tail_ones, tail_ones),
            "Contract violation: trailing window counts drifted at length {}",
            bits.len()
        );

        debug_assert_eq!(
            window,
            crate::window::window_value(tail),
            "Contract violation: rolling window value drifted at length {}",
            bits.len()
        );

        let last = bits.last().copied();
        let tail_run = bits.iter().rev().take_while(|&&b| Some(b) == last).count();
        debug_assert_eq!(
            run,
            tail_run,
            "Contract violation: trailing run length drifted at length {}",
            bits.len()
        );
    }
}

/// Check that a successful search produced exactly the requested length.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_sequence_length(bits: &[Bit], target: usize) {
    debug_assert_eq!(
        bits.len(),
        target,
        "Contract violation: search reported success with {} of {} bits",
        bits.len(),
        target
    );
}
