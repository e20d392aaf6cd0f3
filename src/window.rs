// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! 32-bit window values, computed two ways.
//!
//! The generator rolls the window forward one bit at a time. The verifier
//! rebuilds each window from the raw bits. Both must agree, which is what the
//! proofs at the bottom of this file and the property tests check.
//!
//! ```text
//! bits:    0 1 1 0 1 ... 1 0 1   (earliest bit first)
//!          └──── 32 bits ────┘
//! value:   MSB ............. LSB
//!
//! next = ((prev & 0x7FFF_FFFF) << 1) | bit
//! ```

use crate::types::{Bit, WINDOW_BITS, WINDOW_SHIFT_MASK};

/// Roll a window forward by one bit.
///
/// `filled` is the number of bits already in the sequence. While it is below
/// [`WINDOW_BITS`] the high bit of `prev` is still clear, so masking is a
/// no-op and the ramp-up case is `(prev << 1) | bit`.
#[inline]
pub fn next_window_value(prev: u32, filled: usize, bit: Bit) -> u32 {
    if filled < WINDOW_BITS {
        (prev << 1) | bit.as_u32()
    } else {
        ((prev & WINDOW_SHIFT_MASK) << 1) | bit.as_u32()
    }
}

/// Value of a window read most-significant-bit first.
///
/// Only the last [`WINDOW_BITS`] bits of `bits` contribute; earlier ones are
/// shifted out.
#[inline]
pub fn window_value(bits: &[Bit]) -> u32 {
    bits.iter().fold(0u32, |acc, &b| (acc << 1) | b.as_u32())
}

/// Number of ones in a slice.
#[inline]
pub fn ones(bits: &[Bit]) -> usize {
    bits.iter().filter(|b| b.is_one()).count()
}

/// Iterator over `(start, value)` for every full window, rolled incrementally.
#[derive(Debug, Clone)]
pub struct WindowValues<'a> {
    bits: &'a [Bit],
    next_end: usize,
    value: u32,
}

impl<'a> WindowValues<'a> {
    pub fn new(bits: &'a [Bit]) -> Self {
        let prefix = bits.len().min(WINDOW_BITS - 1);
        Self {
            bits,
            next_end: prefix,
            value: window_value(&bits[..prefix]),
        }
    }
}

impl Iterator for WindowValues<'_> {
    type Item = (usize, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let bit = *self.bits.get(self.next_end)?;
        self.value = next_window_value(self.value, self.next_end, bit);
        self.next_end += 1;
        Some((self.next_end - WINDOW_BITS, self.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits.len().saturating_sub(self.next_end);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WindowValues<'_> {}

/// Number of full windows in a sequence of `len` bits.
#[inline]
pub fn window_count(len: usize) -> usize {
    (len + 1).saturating_sub(WINDOW_BITS)
}


// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    fn any_bit() -> Bit {
        Bit::from(kani::any::<bool>())
    }

    /// Rolling a full window equals dropping the top bit and appending.
    #[kani::proof]
    fn verify_next_window_drops_oldest() {
        let prev: u32 = kani::any();
        let filled: usize = kani::any_where(|&n: &usize| n >= WINDOW_BITS);
        let bit = any_bit();

        let next = next_window_value(prev, filled, bit);

        kani::assert(next & 1 == bit.as_u32(), "newest bit must be the LSB");
        kani::assert(
            next >> 1 == prev & WINDOW_SHIFT_MASK,
            "remaining bits must be the previous low 31 bits",
        );
    }

    /// During ramp-up the masked and unmasked formulas coincide.
    #[kani::proof]
    fn verify_ramp_up_needs_no_mask() {
        let filled: usize = kani::any_where(|&n: &usize| n < WINDOW_BITS);
        let prev: u32 = kani::any_where(|&p: &u32| (p as u64) < (1u64 << filled));
        let bit = any_bit();

        kani::assert(
            next_window_value(prev, filled, bit)
                == ((prev & WINDOW_SHIFT_MASK) << 1) | bit.as_u32(),
            "ramp-up window must not need the mask",
        );
    }

    /// 33 rolled bits equal the from-scratch value of the last 32.
    #[kani::proof]
    #[kani::unwind(34)]
    fn verify_rolling_matches_scratch() {
        let mut bits = [Bit::Zero; WINDOW_BITS + 1];
        for slot in bits.iter_mut() {
            *slot = any_bit();
        }

        let mut value = 0u32;
        for (i, &bit) in bits.iter().enumerate() {
            value = next_window_value(value, i, bit);
        }

        kani::assert(
            value == window_value(&bits[1..]),
            "rolled value must equal the from-scratch value",
        );
    }
}
