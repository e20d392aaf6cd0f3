// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where the search gets its coin flips.
//!
//! The search draws one bit per frame to decide which branch to try first.
//! Any `rand` generator works as a source; tests can plug in something
//! scripted instead.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::types::Bit;

/// A supply of unbiased bits.
pub trait BitSource {
    fn next_bit(&mut self) -> Bit;
}

impl<R: RngCore + ?Sized> BitSource for R {
    #[inline]
    fn next_bit(&mut self) -> Bit {
        Bit::from(self.next_u32() & 1 == 1)
    }
}

/// A generator seeded from operating-system randomness.
pub fn entropy_source() -> StdRng {
    StdRng::from_entropy()
}

/// A deterministic generator. Equal seeds give equal bit streams.
pub fn seeded_source(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
