// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type wrappers that make invalid states unrepresentable.
//!
//! A `Vec<Bit>` says nothing about balance, uniqueness or runs. A
//! [`VerifiedBits`] does: it is only constructible through the full check,
//! so anything holding one can skip re-verifying.
//!
//! | Type           | What's Guaranteed                                  |
//! |----------------|----------------------------------------------------|
//! | `VerifiedBits` | Balanced windows, unique window values, short runs |
//!
//! # Example
//!
//! ```ignore
//! let verified = VerifiedBits::new(generation.bits)?;
//! for (start, value) in verified.window_values() { ... }
//! ```

use thiserror::Error;

use crate::types::{Bit, MAX_IMBALANCE, MAX_RUN};
use crate::window::WindowValues;

/// The first constraint violation found in a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    /// A full window has `|ones - zeros| > MAX_IMBALANCE`.
    #[error(
        "window at {start} has {ones} ones and {zeros} zeros (imbalance {imbalance} > {limit})",
        imbalance = imbalance(.ones, .zeros),
        limit = MAX_IMBALANCE
    )]
    Imbalance {
        start: usize,
        ones: usize,
        zeros: usize,
    },
    /// Two windows read as the same 32-bit value.
    #[error("window at {start} repeats value {value:#010x} first seen at {first_start}")]
    DuplicateWindow {
        start: usize,
        first_start: usize,
        value: u32,
    },
    /// A run of identical bits grew past `MAX_RUN`.
    #[error(
        "run of {bit}s starting at {start} exceeds {limit} bits at position {position}",
        limit = MAX_RUN
    )]
    RunTooLong {
        start: usize,
        position: usize,
        bit: Bit,
    },
}

fn imbalance(ones: &usize, zeros: &usize) -> usize {
    ones.abs_diff(*zeros)
}

impl Violation {
    /// Short name of the violated constraint, for log fields.
    pub fn constraint(&self) -> &'static str {
        match self {
            Violation::Imbalance { .. } => "balance",
            Violation::DuplicateWindow { .. } => "uniqueness",
            Violation::RunTooLong { .. } => "run-length",
        }
    }
}

/// A bit sequence that passed every check.
///
/// # Invariants (enforced at construction)
/// - every full window is balanced within `MAX_IMBALANCE`
/// - every full window value is distinct
/// - no run is longer than `MAX_RUN`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedBits {
    bits: Vec<Bit>,
}

impl VerifiedBits {
    /// Verify `bits` and wrap them.
    ///
    /// Returns the first violation if any constraint fails.
    pub fn new(bits: Vec<Bit>) -> Result<Self, Violation> {
        super::check(&bits)?;
        Ok(Self { bits })
    }

    pub fn as_slice(&self) -> &[Bit] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// `(start, value)` for every full window. Values are pairwise distinct.
    pub fn window_values(&self) -> WindowValues<'_> {
        WindowValues::new(&self.bits)
    }

    /// Give back the underlying sequence.
    pub fn into_inner(self) -> Vec<Bit> {
        self.bits
    }
}

impl AsRef<[Bit]> for VerifiedBits {
    fn as_ref(&self) -> &[Bit] {
        &self.bits
    }
}
