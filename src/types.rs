// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a generated sequence.
//!
//! A sequence is an ordered list of [`Bit`]s. Three constraints tie every
//! sequence together, and each one has a constant here so the generator, the
//! verifier and the contracts all read the same numbers.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Balance**: every window of [`WINDOW_BITS`] consecutive bits has
//!   `|ones - zeros| ≤ MAX_IMBALANCE`.
//!
//! - **Uniqueness**: no two windows (at distinct starts) share the same
//!   32-bit value when read most-significant-bit first.
//!
//! - **Runs**: no run of identical bits is longer than [`MAX_RUN`].
//!
//! Rather than trusting yourself to remember these, wrap a finished sequence
//! in `VerifiedBits` from `verify` - it checks them once at construction.

use std::fmt;

use thiserror::Error;

use crate::verify::Violation;

// =============================================================================
// CONSTRAINT CONSTANTS
// =============================================================================

/// Width of a window in bits. Window values are `u32`, so this is fixed.
pub const WINDOW_BITS: usize = 32;

/// Maximum `|ones - zeros|` inside any full window.
pub const MAX_IMBALANCE: u32 = 4;

/// Maximum length of a run of identical bits.
pub const MAX_RUN: usize = 8;

/// Bound on the cumulative `ones - zeros` drift measured from the first bit.
///
/// Stronger than the windowed balance check. It also caps runs at
/// `2 * MAX_DRIFT`, which `contracts` asserts at compile time.
pub const MAX_DRIFT: i64 = 4;

/// Default sequence length used by the binary.
pub const DEFAULT_LENGTH: usize = 65_536;

/// Mask that keeps the low 31 bits of a window before shifting in a new bit.
pub const WINDOW_SHIFT_MASK: u32 = 0x7FFF_FFFF;

// =============================================================================
// BIT
// =============================================================================

/// A single binary digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Bit {
    Zero = 0,
    One = 1,
}

impl Bit {
    /// The other bit value.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        }
    }

    #[inline]
    pub fn is_one(self) -> bool {
        self == Bit::One
    }

    /// Numeric value, ready to be OR-ed into a window.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// Signed contribution to the running drift: `+1` for one, `-1` for zero.
    #[inline]
    pub fn signed(self) -> i64 {
        match self {
            Bit::Zero => -1,
            Bit::One => 1,
        }
    }

    /// The character used in textual renderings (`'0'` or `'1'`).
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }
}

impl From<bool> for Bit {
    #[inline]
    fn from(value: bool) -> Self {
        if value {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl From<Bit> for u8 {
    #[inline]
    fn from(bit: Bit) -> Self {
        bit as u8
    }
}

impl TryFrom<u8> for Bit {
    type Error = InvalidBit;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            _ => Err(InvalidBit::Value(value)),
        }
    }
}

impl TryFrom<char> for Bit {
    type Error = InvalidBit;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0' => Ok(Bit::Zero),
            '1' => Ok(Bit::One),
            _ => Err(InvalidBit::Char(c)),
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A value that cannot be read as a bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidBit {
    #[error("value {0} is not a bit (expected 0 or 1)")]
    Value(u8),
    #[error("character {0:?} is not a bit (expected '0' or '1')")]
    Char(char),
}

/// Parse a string of `'0'`/`'1'` characters. ASCII whitespace and `_` are
/// skipped so long literals can be grouped.
pub fn bits_from_str(s: &str) -> Result<Vec<Bit>, InvalidBit> {
    s.chars()
        .filter(|c| !c.is_ascii_whitespace() && *c != '_')
        .map(Bit::try_from)
        .collect()
}

/// Render bits as a `'0'`/`'1'` string.
pub fn bits_to_string(bits: &[Bit]) -> String {
    bits.iter().map(|b| b.as_char()).collect()
}

// =============================================================================
// GENERATION RESULT
// =============================================================================

/// Counters collected while the search runs. Diagnostic only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// The root plus every accepted bit, including ones later undone.
    pub nodes: u64,
    /// Candidate bits rejected by the balance, drift or run checks.
    pub pruned: u64,
    /// Candidate bits refused because their window was already used.
    pub duplicate_rejections: u64,
    /// Accepted bits undone after both of their children failed.
    pub backtracks: u64,
    /// Deepest prefix length reached.
    pub max_depth: usize,
}

/// What one call to the generator produced.
///
/// `success` must be checked before trusting `bits`: on failure the sequence
/// is whatever partial prefix the search was left holding (possibly empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub success: bool,
    pub bits: Vec<Bit>,
    pub stats: SearchStats,
    /// Set when the search reached full length but the final re-verification
    /// rejected the sequence. `success` is false in that case.
    pub rejected_by: Option<Violation>,
}

impl Generation {
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
}
