// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sequence generation: precondition checks, the search, and the self-check.
//!
//! ```text
//! generate(n) ──▶ SearchContext::run ──▶ verify::check ──▶ Generation
//!                 (explicit-stack DFS)   (from scratch)
//! ```
//!
//! Each call starts from an empty sequence and an empty seen-set with fresh
//! randomness. There is no retry loop: if the search exhausts every branch,
//! the call reports `success = false` and the caller decides what to do.

mod search;
mod source;

pub use source::{entropy_source, seeded_source, BitSource};

use thiserror::Error;
use tracing::{debug, warn};

use crate::types::{Generation, WINDOW_BITS};
use crate::verify::{self, VerifiedBits, Violation};
use search::SearchContext;

/// Why generation could not produce a usable sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The requested length holds no full window.
    #[error("sequence length {requested} is shorter than one {minimum}-bit window")]
    LengthTooShort { requested: usize, minimum: usize },
    /// Every branch was explored without reaching full length.
    #[error("search exhausted every branch after {backtracks} backtracks")]
    SearchExhausted { backtracks: u64 },
    /// The search finished but the independent re-check rejected the output.
    #[error("generated sequence failed self-check: {0}")]
    SelfCheckFailed(#[from] Violation),
}

/// Generate `n` bits using operating-system randomness.
///
/// Lengths of 65536 and above are the intended range; anything with at least
/// one full window is accepted.
pub fn generate(n: usize) -> Result<Generation, GenerateError> {
    let mut source = entropy_source();
    generate_with(n, &mut source)
}

/// Generate `n` bits from a deterministic seed. Equal seeds give equal output.
pub fn generate_seeded(n: usize, seed: u64) -> Result<Generation, GenerateError> {
    let mut source = seeded_source(seed);
    generate_with(n, &mut source)
}

/// Generate `n` bits, drawing branch order from `source`.
pub fn generate_with<S: BitSource + ?Sized>(
    n: usize,
    source: &mut S,
) -> Result<Generation, GenerateError> {
    if n < WINDOW_BITS {
        return Err(GenerateError::LengthTooShort {
            requested: n,
            minimum: WINDOW_BITS,
        });
    }

    debug!(length = n, "starting search");
    let (found, bits, stats) = SearchContext::new(n, source).run();
    debug!(
        found,
        nodes = stats.nodes,
        pruned = stats.pruned,
        duplicates = stats.duplicate_rejections,
        backtracks = stats.backtracks,
        max_depth = stats.max_depth,
        "search finished"
    );

    let rejected_by = if found {
        verify::check(&bits).err()
    } else {
        None
    };
    if let Some(violation) = &rejected_by {
        warn!(%violation, "self-check rejected a completed search");
    }

    Ok(Generation {
        success: found && rejected_by.is_none(),
        bits,
        stats,
        rejected_by,
    })
}

impl Generation {
    /// Turn a successful generation into a [`VerifiedBits`].
    ///
    /// The bits are checked again, so this never trusts `success` alone.
    pub fn into_verified(self) -> Result<VerifiedBits, GenerateError> {
        if let Some(violation) = self.rejected_by {
            return Err(GenerateError::SelfCheckFailed(violation));
        }
        if !self.success {
            return Err(GenerateError::SearchExhausted {
                backtracks: self.stats.backtracks,
            });
        }
        Ok(VerifiedBits::new(self.bits)?)
    }
}
