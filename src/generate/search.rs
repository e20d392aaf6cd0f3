// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Randomized depth-first search with backtracking, on an explicit stack.
//!
//! # Algorithm Overview
//!
//! ```text
//! frames:  [root] [len 1] [len 2] ... [len k]        bits: b0 b1 ... b(k-1)
//!                                        │
//!                                        ├─ TryFirst     draw x, push child with bit x
//!                                        ├─ TryOpposite  push child with bit !x
//!                                        └─ Exhausted    pop self, undo bit + window
//! ```
//!
//! A frame describes one accepted prefix. It carries the counts of zeros and
//! ones in the trailing window, the cumulative drift, the rolling window
//! value and the trailing run length, so every candidate bit is checked in
//! constant time:
//!
//! - trailing window `|ones - zeros| ≤ MAX_IMBALANCE` (partial windows during
//!   the first 31 bits are held to the same bound)
//! - cumulative `|drift| ≤ MAX_DRIFT`
//! - trailing run `≤ MAX_RUN`
//! - a candidate that completes a full window must produce an unused value
//!
//! Depth equals the target length, which is why the recursion lives in a
//! `Vec<Frame>` instead of on the call stack.

use std::collections::HashSet;

use tracing::trace;

use super::source::BitSource;
use crate::contracts;
use crate::types::{Bit, SearchStats, MAX_DRIFT, MAX_IMBALANCE, MAX_RUN, WINDOW_BITS};
use crate::window::next_window_value;

/// Which child a frame will try next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Branch {
    /// Try the randomly drawn bit.
    TryFirst,
    /// The first child failed or was rejected; try the other bit.
    TryOpposite,
    /// Both children are done. Pop this frame.
    Exhausted,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    zeros: u32,
    ones: u32,
    drift: i64,
    window: u32,
    run: usize,
    first: Bit,
    branch: Branch,
    /// Window value this frame inserted into the seen-set, if its bit
    /// completed a full window.
    recorded: Option<u32>,
}

impl Frame {
    fn root(first: Bit) -> Self {
        Self {
            zeros: 0,
            ones: 0,
            drift: 0,
            window: 0,
            run: 0,
            first,
            branch: Branch::TryFirst,
            recorded: None,
        }
    }
}

/// Counters for a candidate child, before it is accepted.
struct Candidate {
    zeros: u32,
    ones: u32,
    drift: i64,
    window: u32,
    run: usize,
}

impl Candidate {
    fn admissible(&self) -> bool {
        self.ones.abs_diff(self.zeros) <= MAX_IMBALANCE
            && self.drift.abs() <= MAX_DRIFT
            && self.run <= MAX_RUN
    }
}

/// Result of one step of the search loop.
enum Step {
    Continue,
    Found,
}

/// All mutable state for one generation attempt.
///
/// Owned by a single call to `generate_with`; nothing survives it.
pub(crate) struct SearchContext<'s, S: BitSource + ?Sized> {
    target: usize,
    source: &'s mut S,
    bits: Vec<Bit>,
    seen: HashSet<u32>,
    frames: Vec<Frame>,
    stats: SearchStats,
}

impl<'s, S: BitSource + ?Sized> SearchContext<'s, S> {
    pub(crate) fn new(target: usize, source: &'s mut S) -> Self {
        Self {
            target,
            source,
            bits: Vec::with_capacity(target),
            seen: HashSet::with_capacity(target),
            frames: Vec::with_capacity(target + 1),
            stats: SearchStats::default(),
        }
    }

    /// Run the search to completion.
    ///
    /// Returns whether a full-length prefix was reached, the bits left on the
    /// stack (the whole sequence on success, whatever remains on failure),
    /// and the counters.
    pub(crate) fn run(mut self) -> (bool, Vec<Bit>, SearchStats) {
        let first = self.source.next_bit();
        self.frames.push(Frame::root(first));
        self.stats.nodes = 1;

        let found = self.search();
        if found {
            contracts::check_sequence_length(&self.bits, self.target);
        }
        (found, self.bits, self.stats)
    }

    fn search(&mut self) -> bool {
        while let Some(top) = self.frames.last_mut() {
            let step = match top.branch {
                Branch::TryFirst => {
                    top.branch = Branch::TryOpposite;
                    let bit = top.first;
                    self.descend(bit)
                }
                Branch::TryOpposite => {
                    top.branch = Branch::Exhausted;
                    let bit = top.first.flipped();
                    self.descend(bit)
                }
                Branch::Exhausted => {
                    self.backtrack();
                    Step::Continue
                }
            };
            if let Step::Found = step {
                return true;
            }
        }
        false
    }

    /// Try to extend the current prefix with `bit`.
    fn descend(&mut self, bit: Bit) -> Step {
        let Some(parent) = self.frames.last().copied() else {
            return Step::Continue;
        };
        let len = self.bits.len();

        let (mut zeros, mut ones) = (parent.zeros, parent.ones);
        if len >= WINDOW_BITS {
            match self.bits[len - WINDOW_BITS] {
                Bit::Zero => zeros -= 1,
                Bit::One => ones -= 1,
            }
        }
        match bit {
            Bit::Zero => zeros += 1,
            Bit::One => ones += 1,
        }

        let candidate = Candidate {
            zeros,
            ones,
            drift: parent.drift + bit.signed(),
            window: next_window_value(parent.window, len, bit),
            run: if self.bits.last() == Some(&bit) {
                parent.run + 1
            } else {
                1
            },
        };

        if !candidate.admissible() {
            self.stats.pruned += 1;
            return Step::Continue;
        }

        // Ramp-up prefixes are not windows, so only full ones are recorded.
        let recorded = if len + 1 >= WINDOW_BITS {
            if !self.seen.insert(candidate.window) {
                self.stats.duplicate_rejections += 1;
                return Step::Continue;
            }
            Some(candidate.window)
        } else {
            None
        };

        self.bits.push(bit);
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(self.bits.len());
        contracts::check_trailing_state(
            &self.bits,
            candidate.zeros,
            candidate.ones,
            candidate.window,
            candidate.run,
        );

        if self.bits.len() == self.target {
            return Step::Found;
        }

        let first = self.source.next_bit();
        self.frames.push(Frame {
            zeros: candidate.zeros,
            ones: candidate.ones,
            drift: candidate.drift,
            window: candidate.window,
            run: candidate.run,
            first,
            branch: Branch::TryFirst,
            recorded,
        });
        Step::Continue
    }

    /// Pop the top frame and undo the bit that created it.
    fn backtrack(&mut self) {
        let Some(frame) = self.frames.pop() else {
            return;
        };
        if let Some(value) = frame.recorded {
            self.seen.remove(&value);
        }
        // The root frame has no bit of its own.
        if !self.frames.is_empty() {
            self.bits.pop();
            self.stats.backtracks += 1;
            trace!(depth = self.bits.len(), "backtrack");
        }
    }
}
