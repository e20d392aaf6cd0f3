//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures and a scripted bit source so tests don't
//! each invent their own.

#![doc(hidden)]

use crate::generate::BitSource;
use crate::types::Bit;

/// 40 bits satisfying every constraint (9 full windows).
pub const VALID_40: &str = "0110011011010110010011011100110010110010";

/// 40 bits whose first window holds 19 ones and 13 zeros.
pub const IMBALANCED_40: &str = "1101110111010101010101010101010101010101";

/// 40 bits with balanced, unique windows but a run of nine ones at 7..=15.
pub const NINE_RUN_40: &str = "0100100111111111001001001100101100000000";

/// `0101...` of the given length, starting with zero.
pub fn alternating(len: usize) -> Vec<Bit> {
    (0..len).map(|i| Bit::from(i % 2 == 1)).collect()
}

/// A bit source that replays a fixed script, cycling when it runs out.
///
/// Lets tests pin the branch order of the search exactly.
#[derive(Debug, Clone)]
pub struct ScriptedBits {
    script: Vec<Bit>,
    cursor: usize,
    drawn: usize,
}

impl ScriptedBits {
    pub fn new(script: Vec<Bit>) -> Self {
        assert!(!script.is_empty(), "script must not be empty");
        Self {
            script,
            cursor: 0,
            drawn: 0,
        }
    }

    /// Always prefer the same bit first.
    pub fn constant(bit: Bit) -> Self {
        Self::new(vec![bit])
    }

    /// How many bits have been drawn so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl BitSource for ScriptedBits {
    fn next_bit(&mut self) -> Bit {
        let bit = self.script[self.cursor];
        self.cursor = (self.cursor + 1) % self.script.len();
        self.drawn += 1;
        bit
    }
}
