// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the bitloom command-line interface.
//!
//! One command, no subcommands: generate a sequence, verify it, print the
//! outcome. The length defaults to 65536 and a seed makes the run
//! reproducible.

pub mod display;

use bitloom::DEFAULT_LENGTH;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "bitloom",
    about = "Generate and verify a balanced bit sequence with unique 32-bit windows",
    version
)]
pub struct Cli {
    /// Number of bits to generate (at least 32)
    #[arg(short = 'n', long, default_value_t = DEFAULT_LENGTH)]
    pub length: usize,

    /// Seed for a reproducible run
    ///
    /// Without a seed the branch order comes from operating-system randomness.
    #[arg(short, long)]
    pub seed: Option<u64>,
}
