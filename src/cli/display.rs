// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the bitloom CLI.
//!
//! The binary prints exactly one line on stdout, so all this does is color
//! that line: green on success, red on failure. Respects `NO_COLOR` and
//! plain pipes.

/// Printed when a sequence was generated and verified.
pub const SUCCESS_MESSAGE: &str = "Bits are successfully generated!";

/// Printed otherwise.
pub const FAILURE_MESSAGE: &str = "Failed to generate bits!";

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const GREEN: &str = "\x1b[38;2;152;195;121m"; // #98c379
pub const RED: &str = "\x1b[38;2;224;108;117m"; // #e06c75

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

fn paint(color: &str, text: &str, colors: bool) -> String {
    if colors {
        format!("{}{}{}{}", BOLD, color, text, RESET)
    } else {
        text.to_string()
    }
}

/// The outcome line, colored when stdout is a terminal.
pub fn outcome(accepted: bool) -> String {
    outcome_with(accepted, use_colors())
}

fn outcome_with(accepted: bool, colors: bool) -> String {
    if accepted {
        paint(GREEN, SUCCESS_MESSAGE, colors)
    } else {
        paint(RED, FAILURE_MESSAGE, colors)
    }
}
