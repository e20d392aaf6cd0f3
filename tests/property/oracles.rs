//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations of each constraint. They work on
//! plain `u8` bits and `String` windows so they share no code with the crate.

use bitloom::Bit;

/// Convert crate bits to plain integers.
pub fn to_u8(bits: &[Bit]) -> Vec<u8> {
    bits.iter().map(|&b| u8::from(b)).collect()
}

/// Balance oracle: count every window by hand.
pub fn oracle_balanced(bits: &[u8]) -> bool {
    if bits.len() < 32 {
        return true;
    }
    (32..=bits.len()).all(|end| {
        let ones: i32 = bits[end - 32..end].iter().map(|&b| i32::from(b)).sum();
        let zeros = 32 - ones;
        (ones - zeros).abs() <= 4
    })
}

/// Uniqueness oracle: compare windows as strings, every pair.
pub fn oracle_unique(bits: &[u8]) -> bool {
    if bits.len() < 32 {
        return true;
    }
    let windows: Vec<String> = (32..=bits.len())
        .map(|end| bits[end - 32..end].iter().map(|b| b.to_string()).collect())
        .collect();
    for i in 0..windows.len() {
        for j in i + 1..windows.len() {
            if windows[i] == windows[j] {
                return false;
            }
        }
    }
    true
}

/// Run oracle: split into maximal runs and measure each.
pub fn oracle_short_runs(bits: &[u8]) -> bool {
    let mut i = 0;
    while i < bits.len() {
        let mut j = i;
        while j < bits.len() && bits[j] == bits[i] {
            j += 1;
        }
        if j - i > 8 {
            return false;
        }
        i = j;
    }
    true
}

/// Full oracle: all three constraints.
pub fn oracle_valid(bits: &[u8]) -> bool {
    oracle_balanced(bits) && oracle_unique(bits) && oracle_short_runs(bits)
}

/// Window value oracle: parse the binary string.
pub fn oracle_window_value(window: &[u8]) -> u32 {
    if window.is_empty() {
        return 0;
    }
    let text: String = window.iter().map(|b| b.to_string()).collect();
    u32::from_str_radix(&text, 2).expect("window is at most 32 binary digits")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oracle_runs_boundaries() {
        assert!(oracle_short_runs(&[1; 8]));
        assert!(!oracle_short_runs(&[1; 9]));
        assert!(oracle_short_runs(&[]));
    }

    #[test]
    fn oracle_window_value_reads_msb_first() {
        let mut window = [0u8; 32];
        window[0] = 1;
        assert_eq!(oracle_window_value(&window), 0x8000_0000);
    }
}
