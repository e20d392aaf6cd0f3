//! Window value properties: the rolling update matches from-scratch reads.

use bitloom::{next_window_value, window_value, Bit, WindowValues, WINDOW_BITS};
use proptest::prelude::*;

use super::oracles::{oracle_window_value, to_u8};

fn arb_bits(min: usize, max: usize) -> impl Strategy<Value = Vec<Bit>> {
    prop::collection::vec(any::<bool>().prop_map(Bit::from), min..max)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_window_value_matches_oracle(bits in arb_bits(0, 33)) {
        prop_assert_eq!(window_value(&bits), oracle_window_value(&to_u8(&bits)));
    }

    #[test]
    fn prop_rolling_matches_from_scratch(bits in arb_bits(32, 160)) {
        let mut rolling = 0u32;
        for (i, &bit) in bits.iter().enumerate() {
            rolling = next_window_value(rolling, i.min(WINDOW_BITS), bit);
            let start = (i + 1).saturating_sub(WINDOW_BITS);
            prop_assert_eq!(rolling, window_value(&bits[start..=i]));
        }
    }

    #[test]
    fn prop_iterator_yields_every_window(bits in arb_bits(0, 160)) {
        let values: Vec<(usize, u32)> = WindowValues::new(&bits).collect();
        let expected = (bits.len() + 1).saturating_sub(WINDOW_BITS);
        prop_assert_eq!(values.len(), expected);
        for (start, value) in values {
            prop_assert_eq!(value, window_value(&bits[start..start + WINDOW_BITS]));
        }
    }
}
