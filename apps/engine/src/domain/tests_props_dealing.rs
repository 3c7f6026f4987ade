use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::dealing::deal_hands;
use crate::domain::rules::{HAND_SIZE, KITTY_SIZE};
use crate::domain::test_prelude;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: 54 distinct cards per deal, 48 in hands and 6 in the kitty.
    #[test]
    fn prop_deal_accounts_for_every_card(seed in any::<u64>()) {
        let deal = deal_hands(seed);
        let mut seen = HashSet::new();
        for hand in &deal.hands {
            prop_assert_eq!(hand.len(), HAND_SIZE);
            for card in hand {
                prop_assert!(seen.insert(*card), "duplicate {:?}", card);
            }
        }
        prop_assert_eq!(deal.kitty.len(), KITTY_SIZE);
        for card in &deal.kitty {
            prop_assert!(seen.insert(*card), "duplicate {:?}", card);
        }
        prop_assert_eq!(seen.len(), 54);
        prop_assert!(seen.iter().filter(|c| c.is_joker()).all(|c| c.suit.is_none()));
    }
}
