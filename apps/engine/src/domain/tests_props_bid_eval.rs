use proptest::prelude::*;

use crate::domain::bid_eval::{evaluate_all, no_trump_candidates, run_strength};
use crate::domain::rules::{BOOK_OFFSET, MAX_BID, MIN_BID};
use crate::domain::{test_gens, test_prelude, Card, Rank};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: run strength stays within 0..=13 for dealt-size hands.
    #[test]
    fn prop_run_strength_bounded(
        hand in test_gens::hand(),
        suit in test_gens::suit(),
        direction in test_gens::direction(),
    ) {
        let s = run_strength(&hand, suit, direction);
        prop_assert!(s <= 13, "strength {} out of range for {:?}", s, hand);
    }

    /// Property: every candidate carries a legal bid value and a strength
    /// of at least the minimum bid.
    #[test]
    fn prop_candidates_are_legal_bids(hand in test_gens::hand(), with_nt in any::<bool>()) {
        for cand in evaluate_all(&hand, with_nt).into_iter().chain(no_trump_candidates(&hand)) {
            prop_assert!((MIN_BID..=MAX_BID).contains(&cand.value));
            prop_assert!(cand.strength >= MIN_BID);
            if cand.suit.is_some() {
                prop_assert_eq!(cand.value, cand.strength.min(MAX_BID));
            } else {
                prop_assert_eq!(cand.value + BOOK_OFFSET, cand.strength);
            }
        }
    }

    /// Property: adding a joker never lowers run strength.
    #[test]
    fn prop_jokers_monotonic(
        base in (0usize..=11).prop_flat_map(test_gens::unique_standard_cards),
        suit in test_gens::suit(),
        direction in test_gens::direction(),
    ) {
        let zero = run_strength(&base, suit, direction);
        let mut one_joker = base.clone();
        one_joker.push(Card::joker(Rank::SmallJoker));
        let one = run_strength(&one_joker, suit, direction);
        let mut two_jokers = one_joker.clone();
        two_jokers.push(Card::joker(Rank::BigJoker));
        let two = run_strength(&two_jokers, suit, direction);
        prop_assert!(zero <= one && one <= two, "{} {} {} for {:?}", zero, one, two, base);
    }
}
