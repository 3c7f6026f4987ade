use proptest::prelude::*;

use crate::domain::cards_logic::card_strength;
use crate::domain::tricks::{determine_trick_winner, lead_suit};
use crate::domain::{test_gens, test_prelude, Card, Contract, Seat};

/// Independent oracle: pick the winner by explicit rule per contract mode.
fn oracle_winner(plays: &[(Seat, Card)], contract: &Contract) -> Option<Seat> {
    let lead = lead_suit(plays)?;
    if let Some(trump) = contract.trump.filter(|_| !contract.no_trump) {
        let trumps: Vec<_> = plays.iter().filter(|(_, c)| c.is_suit(trump)).collect();
        if !trumps.is_empty() {
            return trumps
                .into_iter()
                .max_by_key(|(_, c)| card_strength(c, Some(lead), contract))
                .map(|(s, _)| *s);
        }
    }
    plays
        .iter()
        .filter(|(_, c)| c.is_suit(lead) && !(contract.no_trump && c.is_joker()))
        .filter_map(|(s, c)| card_strength(c, Some(lead), contract).map(|v| (v, *s)))
        .max_by_key(|(v, _)| *v)
        .map(|(_, s)| s)
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: the winner is always one of the four seats that played.
    #[test]
    fn prop_winner_is_a_player(trick in test_gens::complete_trick()) {
        let (plays, contract) = trick;
        let winner = determine_trick_winner(&plays, &contract).unwrap();
        prop_assert!(plays.iter().any(|(s, _)| *s == winner));
    }

    /// Property: under a trumped contract any trump on the table wins over every non-trump.
    #[test]
    fn prop_trump_dominates(trick in test_gens::complete_trick()) {
        let (plays, contract) = trick;
        prop_assume!(!contract.no_trump);
        let winner = determine_trick_winner(&plays, &contract).unwrap();
        let winning_card = plays.iter().find(|(s, _)| *s == winner).unwrap().1;
        if plays.iter().any(|(_, c)| contract.is_trump(c)) {
            prop_assert!(contract.is_trump(&winning_card),
                "non-trump {:?} won over trumps in {:?}", winning_card, plays);
        }
    }

    /// Property: the engine agrees with the oracle whenever the oracle has an answer.
    #[test]
    fn prop_matches_oracle(trick in test_gens::complete_trick()) {
        let (plays, contract) = trick;
        let winner = determine_trick_winner(&plays, &contract).unwrap();
        if let Some(expected) = oracle_winner(&plays, &contract) {
            prop_assert_eq!(winner, expected, "plays {:?} contract {:?}", plays, contract);
        }
    }
}
