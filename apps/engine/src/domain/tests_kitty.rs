use crate::domain::bidding::{finalize_bid, submit_bid, BidChoice};
use crate::domain::kitty::apply_discard;
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::dealt_state;
use crate::domain::{Card, Direction, GameState, Rank, Suit};
use crate::errors::domain::ValidationKind;

/// Seat 0 wins with a 4 bid; everyone else passes.
fn awaiting_discard(seed: i64, trump: Option<Suit>) -> GameState {
    let mut state = dealt_state(seed);
    let choice = BidChoice::Bid {
        value: 4,
        direction: Direction::Ascending,
        no_trump: trump.is_none(),
    };
    submit_bid(&mut state, 0, choice).unwrap();
    for seat in 1..4 {
        submit_bid(&mut state, seat, BidChoice::Pass).unwrap();
    }
    finalize_bid(&mut state, 0, Direction::Ascending, trump).unwrap();
    state
}

fn all_jokers(state: &GameState) -> Vec<Card> {
    state
        .hand
        .hands
        .iter()
        .flatten()
        .chain(state.hand.kitty.iter())
        .filter(|c| c.is_joker())
        .copied()
        .collect()
}

#[test]
fn discard_returns_six_and_starts_play() {
    let mut state = awaiting_discard(21, Some(Suit::Spades));
    let discards: Vec<Card> = state.hand_of(0)[..6].to_vec();
    apply_discard(&mut state, 0, &discards).unwrap();

    assert_eq!(state.hand_of(0).len(), 12);
    assert_eq!(state.hand.kitty.len(), 6);
    assert_eq!(state.phase, Phase::Play);
    assert_eq!(state.turn, Some(0));
}

#[test]
fn jokers_are_stamped_with_trump_everywhere() {
    let mut state = awaiting_discard(22, Some(Suit::Hearts));
    let discards: Vec<Card> = state.hand_of(0)[..6].to_vec();
    apply_discard(&mut state, 0, &discards).unwrap();

    let jokers = all_jokers(&state);
    assert_eq!(jokers.len(), 2);
    assert!(jokers.iter().all(|j| j.suit == Some(Suit::Hearts)));
}

#[test]
fn no_trump_leaves_jokers_suitless() {
    let mut state = awaiting_discard(23, None);
    let discards: Vec<Card> = state.hand_of(0)[6..12].to_vec();
    apply_discard(&mut state, 0, &discards).unwrap();
    assert!(all_jokers(&state).iter().all(|j| j.suit.is_none()));
}

#[test]
fn wrong_count_is_rejected() {
    let mut state = awaiting_discard(24, Some(Suit::Clubs));
    let discards: Vec<Card> = state.hand_of(0)[..5].to_vec();
    let err = apply_discard(&mut state, 0, &discards).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::DiscardCount));
    assert_eq!(state.hand_of(0).len(), 18);
}

#[test]
fn unmatched_card_leaves_hand_and_kitty_unchanged() {
    let mut state = awaiting_discard(25, Some(Suit::Clubs));
    let before_hand = state.hand_of(0).to_vec();
    let before_kitty = state.hand.kitty.clone();

    let missing = state.hand_of(1)[0];
    let mut discards: Vec<Card> = state.hand_of(0)[..5].to_vec();
    discards.push(missing);

    let err = apply_discard(&mut state, 0, &discards).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::CardNotInHand));
    assert_eq!(state.hand_of(0), before_hand.as_slice());
    assert_eq!(state.hand.kitty, before_kitty);
    assert_eq!(state.phase, Phase::Kitty);
}

#[test]
fn same_card_twice_does_not_count_as_two() {
    let mut state = awaiting_discard(26, Some(Suit::Diamonds));
    let first = state.hand_of(0)[0];
    let mut discards: Vec<Card> = state.hand_of(0)[..5].to_vec();
    discards.push(first);
    let err = apply_discard(&mut state, 0, &discards).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::CardNotInHand));
}

#[test]
fn joker_discard_matches_by_rank() {
    let mut state = awaiting_discard(27, Some(Suit::Spades));
    // Every card is in some hand after the kitty is absorbed; move the
    // Big Joker to the winner if needed.
    let home = (0..4usize)
        .find(|&s| state.hand.hands[s].iter().any(|c| c.rank == Rank::BigJoker))
        .unwrap();
    if home != 0 {
        let pos = state.hand.hands[home]
            .iter()
            .position(|c| c.rank == Rank::BigJoker)
            .unwrap();
        let joker = state.hand.hands[home].remove(pos);
        let give_back = state.hand.hands[0].remove(0);
        state.hand.hands[home].push(give_back);
        state.hand.hands[0].push(joker);
    }

    let mut discards = vec![Card {
        rank: Rank::BigJoker,
        suit: Some(Suit::Clubs),
    }];
    discards.extend(
        state
            .hand_of(0)
            .iter()
            .filter(|c| !c.is_joker())
            .take(5)
            .copied(),
    );
    apply_discard(&mut state, 0, &discards).unwrap();
    let returned = state.hand.kitty.iter().find(|c| c.rank == Rank::BigJoker).unwrap();
    assert_eq!(returned.suit, Some(Suit::Spades));
}

#[test]
fn only_the_winner_may_discard() {
    let mut state = awaiting_discard(28, Some(Suit::Hearts));
    let discards: Vec<Card> = state.hand_of(1)[..6].to_vec();
    let err = apply_discard(&mut state, 1, &discards).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::NotBidWinner));
}

#[test]
fn discard_before_finalize_is_rejected() {
    let mut state = dealt_state(29);
    submit_bid(
        &mut state,
        0,
        BidChoice::Bid {
            value: 5,
            direction: Direction::Ascending,
            no_trump: false,
        },
    )
    .unwrap();
    for seat in 1..4 {
        submit_bid(&mut state, seat, BidChoice::Pass).unwrap();
    }
    let discards: Vec<Card> = state.hand_of(0)[..6].to_vec();
    let err = apply_discard(&mut state, 0, &discards).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::BidNotFinalized));
}
