use crate::domain::bid_eval::BidCandidate;
use crate::domain::bidding::{finalize_bid, submit_bid, BidChoice, BidOutcome};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{dealt_state, with_ai};
use crate::domain::{Difficulty, Direction, GameState, Suit};
use crate::errors::domain::ValidationKind;

fn bid(value: u8) -> BidChoice {
    BidChoice::Bid {
        value,
        direction: Direction::Ascending,
        no_trump: false,
    }
}

fn run_bids(state: &mut GameState, choices: [BidChoice; 4]) -> BidOutcome {
    let mut outcome = None;
    for choice in choices {
        let seat = state.turn.unwrap();
        outcome = Some(submit_bid(state, seat, choice).unwrap());
    }
    outcome.unwrap()
}

#[test]
fn bids_rotate_from_first_bidder() {
    let mut state = dealt_state(11);
    assert_eq!(state.turn, Some(0));
    let out = submit_bid(&mut state, 0, BidChoice::Pass).unwrap();
    assert_eq!(out, BidOutcome::Continue { next: 1 });
    assert_eq!(state.turn, Some(1));
}

#[test]
fn out_of_range_bid_is_rejected_without_recording() {
    let mut state = dealt_state(11);
    for value in [0, 3, 8] {
        let err = submit_bid(&mut state, 0, bid(value)).unwrap_err();
        assert_eq!(err.validation_kind(), Some(&ValidationKind::BidOutOfRange));
    }
    assert!(state.hand.bids.is_empty());
    assert_eq!(state.turn, Some(0));
}

#[test]
fn out_of_turn_bid_is_rejected() {
    let mut state = dealt_state(11);
    let err = submit_bid(&mut state, 2, BidChoice::Pass).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::OutOfTurn));
}

#[test]
fn only_strictly_higher_bids_replace_the_incumbent() {
    let mut state = dealt_state(11);
    submit_bid(&mut state, 0, bid(5)).unwrap();
    submit_bid(&mut state, 1, bid(5)).unwrap();
    assert_eq!(state.hand.highest.unwrap().seat, 0);
    submit_bid(&mut state, 2, bid(6)).unwrap();
    assert_eq!(state.hand.highest.unwrap().seat, 2);
    submit_bid(&mut state, 3, bid(4)).unwrap();
    assert_eq!(state.hand.highest.unwrap().seat, 2);
}

#[test]
fn human_winner_absorbs_kitty_and_awaits_finalize() {
    let mut state = dealt_state(12);
    let out = run_bids(&mut state, [BidChoice::Pass, bid(5), BidChoice::Pass, BidChoice::Pass]);
    assert_eq!(out, BidOutcome::AwaitFinalize { winner: 1 });
    assert_eq!(state.phase, Phase::Kitty);
    assert_eq!(state.turn, Some(1));
    assert_eq!(state.hand_of(1).len(), 18);
    assert!(state.hand.kitty.is_empty());
    assert!(state.hand.final_bid.is_none());
}

#[test]
fn finalize_checks_winner_and_suit() {
    let mut state = dealt_state(12);
    run_bids(&mut state, [BidChoice::Pass, bid(5), BidChoice::Pass, BidChoice::Pass]);

    let err = finalize_bid(&mut state, 0, Direction::Ascending, Some(Suit::Hearts)).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::NotBidWinner));

    let err = finalize_bid(&mut state, 1, Direction::Ascending, None).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::InvalidFinalBid));

    let fb = finalize_bid(&mut state, 1, Direction::Descending, Some(Suit::Hearts)).unwrap();
    assert_eq!(fb.value, 5);
    assert_eq!(fb.trump, Some(Suit::Hearts));
    assert_eq!(fb.direction, Direction::Descending);
    assert_eq!(fb.tricks_required(), 10);

    let err = finalize_bid(&mut state, 1, Direction::Descending, Some(Suit::Hearts)).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::BidAlreadyFinalized));
}

#[test]
fn no_trump_finalize_must_not_name_a_suit() {
    let mut state = dealt_state(13);
    let nt = BidChoice::Bid {
        value: 4,
        direction: Direction::Ascending,
        no_trump: true,
    };
    run_bids(&mut state, [nt, BidChoice::Pass, BidChoice::Pass, BidChoice::Pass]);
    let err = finalize_bid(&mut state, 0, Direction::Ascending, Some(Suit::Spades)).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::InvalidFinalBid));
    let fb = finalize_bid(&mut state, 0, Direction::Ascending, None).unwrap();
    assert!(fb.no_trump);
    assert!(fb.contract().no_trump);
}

#[test]
fn ai_seat_cannot_finalize_manually() {
    let mut state = dealt_state(14);
    state.players = with_ai(&[3], Difficulty::Easy);
    run_bids(&mut state, [bid(4), BidChoice::Pass, BidChoice::Pass, BidChoice::Pass]);
    let err = finalize_bid(&mut state, 3, Direction::Ascending, Some(Suit::Clubs)).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::SeatIsAi));
}

#[test]
fn all_pass_forces_last_seat_to_minimum_bid() {
    let mut state = dealt_state(15);
    state.first_bidder = 2;
    state.turn = Some(2);
    let out = run_bids(&mut state, [BidChoice::Pass; 4]);
    let BidOutcome::Finalized { final_bid, forced } = out else {
        panic!("expected forced finalize, got {out:?}");
    };
    assert!(forced);
    assert_eq!(final_bid.seat, 1);
    assert_eq!(final_bid.value, 4);
    assert!(final_bid.trump.is_some());
    assert_eq!(state.phase, Phase::Kitty);
    assert_eq!(state.hand_of(1).len(), 18);
    assert_eq!(state.turn, Some(1));
}

#[test]
fn ai_winner_finalizes_from_cached_candidate() {
    let mut state = dealt_state(16);
    state.players = with_ai(&[0], Difficulty::Medium);
    state.hand.ai_best[0] = Some(BidCandidate {
        value: 6,
        direction: Direction::Descending,
        suit: Some(Suit::Diamonds),
        no_trump: false,
        strength: 6,
    });
    let out = run_bids(&mut state, [bid(6), BidChoice::Pass, BidChoice::Pass, BidChoice::Pass]);
    let BidOutcome::Finalized { final_bid, forced } = out else {
        panic!("expected finalize, got {out:?}");
    };
    assert!(!forced);
    assert_eq!(final_bid.seat, 0);
    assert_eq!(final_bid.value, 6);
    assert_eq!(final_bid.trump, Some(Suit::Diamonds));
    assert_eq!(final_bid.direction, Direction::Descending);
}

#[test]
fn ai_winner_without_cache_is_an_invariant_violation() {
    let mut state = dealt_state(17);
    state.players = with_ai(&[0], Difficulty::Hard);
    submit_bid(&mut state, 0, bid(5)).unwrap();
    submit_bid(&mut state, 1, BidChoice::Pass).unwrap();
    submit_bid(&mut state, 2, BidChoice::Pass).unwrap();
    let err = submit_bid(&mut state, 3, BidChoice::Pass).unwrap_err();
    assert!(err.is_invariant());
}

#[test]
fn bidding_after_close_is_a_phase_mismatch() {
    let mut state = dealt_state(18);
    run_bids(&mut state, [bid(4), BidChoice::Pass, BidChoice::Pass, BidChoice::Pass]);
    let err = submit_bid(&mut state, 0, BidChoice::Pass).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::PhaseMismatch));
}
