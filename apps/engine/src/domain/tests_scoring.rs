use crate::domain::game_transition::start_hand;
use crate::domain::scoring::apply_hand_scoring;
use crate::domain::state::{Phase, Team};
use crate::domain::test_state_helpers::play_state;
use crate::domain::{Direction, GameState, Suit};
use crate::errors::domain::ValidationKind;

fn scored_state(declarer: u8, trump: Option<Suit>, value: u8, tricks_for_declarer: u8) -> GameState {
    let mut state = play_state(Default::default(), declarer, trump, Direction::Ascending, 0);
    if let Some(fb) = state.hand.final_bid.as_mut() {
        fb.value = value;
    }
    let team = Team::of(declarer);
    state.hand.tricks_won[team.index()] = tricks_for_declarer;
    state.hand.tricks_won[team.other().index()] = 12 - tricks_for_declarer;
    state.phase = Phase::Score;
    state
}

#[test]
fn made_contract_adds_books_over_five() {
    let mut state = scored_state(0, Some(Suit::Spades), 3, 9);
    let score = apply_hand_scoring(&mut state, 7, -7).unwrap();
    assert!(score.made);
    assert_eq!(score.delta, 4);
    assert_eq!(state.score(Team::A), 4);
    assert_eq!(state.score(Team::B), 0);
    assert_eq!(state.phase, Phase::Score);
}

#[test]
fn no_trump_doubles_the_delta() {
    let mut state = scored_state(1, None, 3, 9);
    let score = apply_hand_scoring(&mut state, 7, -7).unwrap();
    assert_eq!(score.delta, 8);
    assert_eq!(score.bidder_team, Team::B);
    assert_eq!(state.score(Team::B), 8);
    assert_eq!(state.phase, Phase::End);
    assert_eq!(state.winner, Some(Team::B));
    assert_eq!(score.game_winner, Some(Team::B));
}

#[test]
fn set_contract_loses_bid_value() {
    let mut state = scored_state(2, Some(Suit::Hearts), 6, 10);
    let score = apply_hand_scoring(&mut state, 7, -7).unwrap();
    assert!(!score.made);
    assert_eq!(score.delta, -6);
    assert_eq!(state.score(Team::A), -6);
}

#[test]
fn falling_to_losing_score_ends_the_game_for_the_other_team() {
    let mut state = scored_state(2, Some(Suit::Hearts), 7, 3);
    state.scores = [-1, 2];
    apply_hand_scoring(&mut state, 7, -7).unwrap();
    assert_eq!(state.score(Team::A), -8);
    assert_eq!(state.winner, Some(Team::B));
    assert_eq!(state.phase, Phase::End);
}

#[test]
fn scoring_outside_score_phase_is_rejected() {
    let mut state = scored_state(0, Some(Suit::Clubs), 4, 9);
    state.phase = Phase::Play;
    let err = apply_hand_scoring(&mut state, 7, -7).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::PhaseMismatch));
}

#[test]
fn next_hand_keeps_scores_and_rotates_first_bidder() {
    let mut state = scored_state(0, Some(Suit::Spades), 4, 9);
    state.hand_no = 1;
    apply_hand_scoring(&mut state, 7, -7).unwrap();
    let start = start_hand(&mut state).unwrap();
    assert_eq!(start.hand_no, 2);
    assert_eq!(start.first_bidder, 1);
    assert_eq!(state.score(Team::A), 4);
    assert_eq!(state.phase, Phase::Bid);
    assert!(state.hand.final_bid.is_none());
    assert_eq!(state.hand.tricks_won, [0, 0]);
}
