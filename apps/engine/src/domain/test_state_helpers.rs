//! Test-only game state builders for domain unit tests.

use crate::domain::bidding::FinalBid;
use crate::domain::player_view::VisibleGameState;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{GameState, Phase, Player, Seat};
use crate::domain::{try_parse_cards, Card, Difficulty, Direction, Suit};

pub fn humans() -> [Player; PLAYERS] {
    [
        Player::human(0, "north"),
        Player::human(1, "east"),
        Player::human(2, "south"),
        Player::human(3, "west"),
    ]
}

/// Same table with the given seats replaced by AI players.
pub fn with_ai(ai_seats: &[Seat], difficulty: Difficulty) -> [Player; PLAYERS] {
    let mut players = humans();
    for &seat in ai_seats {
        players[seat as usize] = Player::ai(seat, difficulty);
    }
    players
}

pub fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).unwrap()
}

/// Bidding-phase state with explicit hands and kitty; `first_bidder` is on turn.
pub fn bidding_state(
    players: [Player; PLAYERS],
    hands: [Vec<Card>; PLAYERS],
    kitty: Vec<Card>,
    first_bidder: Seat,
) -> GameState {
    let mut state = GameState::new(players, 7).unwrap();
    state.phase = Phase::Bid;
    state.hand_no = 1;
    state.first_bidder = first_bidder;
    state.turn = Some(first_bidder);
    state.hand.hands = hands;
    state.hand.kitty = kitty;
    state
}

/// Bidding-phase state dealt from a seed, all humans.
pub fn dealt_state(seed: i64) -> GameState {
    let mut state = GameState::new(humans(), seed).unwrap();
    crate::domain::game_transition::start_hand(&mut state).unwrap();
    state
}

/// Play-phase state with a fixed contract and `leader` on lead.
pub fn play_state(
    hands: [Vec<Card>; PLAYERS],
    declarer: Seat,
    trump: Option<Suit>,
    direction: Direction,
    leader: Seat,
) -> GameState {
    let mut state = bidding_state(humans(), hands, Vec::new(), 0);
    state.phase = Phase::Play;
    state.hand.final_bid = Some(FinalBid {
        seat: declarer,
        value: 4,
        direction,
        no_trump: trump.is_none(),
        trump,
    });
    state.turn = Some(leader);
    state
}

/// AI view for `seat` mid-play: ascending contract declared by seat 0,
/// `trick` already on the table.
pub fn play_view(
    seat: Seat,
    hand: &[&str],
    trick: &[(Seat, &str)],
    trump: Option<Suit>,
) -> VisibleGameState {
    let mut state = GameState::new(humans(), 1).unwrap();
    state.phase = Phase::Play;
    state.hand.hands[seat as usize] = cards(hand);
    state.hand.current_trick = trick
        .iter()
        .map(|(s, t)| (*s, t.parse().unwrap()))
        .collect();
    state.turn = Some(seat);
    state.hand.final_bid = Some(FinalBid {
        seat: 0,
        value: 4,
        direction: Direction::Ascending,
        no_trump: trump.is_none(),
        trump,
    });
    VisibleGameState::for_seat(&state, seat)
}
