use serde::{Deserialize, Serialize};

use crate::domain::bidding::FinalBid;
use crate::domain::rules::{tricks_required, BOOK_OFFSET};
use crate::domain::state::{require_final_bid, require_phase, GameState, Phase, Team};
use crate::errors::domain::DomainError;

/// Score change for the contracting team: tricks beyond five when the
/// contract is made, minus the bid value when set. No-trump doubles either.
pub fn hand_delta(value: u8, no_trump: bool, tricks: u8) -> i32 {
    let delta = if tricks >= tricks_required(value) {
        i32::from(tricks) - i32::from(BOOK_OFFSET)
    } else {
        -i32::from(value)
    };
    if no_trump {
        delta * 2
    } else {
        delta
    }
}

/// Result of scoring one hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandScore {
    pub bidder_team: Team,
    pub final_bid: FinalBid,
    pub tricks: u8,
    pub made: bool,
    pub delta: i32,
    pub scores: [i32; 2],
    pub game_winner: Option<Team>,
}

/// Decide whether the game is over. Any team at or above `winning_score`
/// wins; otherwise a team at or below `losing_score` hands the win to the
/// other side.
pub fn game_outcome(scores: [i32; 2], winning_score: i32, losing_score: i32) -> Option<Team> {
    if let Some(team) = Team::ALL
        .iter()
        .copied()
        .filter(|t| scores[t.index()] >= winning_score)
        .max_by_key(|t| scores[t.index()])
    {
        return Some(team);
    }
    Team::ALL
        .iter()
        .copied()
        .find(|t| scores[t.index()] <= losing_score)
        .map(Team::other)
}

/// Apply the finished hand's score. Moves to `End` when the game is decided,
/// otherwise stays in `Score` until the next hand starts.
pub fn apply_hand_scoring(
    state: &mut GameState,
    winning_score: i32,
    losing_score: i32,
) -> Result<HandScore, DomainError> {
    require_phase(state, Phase::Score, "apply_hand_scoring")?;
    let final_bid = require_final_bid(state, "apply_hand_scoring")?;

    let bidder_team = Team::of(final_bid.seat);
    let tricks = state.tricks_won(bidder_team);
    let delta = hand_delta(final_bid.value, final_bid.no_trump, tricks);
    state.scores[bidder_team.index()] += delta;

    let game_winner = game_outcome(state.scores, winning_score, losing_score);
    if let Some(team) = game_winner {
        state.winner = Some(team);
        state.phase = Phase::End;
        state.turn = None;
    }

    Ok(HandScore {
        bidder_team,
        final_bid,
        tricks,
        made: tricks >= final_bid.tricks_required(),
        delta,
        scores: state.scores,
        game_winner,
    })
}
