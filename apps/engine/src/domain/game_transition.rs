//! Hand lifecycle transitions: Initiated/Score → (Start) → Shuffle → Deal → Bid.

use crate::domain::dealing::deal_hands;
use crate::domain::seed_derivation::derive_dealing_seed;
use crate::domain::state::{next_player, GameState, HandState, Phase, Seat};
use crate::errors::domain::{DomainError, ValidationKind};

/// What a freshly started hand looks like to the caller.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct HandStart {
    pub hand_no: u32,
    pub first_bidder: Seat,
}

/// Move from `Initiated` or `Score` into `Start` with a fresh hand.
pub(crate) fn enter_start(state: &mut GameState) -> Result<(), DomainError> {
    match state.phase {
        Phase::Initiated => {}
        Phase::Score => {
            state.first_bidder = next_player(state.first_bidder);
        }
        Phase::End => {
            return Err(DomainError::validation(
                ValidationKind::GameOver,
                "Game is over",
            ))
        }
        other => {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                format!("Cannot start a hand during {other:?}"),
            ))
        }
    }

    state.phase = Phase::Start;
    state.hand = HandState::default();
    state.turn = None;
    state.hand_no += 1;
    Ok(())
}

/// Begin the next hand: reset per-hand state, rotate the first bidder
/// (after the first hand), shuffle and deal, then open bidding.
///
/// Cumulative scores carry over; everything else is reset.
pub fn start_hand(state: &mut GameState) -> Result<HandStart, DomainError> {
    enter_start(state)?;

    state.phase = Phase::Shuffle;
    let seed = derive_dealing_seed(state.game_seed, state.hand_no);

    state.phase = Phase::Deal;
    let deal = deal_hands(seed);
    state.hand.hands = deal.hands;
    state.hand.kitty = deal.kitty;

    state.phase = Phase::Bid;
    state.turn = Some(state.first_bidder);

    Ok(HandStart {
        hand_no: state.hand_no,
        first_bidder: state.first_bidder,
    })
}

/// End the game immediately. Scores are kept; no winner is declared.
pub fn abandon(state: &mut GameState) -> Result<(), DomainError> {
    if state.phase == Phase::End {
        return Err(DomainError::validation(
            ValidationKind::GameOver,
            "Game is already over",
        ));
    }
    state.phase = Phase::End;
    state.turn = None;
    Ok(())
}
