use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::bid_eval::forced_minimum_bid;
use crate::domain::cards_logic::Contract;
use crate::domain::kitty::absorb_kitty;
use crate::domain::rules::{tricks_required, valid_bid_range, PLAYERS};
use crate::domain::state::{nth_from, require_phase, require_turn, GameState, Phase, Seat};
use crate::domain::{Direction, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// What a seat says when it is their turn to bid.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BidChoice {
    Pass,
    Bid {
        value: u8,
        direction: Direction,
        no_trump: bool,
    },
}

impl BidChoice {
    pub const fn value(&self) -> Option<u8> {
        match self {
            BidChoice::Pass => None,
            BidChoice::Bid { value, .. } => Some(*value),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub seat: Seat,
    pub choice: BidChoice,
}

/// The contract as fixed by the bid winner.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct FinalBid {
    pub seat: Seat,
    pub value: u8,
    pub direction: Direction,
    pub no_trump: bool,
    /// Trump suit; None exactly when `no_trump` is set.
    pub trump: Option<Suit>,
}

impl FinalBid {
    pub fn contract(&self) -> Contract {
        Contract {
            trump: self.trump,
            direction: self.direction,
            no_trump: self.no_trump,
        }
    }

    pub const fn tricks_required(&self) -> u8 {
        tricks_required(self.value)
    }
}

/// How bidding stands after a submitted bid.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BidOutcome {
    /// Another seat bids next.
    Continue { next: Seat },
    /// Bidding closed; the (human) winner must finalize.
    AwaitFinalize { winner: Seat },
    /// Bidding closed and the contract is fixed (AI winner or forced bid).
    Finalized { final_bid: FinalBid, forced: bool },
}

/// Seat expected to bid next, or None once all four have bid.
pub fn expected_bidder(state: &GameState) -> Option<Seat> {
    let count = state.hand.bids.len();
    (count < PLAYERS).then(|| nth_from(state.first_bidder, count as u8))
}

/// Record a bid for `who`. A strictly higher value replaces the current
/// highest bid; the fourth bid closes bidding and moves to `Kitty`.
pub fn submit_bid(
    state: &mut GameState,
    who: Seat,
    choice: BidChoice,
) -> Result<BidOutcome, DomainError> {
    require_phase(state, Phase::Bid, "submit_bid")?;
    require_turn(state, who, "submit_bid")?;

    if let Some(value) = choice.value() {
        if !valid_bid_range().contains(&value) {
            return Err(DomainError::validation(
                ValidationKind::BidOutOfRange,
                format!("Bid value {value} outside {:?}", valid_bid_range()),
            ));
        }
    }

    let bid = Bid { seat: who, choice };
    state.hand.bids.push(bid);
    if let Some(value) = choice.value() {
        let current = state
            .hand
            .highest
            .and_then(|b| b.choice.value())
            .unwrap_or(0);
        if value > current {
            state.hand.highest = Some(bid);
        }
    }

    match expected_bidder(state) {
        Some(next) => {
            state.turn = Some(next);
            Ok(BidOutcome::Continue { next })
        }
        None => close_bidding(state),
    }
}

fn close_bidding(state: &mut GameState) -> Result<BidOutcome, DomainError> {
    state.phase = Phase::Kitty;

    let Some(highest) = state.hand.highest else {
        // Everyone passed: the last seat to act takes the forced minimum.
        let seat = nth_from(state.first_bidder, (PLAYERS - 1) as u8);
        let candidate = forced_minimum_bid(state.hand_of(seat));
        let final_bid = candidate.into_final(seat);
        state.hand.highest = Some(Bid {
            seat,
            choice: BidChoice::Bid {
                value: final_bid.value,
                direction: final_bid.direction,
                no_trump: false,
            },
        });
        debug!(seat, ?final_bid, "All seats passed; forced minimum bid");
        absorb_kitty(state, seat)?;
        state.hand.final_bid = Some(final_bid);
        state.turn = Some(seat);
        return Ok(BidOutcome::Finalized {
            final_bid,
            forced: true,
        });
    };

    let winner = highest.seat;
    absorb_kitty(state, winner)?;
    state.turn = Some(winner);

    if !state.is_ai(winner) {
        return Ok(BidOutcome::AwaitFinalize { winner });
    }

    let cached = state.hand.ai_best[winner as usize].ok_or_else(|| {
        DomainError::invariant(format!("AI seat {winner} won bidding without a cached candidate"))
    })?;
    let value = highest
        .choice
        .value()
        .ok_or_else(|| DomainError::invariant("highest bid is a pass"))?;
    let final_bid = FinalBid {
        value,
        ..cached.into_final(winner)
    };
    state.hand.final_bid = Some(final_bid);
    Ok(BidOutcome::Finalized {
        final_bid,
        forced: false,
    })
}

/// Human bid winner fixes direction and trump suit. `suit` is required
/// unless the winning bid was no-trump, in which case it must be None.
pub fn finalize_bid(
    state: &mut GameState,
    who: Seat,
    direction: Direction,
    suit: Option<Suit>,
) -> Result<FinalBid, DomainError> {
    require_phase(state, Phase::Kitty, "finalize_bid")?;
    if state.hand.final_bid.is_some() {
        return Err(DomainError::validation(
            ValidationKind::BidAlreadyFinalized,
            "Winning bid already finalized",
        ));
    }
    let highest = state
        .hand
        .highest
        .ok_or_else(|| DomainError::invariant("Kitty phase without a winning bid"))?;
    if state.is_ai(who) {
        return Err(DomainError::validation(
            ValidationKind::SeatIsAi,
            format!("Seat {who} is AI and finalizes automatically"),
        ));
    }
    if highest.seat != who {
        return Err(DomainError::validation(
            ValidationKind::NotBidWinner,
            format!("Seat {who} did not win the bidding"),
        ));
    }

    let BidChoice::Bid {
        value, no_trump, ..
    } = highest.choice
    else {
        return Err(DomainError::invariant("highest bid is a pass"));
    };

    let trump = match (no_trump, suit) {
        (true, None) => None,
        (false, Some(s)) => Some(s),
        (true, Some(_)) => {
            return Err(DomainError::validation(
                ValidationKind::InvalidFinalBid,
                "No-trump contract cannot name a trump suit",
            ))
        }
        (false, None) => {
            return Err(DomainError::validation(
                ValidationKind::InvalidFinalBid,
                "Trump suit required",
            ))
        }
    };

    let final_bid = FinalBid {
        seat: who,
        value,
        direction,
        no_trump,
        trump,
    };
    state.hand.final_bid = Some(final_bid);
    Ok(final_bid)
}
