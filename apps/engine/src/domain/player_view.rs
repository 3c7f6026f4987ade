//! Seat-scoped view of a game: what one player may see at a decision point.
//!
//! [`VisibleGameState`] is both the snapshot returned to callers after each
//! action and the only input AI players receive. Other seats' hands and the
//! kitty are reduced to card counts.

use serde::{Deserialize, Serialize};

use crate::domain::bidding::{Bid, FinalBid};
use crate::domain::cards_logic::Contract;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{CompletedTrick, GameState, Phase, Player, Seat, Team, VoidMap};
use crate::domain::tricks::{determine_trick_winner, lead_suit, legal_from_hand};
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleGameState {
    pub seat: Seat,
    pub phase: Phase,
    pub hand_no: u32,
    pub players: [Player; PLAYERS],
    pub first_bidder: Seat,
    pub turn: Option<Seat>,
    /// This seat's cards.
    pub hand: Vec<Card>,
    /// Card count per seat.
    pub hand_sizes: [usize; PLAYERS],
    pub kitty_size: usize,
    pub bids: Vec<Bid>,
    pub highest_bid: Option<Bid>,
    pub final_bid: Option<FinalBid>,
    pub current_trick: Vec<(Seat, Card)>,
    pub completed_tricks: Vec<CompletedTrick>,
    pub tricks_won: [u8; 2],
    pub voids: VoidMap,
    pub scores: [i32; 2],
    pub winner: Option<Team>,
}

impl VisibleGameState {
    pub fn for_seat(state: &GameState, seat: Seat) -> Self {
        let mut hand_sizes = [0; PLAYERS];
        for (i, h) in state.hand.hands.iter().enumerate() {
            hand_sizes[i] = h.len();
        }
        Self {
            seat,
            phase: state.phase,
            hand_no: state.hand_no,
            players: state.players.clone(),
            first_bidder: state.first_bidder,
            turn: state.turn,
            hand: state.hand_of(seat).to_vec(),
            hand_sizes,
            kitty_size: state.hand.kitty.len(),
            bids: state.hand.bids.clone(),
            highest_bid: state.hand.highest,
            final_bid: state.hand.final_bid,
            current_trick: state.hand.current_trick.clone(),
            completed_tricks: state.hand.completed_tricks.clone(),
            tricks_won: state.hand.tricks_won,
            voids: state.hand.voids,
            scores: state.scores,
            winner: state.winner,
        }
    }

    pub fn contract(&self) -> Option<Contract> {
        self.final_bid.map(|b| b.contract())
    }

    pub fn trump(&self) -> Option<Suit> {
        self.final_bid.and_then(|b| b.trump)
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        lead_suit(&self.current_trick)
    }

    /// Cards this seat may legally play now.
    pub fn legal_plays(&self) -> Vec<Card> {
        legal_from_hand(&self.hand, self.lead_suit())
    }

    pub fn is_leading(&self) -> bool {
        self.current_trick.is_empty()
    }

    pub fn is_last_to_act(&self) -> bool {
        self.current_trick.len() == PLAYERS - 1
    }

    /// Seat currently winning the in-progress trick.
    pub fn current_winner(&self) -> Result<Option<Seat>, DomainError> {
        let (Some(contract), false) = (self.contract(), self.current_trick.is_empty()) else {
            return Ok(None);
        };
        determine_trick_winner(&self.current_trick, &contract).map(Some)
    }

    /// Cards in tricks already collected this hand.
    pub fn completed_cards(&self) -> impl Iterator<Item = &Card> {
        self.completed_tricks
            .iter()
            .flat_map(|t| t.plays.iter().map(|(_, c)| c))
    }

    pub fn highest_value(&self) -> u8 {
        self.highest_bid
            .and_then(|b| b.choice.value())
            .unwrap_or(0)
    }
}
