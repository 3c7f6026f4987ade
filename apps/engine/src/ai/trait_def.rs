//! AI player trait definition.

use std::fmt;

use crate::ai::policy;
use crate::domain::bid_eval::BidCandidate;
use crate::domain::player_view::VisibleGameState;
use crate::domain::{BidChoice, Card};

/// Errors that can occur during AI decision-making.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    /// AI encountered an internal error
    Internal(String),
    /// AI produced an invalid move
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

/// A bid plus the candidate it was derived from. The engine caches
/// `best` so an AI bid winner can finalize without being asked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidDecision {
    pub choice: BidChoice,
    pub best: Option<BidCandidate>,
}

/// Trait for AI players.
///
/// Implementations receive the game state visible to their seat and must
/// choose a legal action. Bidding and kitty discards share one policy
/// across tiers; tiers differ in card play.
pub trait AiPlayer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Bid the best evaluated candidate if it outbids the table, else pass.
    fn choose_bid(&self, state: &VisibleGameState) -> Result<BidDecision, AiError> {
        Ok(policy::bid_from_candidates(state))
    }

    /// Six cards to return to the kitty after absorbing it.
    fn choose_discard(&self, state: &VisibleGameState) -> Result<Vec<Card>, AiError> {
        policy::weakest_discards(state)
    }

    /// Choose a card to play. Must be one of `state.legal_plays()`.
    fn choose_play(&self, state: &VisibleGameState) -> Result<Card, AiError>;
}
