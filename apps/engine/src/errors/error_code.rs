//! Error codes surfaced to the transport layer.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE.

use core::fmt;

use super::domain::{NotFoundKind, ValidationKind};

/// Centralized error codes for the engine's public operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    InvalidSeat,
    InvalidPlayers,
    InvalidBid,
    InvalidFinalBid,
    MustFollowSuit,
    CardNotInHand,
    OutOfTurn,
    PhaseMismatch,
    NotBidWinner,
    SeatIsAi,
    BidAlreadyFinalized,
    BidNotFinalized,
    InvalidDiscard,
    ParseCard,
    GameOver,
    /// General validation error
    ValidationError,

    // Resource Not Found
    GameNotFound,
    NotFound,

    // Conflicts
    /// Game id already registered
    GameExists,

    // System Errors
    /// Engine invariant violated
    InvariantViolation,
    /// AI failed to produce a decision
    AiFailure,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidSeat => "INVALID_SEAT",
            Self::InvalidPlayers => "INVALID_PLAYERS",
            Self::InvalidBid => "INVALID_BID",
            Self::InvalidFinalBid => "INVALID_FINAL_BID",
            Self::MustFollowSuit => "MUST_FOLLOW_SUIT",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::NotBidWinner => "NOT_BID_WINNER",
            Self::SeatIsAi => "SEAT_IS_AI",
            Self::BidAlreadyFinalized => "BID_ALREADY_FINALIZED",
            Self::BidNotFinalized => "BID_NOT_FINALIZED",
            Self::InvalidDiscard => "INVALID_DISCARD",
            Self::ParseCard => "PARSE_CARD",
            Self::GameOver => "GAME_OVER",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::GameExists => "GAME_EXISTS",

            Self::InvariantViolation => "INVARIANT_VIOLATION",
            Self::AiFailure => "AI_FAILURE",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&ValidationKind> for ErrorCode {
    fn from(kind: &ValidationKind) -> Self {
        match kind {
            ValidationKind::BidOutOfRange => Self::InvalidBid,
            ValidationKind::InvalidFinalBid => Self::InvalidFinalBid,
            ValidationKind::MustFollowSuit => Self::MustFollowSuit,
            ValidationKind::CardNotInHand => Self::CardNotInHand,
            ValidationKind::OutOfTurn => Self::OutOfTurn,
            ValidationKind::PhaseMismatch => Self::PhaseMismatch,
            ValidationKind::NotBidWinner => Self::NotBidWinner,
            ValidationKind::SeatIsAi => Self::SeatIsAi,
            ValidationKind::BidAlreadyFinalized => Self::BidAlreadyFinalized,
            ValidationKind::BidNotFinalized => Self::BidNotFinalized,
            ValidationKind::DiscardCount => Self::InvalidDiscard,
            ValidationKind::ParseCard => Self::ParseCard,
            ValidationKind::InvalidSeat => Self::InvalidSeat,
            ValidationKind::InvalidPlayers => Self::InvalidPlayers,
            ValidationKind::GameOver => Self::GameOver,
            ValidationKind::Other(_) => Self::ValidationError,
        }
    }
}

impl From<&NotFoundKind> for ErrorCode {
    fn from(kind: &NotFoundKind) -> Self {
        match kind {
            NotFoundKind::Game => Self::GameNotFound,
            NotFoundKind::Other(_) => Self::NotFound,
        }
    }
}
