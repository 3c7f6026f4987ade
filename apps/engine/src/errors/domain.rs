//! Domain-level error type used by the rules engine and the AI.
//!
//! This error type is transport-agnostic. Service entry points return
//! `Result<T, crate::error::EngineError>` and convert from `DomainError`
//! using the provided `From<DomainError> for EngineError` implementation.

use thiserror::Error;

/// Validation failure kinds. Each one is a caller mistake: the action is
/// rejected and the game state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Bid value outside the 4..=7 range
    BidOutOfRange,
    /// Finalize requested with a missing or inconsistent suit
    InvalidFinalBid,
    MustFollowSuit,
    CardNotInHand,
    OutOfTurn,
    PhaseMismatch,
    /// Seat is not the holder of the winning bid
    NotBidWinner,
    /// Manual action attempted on behalf of an AI seat
    SeatIsAi,
    BidAlreadyFinalized,
    BidNotFinalized,
    /// Discard set does not hold exactly six cards
    DiscardCount,
    ParseCard,
    InvalidSeat,
    InvalidPlayers,
    GameOver,
    Other(String),
}

/// Missing resources in domain terms.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input or business rule violation; state is unchanged
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Internal logic defect; the action must abort
    #[error("invariant violated: {0}")]
    Invariant(String),
    /// Missing resource in domain terms
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    /// Returns the validation kind when this is a validation failure.
    pub fn validation_kind(&self) -> Option<&ValidationKind> {
        match self {
            Self::Validation(kind, _) => Some(kind),
            _ => None,
        }
    }

    pub fn is_invariant(&self) -> bool {
        matches!(self, Self::Invariant(_))
    }
}
