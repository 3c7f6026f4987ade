// Unit tests for error mapping - domain errors to service error codes
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::{EngineError, ErrorCode};

#[test]
fn maps_validation_kinds_to_codes() {
    let cases = [
        (ValidationKind::BidOutOfRange, ErrorCode::InvalidBid),
        (ValidationKind::DiscardCount, ErrorCode::InvalidDiscard),
        (ValidationKind::OutOfTurn, ErrorCode::OutOfTurn),
        (ValidationKind::SeatIsAi, ErrorCode::SeatIsAi),
        (ValidationKind::GameOver, ErrorCode::GameOver),
        (
            ValidationKind::Other("ANYTHING".into()),
            ErrorCode::ValidationError,
        ),
    ];
    for (kind, code) in cases {
        let err: EngineError = DomainError::validation(kind, "bad input").into();
        assert!(err.is_validation());
        assert_eq!(err.code(), code);
        assert_eq!(err.detail(), "bad input");
    }
}

#[test]
fn maps_not_found() {
    let err: EngineError = DomainError::not_found(NotFoundKind::Game, "game 7").into();
    assert!(matches!(err, EngineError::NotFound { .. }));
    assert_eq!(err.code(), ErrorCode::GameNotFound);

    let err: EngineError =
        DomainError::not_found(NotFoundKind::Other("seat".into()), "seat 9").into();
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[test]
fn invariant_is_never_a_validation_error() {
    let err: EngineError = DomainError::invariant("no eligible winner").into();
    assert!(!err.is_validation());
    assert_eq!(err.code().as_str(), "INVARIANT_VIOLATION");
}
