use thiserror::Error;

use crate::ai::AiError;
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;

/// Service-level error returned by every public game operation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Internal error: {detail}")]
    Internal { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl EngineError {
    /// Stable error code for the transport layer.
    pub fn code(&self) -> ErrorCode {
        match self {
            EngineError::Validation { code, .. } => *code,
            EngineError::NotFound { code, .. } => *code,
            EngineError::Conflict { code, .. } => *code,
            EngineError::Internal { code, .. } => *code,
            EngineError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            EngineError::Validation { detail, .. }
            | EngineError::NotFound { detail, .. }
            | EngineError::Conflict { detail, .. }
            | EngineError::Internal { detail, .. }
            | EngineError::Config { detail } => detail,
        }
    }

    /// True for caller mistakes that left the game untouched.
    pub fn is_validation(&self) -> bool {
        matches!(self, EngineError::Validation { .. })
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn internal(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Internal {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn conflict(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for EngineError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => EngineError::Validation {
                code: ErrorCode::from(&kind),
                detail,
            },
            DomainError::NotFound(kind, detail) => EngineError::NotFound {
                code: ErrorCode::from(&kind),
                detail,
            },
            DomainError::Invariant(detail) => EngineError::Internal {
                code: ErrorCode::InvariantViolation,
                detail,
            },
        }
    }
}

impl From<AiError> for EngineError {
    fn from(err: AiError) -> Self {
        EngineError::internal(ErrorCode::AiFailure, format!("AI error: {err}"))
    }
}
