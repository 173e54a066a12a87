//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted while generating a question pack.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PackError {
    #[error("question pack must contain at least one question")]
    EmptyPack,
    #[error("max factor must be at least {min}, got {value}")]
    MaxFactorTooSmall { value: u32, min: u32 },
    #[error("max factor must be at most {max}, got {value}")]
    MaxFactorTooLarge { value: u32, max: u32 },
}

/// Rejected session actions.
///
/// A rejected action never mutates the session; callers that treat the
/// action as a disabled control may discard the error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("cannot move from question {index} of {total}")]
    InvalidNavigation { index: usize, total: usize },
    #[error("question {index} was already submitted")]
    DoubleSubmission { index: usize },
    #[error(transparent)]
    InvalidConfiguration(#[from] PackError),
    #[error("no practice session in progress")]
    NotPracticing,
    #[error("practice session already in progress")]
    AlreadyPracticing,
    #[error("configuration cannot change while practicing")]
    ConfigLocked,
}
